//! The seven account operations.
//!
//! Each function validates its raw inputs, issues a single storage call
//! (plus the prior existence lookup that deposit and withdraw require), and
//! returns the affected row. The storage handle is passed in explicitly so
//! callers control where the table lives.

use crate::domain::{Account, BALANCE_MAX};
use crate::errors::{BankError, Result};
use crate::storage::AccountStore;
use crate::validate;

/// Opens a new account. All four fields are validated, including the
/// per-type minimum opening balance. Duplicate account numbers surface as
/// [`BankError::Duplicate`], distinct from validation failures.
pub fn create_account(
    store: &dyn AccountStore,
    number: &str,
    holder: &str,
    kind: &str,
    balance: &str,
) -> Result<Account> {
    let number = validate::account_number(number)?;
    let holder = validate::holder_name(holder)?;
    let kind = validate::account_type(kind)?;
    let balance = validate::opening_balance(balance, kind)?;

    let account = Account::new(number, holder, kind, balance);
    store.insert(&account)?;
    tracing::info!(number = %account.number, "account created");
    Ok(account)
}

/// Overwrites holder, type, and balance of an existing account. Only the
/// `[0, 1_000_000]` range applies to the new balance; the minimum-opening
/// rule is a creation-time check and is deliberately not re-applied here.
/// Existence is inferred from the update result rather than a prior lookup.
pub fn modify_account(
    store: &dyn AccountStore,
    number: &str,
    holder: &str,
    kind: &str,
    balance: &str,
) -> Result<Account> {
    let number = validate::account_number(number)?;
    let holder = validate::holder_name(holder)?;
    let kind = validate::account_type(kind)?;
    let balance = validate::balance(balance)?;

    let account = Account::new(number, holder, kind, balance);
    if !store.update(&account)? {
        return Err(BankError::NotFound(account.number.as_str().to_string()));
    }
    tracing::info!(number = %account.number, "account modified");
    Ok(account)
}

/// Looks up one account and returns its fields verbatim.
pub fn balance_inquiry(store: &dyn AccountStore, number: &str) -> Result<Account> {
    let number = validate::account_number(number)?;
    store
        .fetch(&number)?
        .ok_or_else(|| BankError::NotFound(number.as_str().to_string()))
}

/// Adds a positive amount to an existing account's balance. The resulting
/// balance must stay at or under the 1,000,000 ceiling.
pub fn deposit(store: &dyn AccountStore, number: &str, amount: &str) -> Result<Account> {
    let number = validate::account_number(number)?;
    let amount = validate::amount(amount)?;

    let mut account = store
        .fetch(&number)?
        .ok_or_else(|| BankError::NotFound(number.as_str().to_string()))?;
    let new_balance = account
        .balance
        .checked_add(amount)
        .filter(|b| *b <= BALANCE_MAX)
        .ok_or_else(|| {
            BankError::Range(format!(
                "deposit of {} would push balance past {}",
                amount, BALANCE_MAX
            ))
        })?;
    account.balance = new_balance;
    store.update(&account)?;
    tracing::info!(number = %account.number, amount, "deposit applied");
    Ok(account)
}

/// Subtracts a positive amount from an existing account's balance, failing
/// with [`BankError::InsufficientFunds`] when it exceeds the balance.
pub fn withdraw(store: &dyn AccountStore, number: &str, amount: &str) -> Result<Account> {
    let number = validate::account_number(number)?;
    let amount = validate::amount(amount)?;

    let mut account = store
        .fetch(&number)?
        .ok_or_else(|| BankError::NotFound(number.as_str().to_string()))?;
    if account.balance < amount {
        return Err(BankError::InsufficientFunds {
            balance: account.balance,
            requested: amount,
        });
    }
    account.balance -= amount;
    store.update(&account)?;
    tracing::info!(number = %account.number, amount, "withdrawal applied");
    Ok(account)
}

/// Removes one account row.
pub fn delete_account(store: &dyn AccountStore, number: &str) -> Result<()> {
    let number = validate::account_number(number)?;
    if !store.delete(&number)? {
        return Err(BankError::NotFound(number.as_str().to_string()));
    }
    tracing::info!(number = %number, "account deleted");
    Ok(())
}

/// Returns every account ordered by number. An empty table is reported as
/// [`BankError::EmptyResult`] so callers can message it distinctly.
pub fn list_accounts(store: &dyn AccountStore) -> Result<Vec<Account>> {
    let accounts = store.fetch_all()?;
    if accounts.is_empty() {
        return Err(BankError::EmptyResult);
    }
    Ok(accounts)
}
