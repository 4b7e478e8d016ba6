//! Field validation applied before any storage access.
//!
//! Each helper maps one raw form field to a typed value or a specific
//! [`BankError`] variant: shape problems become `Format`, non-numeric
//! amounts become `Type`, and bound violations become `Range`.

use crate::domain::{AccountNumber, AccountType, BALANCE_MAX, BALANCE_MIN};
use crate::errors::{BankError, Result};

/// Validates the 12-digit account number shape.
pub fn account_number(raw: &str) -> Result<AccountNumber> {
    AccountNumber::parse(raw)
}

/// Validates the holder name: non-empty after trimming.
pub fn holder_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BankError::Format("holder name must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

/// Validates the account type code (`S` or `C`).
pub fn account_type(raw: &str) -> Result<AccountType> {
    AccountType::from_code(raw)
}

/// Parses an integer field, mapping parse failures to a type error.
fn integer(raw: &str, field: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        BankError::Type(format!(
            "{} must be a whole number, got `{}`",
            field,
            raw.trim()
        ))
    })
}

/// Validates a balance against the closed `[0, 1_000_000]` range.
pub fn balance(raw: &str) -> Result<i64> {
    let value = integer(raw, "balance")?;
    if !(BALANCE_MIN..=BALANCE_MAX).contains(&value) {
        return Err(BankError::Range(format!(
            "balance must be between {} and {}, got {}",
            BALANCE_MIN, BALANCE_MAX, value
        )));
    }
    Ok(value)
}

/// Validates an opening balance: range check plus the per-type minimum.
/// The minimum applies only at creation, never on later modifications.
pub fn opening_balance(raw: &str, kind: AccountType) -> Result<i64> {
    let value = balance(raw)?;
    let minimum = kind.min_opening_balance();
    if value < minimum {
        return Err(BankError::Range(format!(
            "{} accounts require an opening balance of at least {}, got {}",
            kind.label(),
            minimum,
            value
        )));
    }
    Ok(value)
}

/// Validates a deposit or withdrawal amount: a strictly positive integer.
pub fn amount(raw: &str) -> Result<i64> {
    let value = integer(raw, "amount")?;
    if value <= 0 {
        return Err(BankError::Range(format!(
            "amount must be positive, got {}",
            value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holder_name_trims_and_rejects_empty() {
        assert_eq!(holder_name("  Alice  ").unwrap(), "Alice");
        assert!(matches!(holder_name("   "), Err(BankError::Format(_))));
    }

    #[test]
    fn balance_distinguishes_type_and_range_errors() {
        assert!(matches!(balance("abc"), Err(BankError::Type(_))));
        assert!(matches!(balance("-1"), Err(BankError::Range(_))));
        assert!(matches!(balance("1000001"), Err(BankError::Range(_))));
        assert_eq!(balance("1000000").unwrap(), 1_000_000);
        assert_eq!(balance(" 0 ").unwrap(), 0);
    }

    #[test]
    fn opening_balance_enforces_per_type_minimum() {
        assert!(matches!(
            opening_balance("400", AccountType::Savings),
            Err(BankError::Range(_))
        ));
        assert_eq!(opening_balance("500", AccountType::Savings).unwrap(), 500);
        assert!(matches!(
            opening_balance("999", AccountType::Current),
            Err(BankError::Range(_))
        ));
        assert_eq!(opening_balance("1000", AccountType::Current).unwrap(), 1000);
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(matches!(amount("0"), Err(BankError::Range(_))));
        assert!(matches!(amount("-5"), Err(BankError::Range(_))));
        assert!(matches!(amount("5.5"), Err(BankError::Type(_))));
        assert_eq!(amount("250").unwrap(), 250);
    }
}
