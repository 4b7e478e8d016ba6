pub mod json_store;

use crate::domain::{Account, AccountNumber};
use crate::errors::Result;

/// Abstraction over the persistent account table.
///
/// Each call is a self-contained acquire-execute-persist sequence; no
/// connection or lock survives between calls. Operations receive a store
/// handle explicitly instead of reaching for process-global state.
pub trait AccountStore {
    /// Inserts a new row. Fails with `Duplicate` when the key exists;
    /// an existing row is never overwritten.
    fn insert(&self, account: &Account) -> Result<()>;

    /// Overwrites the mutable fields of the row with the same key.
    /// Returns `false` when no row matched.
    fn update(&self, account: &Account) -> Result<bool>;

    /// Fetches one row by account number.
    fn fetch(&self, number: &AccountNumber) -> Result<Option<Account>>;

    /// Returns every row, ordered by account number.
    fn fetch_all(&self) -> Result<Vec<Account>>;

    /// Removes one row. Returns `false` when no row matched.
    fn delete(&self, number: &AccountNumber) -> Result<bool>;
}

pub use json_store::JsonStore;
