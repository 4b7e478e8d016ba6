use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for validation, storage, and operation failures.
///
/// Every variant is surfaced to the user as a message at the call site;
/// none is fatal to the running shell.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("Invalid format: {0}")]
    Format(String),
    #[error("Invalid number: {0}")]
    Type(String),
    #[error("Out of range: {0}")]
    Range(String),
    #[error("Account number already exists: {0}")]
    Duplicate(String),
    #[error("Account not found: {0}")]
    NotFound(String),
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },
    #[error("No accounts recorded")]
    EmptyResult,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, BankError>;

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        BankError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        BankError::Storage(err.to_string())
    }
}
