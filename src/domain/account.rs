use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{BankError, Result};

/// Lower bound for any persisted balance.
pub const BALANCE_MIN: i64 = 0;
/// Upper bound for any persisted balance.
pub const BALANCE_MAX: i64 = 1_000_000;

const ACCOUNT_NUMBER_LEN: usize = 12;

/// Twelve-digit account identifier. Immutable once an account is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Parses a raw account number, enforcing the 12-decimal-digit shape.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.len() != ACCOUNT_NUMBER_LEN || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(BankError::Format(format!(
                "account number must be exactly {} digits, got `{}`",
                ACCOUNT_NUMBER_LEN, trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Enumerates the two recognized account types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountType {
    #[serde(rename = "S")]
    Savings,
    #[serde(rename = "C")]
    Current,
}

impl AccountType {
    /// Resolves a wire code (`S` or `C`, case-insensitive) to a type.
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim() {
            "S" | "s" => Ok(AccountType::Savings),
            "C" | "c" => Ok(AccountType::Current),
            other => Err(BankError::Format(format!(
                "account type must be S (savings) or C (current), got `{}`",
                other
            ))),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            AccountType::Savings => "S",
            AccountType::Current => "C",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Current => "Current",
        }
    }

    /// Minimum balance required when opening an account of this type.
    /// Checked only at creation.
    pub fn min_opening_balance(self) -> i64 {
        match self {
            AccountType::Savings => 500,
            AccountType::Current => 1000,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single bank account row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub number: AccountNumber,
    pub holder: String,
    pub kind: AccountType,
    pub balance: i64,
}

impl Account {
    pub fn new(number: AccountNumber, holder: impl Into<String>, kind: AccountType, balance: i64) -> Self {
        Self {
            number,
            holder: holder.into(),
            kind,
            balance,
        }
    }

    /// True when the balance sits inside the persistable range.
    pub fn balance_in_range(&self) -> bool {
        (BALANCE_MIN..=BALANCE_MAX).contains(&self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_twelve_digits() {
        let number = AccountNumber::parse("100000000001").expect("valid number");
        assert_eq!(number.as_str(), "100000000001");
    }

    #[test]
    fn parse_rejects_short_and_non_numeric_input() {
        assert!(matches!(
            AccountNumber::parse("1"),
            Err(BankError::Format(_))
        ));
        assert!(matches!(
            AccountNumber::parse("10000000000a"),
            Err(BankError::Format(_))
        ));
        assert!(matches!(
            AccountNumber::parse("1000000000012"),
            Err(BankError::Format(_))
        ));
    }

    #[test]
    fn type_codes_round_trip() {
        assert_eq!(AccountType::from_code("s").unwrap(), AccountType::Savings);
        assert_eq!(AccountType::from_code("C").unwrap(), AccountType::Current);
        assert_eq!(AccountType::Savings.code(), "S");
        assert!(AccountType::from_code("X").is_err());
    }

    #[test]
    fn opening_minimums_differ_by_type() {
        assert_eq!(AccountType::Savings.min_opening_balance(), 500);
        assert_eq!(AccountType::Current.min_opening_balance(), 1000);
    }
}
