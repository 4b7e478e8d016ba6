pub mod account;

pub use account::{Account, AccountNumber, AccountType, BALANCE_MAX, BALANCE_MIN};
