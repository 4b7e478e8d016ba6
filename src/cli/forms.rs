//! Interactive field prompts for the account forms.
//!
//! Each prompt attaches the matching [`crate::validate`] rule so invalid
//! input is rejected inline and the user is re-asked. Prompts return raw
//! strings; the operations layer remains the single validation authority.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::domain::AccountType;
use crate::errors::{BankError, Result};
use crate::validate;

fn interaction_failed(err: dialoguer::Error) -> BankError {
    BankError::Storage(format!("prompt failed: {err}"))
}

pub fn prompt_account_number(theme: &ColorfulTheme) -> Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt("Account number (12 digits)")
        .validate_with(|input: &String| {
            validate::account_number(input)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()
        .map_err(interaction_failed)
}

pub fn prompt_holder_name(theme: &ColorfulTheme) -> Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt("Holder name")
        .validate_with(|input: &String| {
            validate::holder_name(input)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()
        .map_err(interaction_failed)
}

/// Two-option account type select; returns the wire code.
pub fn prompt_account_type(theme: &ColorfulTheme) -> Result<String> {
    let options = [AccountType::Savings, AccountType::Current];
    let labels: Vec<String> = options
        .iter()
        .map(|kind| format!("{} ({})", kind.label(), kind.code()))
        .collect();
    let selected = Select::with_theme(theme)
        .with_prompt("Account type")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(interaction_failed)?;
    Ok(options[selected].code().to_string())
}

pub fn prompt_balance(theme: &ColorfulTheme, label: &str) -> Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(label)
        .validate_with(|input: &String| {
            validate::balance(input)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()
        .map_err(interaction_failed)
}

pub fn prompt_amount(theme: &ColorfulTheme, label: &str) -> Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(label)
        .validate_with(|input: &String| {
            validate::amount(input)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()
        .map_err(interaction_failed)
}
