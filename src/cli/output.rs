use std::fmt;
use std::sync::RwLock;

use colored::Colorize;
use once_cell::sync::Lazy;

use crate::domain::Account;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub quiet_mode: bool,
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES.read().map(|guard| *guard).unwrap_or_default()
}

fn emit(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    if prefs.quiet_mode && kind == MessageKind::Info {
        return;
    }
    let text = message.to_string();
    let line = match kind {
        MessageKind::Info => format!("INFO: {text}").normal(),
        MessageKind::Success => format!("SUCCESS: {text}").green(),
        MessageKind::Warning => format!("WARNING: {text}").yellow(),
        MessageKind::Error => format!("ERROR: {text}").red(),
    };
    match kind {
        MessageKind::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

/// Renders one account as a detail block, field per line.
pub fn account_details(account: &Account) -> String {
    format!(
        "Account Number: {}\nHolder:         {}\nType:           {}\nBalance:        {}",
        account.number,
        account.holder,
        account.kind,
        account.balance
    )
}

/// Renders the account grid with aligned columns.
pub fn accounts_table(accounts: &[Account]) -> String {
    let headers = ["ACCOUNT NUMBER", "HOLDER", "TYPE", "BALANCE"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    let rows: Vec<[String; 4]> = accounts
        .iter()
        .map(|account| {
            [
                account.number.as_str().to_string(),
                account.holder.clone(),
                account.kind.label().to_string(),
                account.balance.to_string(),
            ]
        })
        .collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.len());
        }
    }

    let mut out = String::new();
    for (idx, header) in headers.iter().enumerate() {
        if idx > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:<width$}", header, width = widths[idx]));
    }
    out.push('\n');
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:<width$}", cell, width = widths[idx]));
        }
        out.push('\n');
    }
    out
}
