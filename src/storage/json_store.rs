//! File-backed account table.
//!
//! The whole table lives in one JSON document keyed by account number.
//! Every trait call reads the file, applies a single mutation, and writes
//! the document back through a tmp file renamed into place. Row invariants
//! mirroring the table constraints (digit-only key, balance range) are
//! re-checked before anything is persisted.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccountNumber};
use crate::errors::{BankError, Result};

use super::AccountStore;

const TMP_SUFFIX: &str = "tmp";

/// On-disk shape of the account table.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TableDocument {
    saved_at: Option<DateTime<Utc>>,
    accounts: BTreeMap<String, Account>,
}

/// JSON-file implementation of [`AccountStore`].
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens a store over the given table file, creating parent directories.
    /// The file itself is created lazily on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<TableDocument> {
        if !self.path.exists() {
            return Ok(TableDocument::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_table(&self, mut table: TableDocument) -> Result<()> {
        table.saved_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(&table)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn check_row(account: &Account) -> Result<()> {
        if !account.balance_in_range() {
            return Err(BankError::Range(format!(
                "refusing to persist balance {} for account {}",
                account.balance, account.number
            )));
        }
        Ok(())
    }
}

impl AccountStore for JsonStore {
    fn insert(&self, account: &Account) -> Result<()> {
        Self::check_row(account)?;
        let mut table = self.read_table()?;
        let key = account.number.as_str().to_string();
        if table.accounts.contains_key(&key) {
            return Err(BankError::Duplicate(key));
        }
        table.accounts.insert(key, account.clone());
        self.write_table(table)?;
        tracing::debug!(number = %account.number, "row inserted");
        Ok(())
    }

    fn update(&self, account: &Account) -> Result<bool> {
        Self::check_row(account)?;
        let mut table = self.read_table()?;
        let key = account.number.as_str();
        match table.accounts.get_mut(key) {
            Some(row) => {
                *row = account.clone();
            }
            None => return Ok(false),
        }
        self.write_table(table)?;
        tracing::debug!(number = %account.number, "row updated");
        Ok(true)
    }

    fn fetch(&self, number: &AccountNumber) -> Result<Option<Account>> {
        let table = self.read_table()?;
        Ok(table.accounts.get(number.as_str()).cloned())
    }

    fn fetch_all(&self) -> Result<Vec<Account>> {
        let table = self.read_table()?;
        Ok(table.accounts.into_values().collect())
    }

    fn delete(&self, number: &AccountNumber) -> Result<bool> {
        let mut table = self.read_table()?;
        if table.accounts.remove(number.as_str()).is_none() {
            return Ok(false);
        }
        self.write_table(table)?;
        tracing::debug!(number = %number, "row deleted");
        Ok(true)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountType;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::open(temp.path().join("accounts.json")).expect("open store");
        (store, temp)
    }

    fn sample(number: &str, balance: i64) -> Account {
        Account::new(
            AccountNumber::parse(number).expect("valid number"),
            "Alice",
            AccountType::Savings,
            balance,
        )
    }

    #[test]
    fn insert_then_fetch_returns_row() {
        let (store, _guard) = store_with_temp_dir();
        let account = sample("100000000001", 500);
        store.insert(&account).expect("insert");
        let fetched = store.fetch(&account.number).expect("fetch");
        assert_eq!(fetched, Some(account));
    }

    #[test]
    fn insert_rejects_duplicate_key_without_overwriting() {
        let (store, _guard) = store_with_temp_dir();
        let first = sample("100000000001", 500);
        store.insert(&first).expect("first insert");

        let mut second = first.clone();
        second.holder = "Mallory".into();
        let err = store.insert(&second).expect_err("duplicate must fail");
        assert!(matches!(err, BankError::Duplicate(_)));

        let stored = store.fetch(&first.number).expect("fetch").expect("row");
        assert_eq!(stored.holder, "Alice");
    }

    #[test]
    fn update_reports_whether_a_row_matched() {
        let (store, _guard) = store_with_temp_dir();
        let account = sample("100000000001", 500);
        assert!(!store.update(&account).expect("update on empty table"));
        store.insert(&account).expect("insert");

        let mut changed = account.clone();
        changed.balance = 900;
        assert!(store.update(&changed).expect("update"));
        let stored = store.fetch(&account.number).expect("fetch").expect("row");
        assert_eq!(stored.balance, 900);
    }

    #[test]
    fn store_refuses_out_of_range_balance() {
        let (store, _guard) = store_with_temp_dir();
        let account = sample("100000000001", 1_000_001);
        assert!(matches!(
            store.insert(&account),
            Err(BankError::Range(_))
        ));
    }

    #[test]
    fn rows_survive_reopening_the_store() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("accounts.json");
        {
            let store = JsonStore::open(&path).expect("open store");
            store.insert(&sample("100000000001", 500)).expect("insert");
        }
        let reopened = JsonStore::open(&path).expect("reopen store");
        let rows = reopened.fetch_all().expect("fetch all");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number.as_str(), "100000000001");
    }

    #[test]
    fn fetch_all_orders_by_account_number() {
        let (store, _guard) = store_with_temp_dir();
        store.insert(&sample("300000000003", 500)).expect("insert");
        store.insert(&sample("100000000001", 500)).expect("insert");
        store.insert(&sample("200000000002", 500)).expect("insert");
        let numbers: Vec<_> = store
            .fetch_all()
            .expect("fetch all")
            .into_iter()
            .map(|a| a.number.as_str().to_string())
            .collect();
        assert_eq!(
            numbers,
            vec!["100000000001", "200000000002", "300000000003"]
        );
    }
}
