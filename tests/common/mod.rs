use bank_core::storage::JsonStore;
use tempfile::TempDir;

/// Builds an isolated account table under a temp directory. Keep the guard
/// alive for the duration of the test.
pub fn temp_store() -> (JsonStore, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let store = JsonStore::open(temp.path().join("accounts.json")).expect("open store");
    (store, temp)
}
