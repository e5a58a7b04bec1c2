use std::fs;
use std::sync::Arc;

use chrono::NaiveDate;
use finance_core::core::FinanceManager;
use finance_core::domain::TransactionKind;
use finance_core::store::{collections, JsonFileStore, StoreBackend, Watcher};
use tempfile::TempDir;

fn file_store(temp: &TempDir) -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::new(Some(temp.path().to_path_buf())).expect("file store"))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn state_survives_reopening_the_store() {
    let temp = TempDir::new().expect("temp dir");

    {
        let mut manager = FinanceManager::new(file_store(&temp));
        manager.setup("Ada", "ada@family.local", date(2025, 1, 1)).unwrap();
        manager.add_transaction("salary", 100.0, TransactionKind::Income, date(2025, 1, 1));
        manager.set_budget("Food", 50.0).unwrap();
    }

    let reopened = FinanceManager::new(file_store(&temp));
    assert_eq!(reopened.user().unwrap().name, "Ada");
    assert_eq!(reopened.ledger.transactions().len(), 1);
    assert_eq!(reopened.budgets.budgets().len(), 1);
    assert_eq!(reopened.family.members().len(), 1);
}

#[test]
fn corrupt_collection_file_degrades_to_empty() {
    let temp = TempDir::new().expect("temp dir");

    {
        let mut manager = FinanceManager::new(file_store(&temp));
        manager.add_transaction("salary", 100.0, TransactionKind::Income, date(2025, 1, 1));
    }

    let path = temp.path().join("transactions.json");
    fs::write(&path, "{definitely not json").expect("corrupt file");

    let manager = FinanceManager::new(file_store(&temp));
    assert!(manager.ledger.transactions().is_empty());
}

#[test]
fn watcher_sees_out_of_band_file_writes() {
    let temp = TempDir::new().expect("temp dir");
    let store = file_store(&temp);
    let mut watcher = Watcher::new(store.clone());
    assert!(!watcher.poll());

    // Another process writing to the same directory.
    let other = JsonFileStore::new(Some(temp.path().to_path_buf())).expect("second store");
    other
        .write(collections::TRANSACTIONS, "[]")
        .expect("external write");

    assert!(watcher.poll());
    assert!(!watcher.poll());
}

#[test]
fn refresh_replaces_snapshot_after_external_change() {
    let temp = TempDir::new().expect("temp dir");
    let mut manager = FinanceManager::new(file_store(&temp));
    manager.add_transaction("salary", 100.0, TransactionKind::Income, date(2025, 1, 1));

    let mut other = FinanceManager::new(file_store(&temp));
    other.add_transaction("pizza", -20.0, TransactionKind::Expense, date(2025, 1, 2));

    assert!(manager.refresh_all());
    // Last writer wins in full: the other client's snapshot replaces ours.
    assert_eq!(manager.ledger.transactions().len(), 2);
}

#[test]
fn clear_all_removes_collection_files() {
    let temp = TempDir::new().expect("temp dir");
    let mut manager = FinanceManager::new(file_store(&temp));
    manager.setup("Ada", "ada@family.local", date(2025, 1, 1)).unwrap();
    manager.add_transaction("salary", 100.0, TransactionKind::Income, date(2025, 1, 1));

    manager.clear_all();
    assert!(!temp.path().join("transactions.json").exists());
    assert!(!temp.path().join("user.json").exists());
    assert!(manager.ledger.transactions().is_empty());
}
