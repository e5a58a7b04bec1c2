//! Injected persistence: raw string backends plus typed collection handles.
//!
//! The core treats its in-memory state as a cache over a backend that may be
//! modified out-of-band. There is no merge on refresh; handlers replace the
//! full snapshot to match last-writer-wins semantics. Change detection is a
//! revision counter polled through [`Watcher`].

pub mod json_file;
pub mod memory;

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::StoreError;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Suggested cadence for the polling refresh fallback.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Collection names shared with the original wire format.
pub mod collections {
    pub const TRANSACTIONS: &str = "transactions";
    pub const BUDGETS: &str = "budgets";
    pub const RECURRING_BILLS: &str = "recurring_bills";
    pub const SAVINGS_GOALS: &str = "savings_goals";
    pub const FAMILY_MEMBERS: &str = "family_members";
    pub const ALERT_SETTINGS: &str = "alert_settings";
    pub const USER: &str = "user";
}

/// Abstraction over persistence backends: JSON payloads keyed by collection
/// name. `revision` must increase whenever any collection changes; it backs
/// the generic no-payload "changed" signal.
pub trait StoreBackend: Send + Sync {
    fn read(&self, collection: &str) -> Option<String>;
    fn write(&self, collection: &str, payload: &str) -> Result<()>;
    fn remove(&self, collection: &str) -> Result<()>;
    fn revision(&self) -> u64;
}

/// Typed handle over one named collection.
///
/// Reads never fail: absent or malformed stored data yields an empty
/// collection (logged, not propagated). Writes are fire-and-forget.
pub struct Collection<T> {
    name: &'static str,
    backend: Arc<dyn StoreBackend>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    pub fn new(backend: Arc<dyn StoreBackend>, name: &'static str) -> Self {
        Self {
            name,
            backend,
            _marker: PhantomData,
        }
    }

    pub fn get(&self) -> Vec<T> {
        let Some(raw) = self.backend.read(self.name) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(
                    collection = self.name,
                    %err,
                    "discarding malformed stored data"
                );
                Vec::new()
            }
        }
    }

    pub fn set(&self, items: &[T]) {
        match serde_json::to_string(items) {
            Ok(payload) => {
                if let Err(err) = self.backend.write(self.name, &payload) {
                    tracing::warn!(collection = self.name, %err, "flush failed");
                }
            }
            Err(err) => {
                tracing::warn!(collection = self.name, %err, "serialization failed");
            }
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.backend.remove(self.name) {
            tracing::warn!(collection = self.name, %err, "clear failed");
        }
    }
}

/// Typed handle over a single-value collection, e.g. alert settings.
pub struct Singleton<T> {
    name: &'static str,
    backend: Arc<dyn StoreBackend>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> Singleton<T> {
    pub fn new(backend: Arc<dyn StoreBackend>, name: &'static str) -> Self {
        Self {
            name,
            backend,
            _marker: PhantomData,
        }
    }

    pub fn get(&self) -> Option<T> {
        let raw = self.backend.read(self.name)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(
                    collection = self.name,
                    %err,
                    "discarding malformed stored data"
                );
                None
            }
        }
    }

    pub fn get_or_default(&self) -> T
    where
        T: Default,
    {
        self.get().unwrap_or_default()
    }

    pub fn set(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(payload) => {
                if let Err(err) = self.backend.write(self.name, &payload) {
                    tracing::warn!(collection = self.name, %err, "flush failed");
                }
            }
            Err(err) => {
                tracing::warn!(collection = self.name, %err, "serialization failed");
            }
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.backend.remove(self.name) {
            tracing::warn!(collection = self.name, %err, "clear failed");
        }
    }
}

/// Polls a backend for out-of-band changes. `poll` answers whether the
/// backend revision moved since the previous call; callers then reload full
/// snapshots rather than merging.
pub struct Watcher {
    backend: Arc<dyn StoreBackend>,
    last_seen: u64,
}

impl Watcher {
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        let last_seen = backend.revision();
        Self { backend, last_seen }
    }

    pub fn poll(&mut self) -> bool {
        let revision = self.backend.revision();
        let changed = revision != self.last_seen;
        self.last_seen = revision;
        changed
    }

    /// Records the current revision as observed, so the caller's own flushes
    /// do not register as external changes.
    pub fn mark_seen(&mut self) {
        self.last_seen = self.backend.revision();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn backend() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn absent_collection_reads_empty() {
        let store: Collection<Transaction> =
            Collection::new(backend(), collections::TRANSACTIONS);
        assert!(store.get().is_empty());
    }

    #[test]
    fn malformed_payload_reads_empty() {
        let backend = backend();
        backend
            .write(collections::TRANSACTIONS, "{not json")
            .unwrap();
        let store: Collection<Transaction> =
            Collection::new(backend, collections::TRANSACTIONS);
        assert!(store.get().is_empty());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let store: Collection<Transaction> =
            Collection::new(backend(), collections::TRANSACTIONS);
        let txn = Transaction::new(
            "Salary",
            100.0,
            TransactionKind::Income,
            "Salary",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        store.set(std::slice::from_ref(&txn));
        let loaded = store.get();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, txn.id);
    }

    #[test]
    fn watcher_reports_external_writes_once() {
        let backend = backend();
        let mut watcher = Watcher::new(backend.clone());
        assert!(!watcher.poll());
        backend.write(collections::BUDGETS, "[]").unwrap();
        assert!(watcher.poll());
        assert!(!watcher.poll());
    }
}
