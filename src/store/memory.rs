use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::{Result, StoreBackend};

/// In-memory backend for tests and embedding. Every write or removal bumps
/// the revision counter.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    revision: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryStore {
    fn read(&self, collection: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("memory store poisoned")
            .get(collection)
            .cloned()
    }

    fn write(&self, collection: &str, payload: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("memory store poisoned")
            .insert(collection.to_string(), payload.to_string());
        self.revision.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, collection: &str) -> Result<()> {
        let removed = self
            .entries
            .lock()
            .expect("memory store poisoned")
            .remove(collection)
            .is_some();
        if removed {
            self.revision.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }
}
