//! Durable storage seam used by the decision store.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::error::{JournalError, Result};

/// Name of the slot holding the serialized decision collection.
pub const DECISIONS_SLOT: &str = "lumen-decisions";

/// A named-slot key/value medium.
///
/// Implementations must replace a slot's value atomically: a reader sees
/// either the previous value or the new one, never a partial write.
pub trait Storage: Send {
    /// Reads the value stored under `key`, `None` when the slot is empty.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
struct MemoryState {
    slots: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

/// In-process storage with a cloneable handle.
///
/// Clones share the same slots, so a caller can hand one clone to a store
/// and inspect the persisted state through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a raw slot value.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .lock()
            .slots
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw value currently stored under `key`.
    pub fn slot(&self, key: &str) -> Option<String> {
        self.lock().slots.get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Makes subsequent writes fail, as a full quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A poisoned map is still a consistent map: writes replace whole values.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slot(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(JournalError::Storage {
                message: "storage quota exceeded".to_string(),
            });
        }
        state.slots.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }
}
