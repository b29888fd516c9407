//! The decision store: canonical ordered collection plus its durable slot.
//!
//! [`DecisionStore`] is the single writer of the persisted collection. The
//! in-memory vector is the source of truth; every successful mutation
//! re-serializes the whole collection into one slot write.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Journal /      │    │  DecisionStore  │    │    Storage      │
//! │  EditorSession  │───▶│ (Vec<Decision>) │───▶│ (SQLite / mem)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Storage failures never escape the store. Unreadable data loads as an
//! empty collection; a failed write is logged and marks the store dirty, and
//! the next mutation saves the full collection again.
//!
//! # Example
//!
//! ```rust
//! use lumen_core::{params::DecisionSeed, storage::MemoryStorage, DecisionStore};
//!
//! let storage = MemoryStorage::new();
//! let mut store = DecisionStore::open(storage.clone());
//!
//! let decision = store.create(Some(&DecisionSeed {
//!     title: Some("Move abroad?".to_string()),
//!     ..Default::default()
//! }));
//! assert_eq!(store.decisions()[0].id, decision.id);
//! assert_eq!(store.load(), store.decisions());
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::Timestamp;
use log::{debug, error, warn};

use crate::{
    error::{JournalError, Result},
    models::{Decision, DecisionId},
    params::DecisionSeed,
    storage::{Storage, DECISIONS_SLOT},
};

pub mod builder;


pub use builder::StoreBuilder;

/// A store shared between the journal and debounced write-through tasks.
pub type SharedStore = Arc<Mutex<DecisionStore>>;

/// Locks a shared store, recovering from poisoning.
///
/// The store's invariants hold between statements, so a panic in another
/// holder cannot leave the collection half-updated.
pub fn lock_store(store: &SharedStore) -> MutexGuard<'_, DecisionStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owned decision collection mirrored to durable storage.
pub struct DecisionStore {
    storage: Box<dyn Storage>,
    decisions: Vec<Decision>,
    dirty: bool,
}

impl DecisionStore {
    /// Opens a store over `storage` and loads the persisted collection.
    pub fn open(storage: impl Storage + 'static) -> Self {
        let mut store = Self {
            storage: Box::new(storage),
            decisions: Vec::new(),
            dirty: false,
        };
        store.reload();
        store
    }

    /// Wraps the store for sharing with editor sessions.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Reads the persisted collection.
    ///
    /// Missing or unparseable data yields an empty list; the problem is
    /// logged and never reported as an error.
    pub fn load(&self) -> Vec<Decision> {
        let raw = match self.storage.read(DECISIONS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read stored decisions, starting empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(decisions) => decisions,
            Err(e) => {
                warn!("Stored decisions are corrupt, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Replaces the in-memory collection with the persisted one.
    pub fn reload(&mut self) -> &[Decision] {
        self.decisions = self.load();
        self.dirty = false;
        debug!("Loaded {} decisions", self.decisions.len());
        &self.decisions
    }

    /// Persists the full in-memory collection.
    ///
    /// Failures are logged and leave the store dirty; the in-memory state
    /// stays authoritative until a later save succeeds.
    pub fn save(&mut self) {
        let payload = match serde_json::to_string(&self.decisions) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize decisions: {e}");
                self.dirty = true;
                return;
            }
        };

        match self.storage.write(DECISIONS_SLOT, &payload) {
            Ok(()) => {
                if self.dirty {
                    debug!("Recovered from earlier save failure");
                }
                self.dirty = false;
            }
            Err(e) => {
                error!("Failed to save decisions: {e}");
                self.dirty = true;
            }
        }
    }

    /// Whether the durable copy is known to lag behind memory.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Snapshot of the collection, newest first.
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn get(&self, id: &DecisionId) -> Option<&Decision> {
        self.decisions.iter().find(|d| &d.id == id)
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Creates a pending decision, prepends it and persists the collection.
    pub fn create(&mut self, seed: Option<&DecisionSeed>) -> Decision {
        let now = Timestamp::now();
        let id = self.fresh_id(now);

        let mut decision = Decision::new(id, now);
        if let Some(seed) = seed {
            seed.apply_to(&mut decision);
        }

        self.decisions.insert(0, decision.clone());
        self.save();
        debug!("Created decision {}", decision.id);
        decision
    }

    /// Replaces the entry whose id matches `decision.id`.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::DecisionNotFound` when no entry matches; the
    /// collection is left unchanged.
    pub fn update(&mut self, decision: Decision) -> Result<()> {
        let slot = self
            .decisions
            .iter_mut()
            .find(|d| d.id == decision.id)
            .ok_or_else(|| JournalError::DecisionNotFound {
                id: decision.id.clone(),
            })?;

        if *slot != decision {
            *slot = decision;
            self.save();
        } else if self.dirty {
            self.save();
        }
        Ok(())
    }

    /// Removes the matching entry, returning it. Absent ids are a no-op.
    pub fn delete(&mut self, id: &DecisionId) -> Option<Decision> {
        let index = self.decisions.iter().position(|d| &d.id == id)?;
        let removed = self.decisions.remove(index);
        self.save();
        debug!("Deleted decision {id}");
        Some(removed)
    }

    /// Time-based id with a numeric disambiguator on collision.
    fn fresh_id(&self, now: Timestamp) -> DecisionId {
        let base = DecisionId::from_timestamp(now);
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = base.with_suffix(n);
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}
