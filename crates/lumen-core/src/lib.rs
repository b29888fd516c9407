//! Core library for the Lumen decision journal.
//!
//! A decision journal records choices as they are made (situation, choice,
//! reasoning, expected outcome) and revisits them once the outcome is known.
//! This crate holds everything below the presentation surface:
//!
//! - [`store`]: the owned decision collection and its durable slot
//! - [`editor`]: the per-decision editing contract with debounced writes
//! - [`journal`]: selection, guarded deletion and assistant request flow
//! - [`assistant`]: the stateless reasoning assistant and its Gemini backend
//! - [`templates`]: the static template catalog
//! - [`display`]: markdown rendering of all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_core::{
//!     models::DecisionField, params::DecisionSeed, storage::MemoryStorage, DecisionStore,
//!     Journal,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> lumen_core::Result<()> {
//! let mut journal = Journal::new(DecisionStore::open(MemoryStorage::new()));
//!
//! let seed = DecisionSeed {
//!     situation: Some("Choosing between job A and B".to_string()),
//!     ..Default::default()
//! };
//! journal.new_decision(Some(&seed))?;
//! journal.set_field(DecisionField::Choice, "Job B")?;
//! journal.mark_reviewed()?;
//!
//! assert_eq!(journal.decisions()[0].choice, "Job B");
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod db;
pub mod debounce;
pub mod display;
pub mod editor;
pub mod error;
pub mod journal;
pub mod models;
pub mod params;
pub mod storage;
pub mod store;
pub mod templates;

// Re-export commonly used types
pub use assistant::{
    AssistantAction, AssistantClient, AssistantOutput, AssistantPanel, AssistantRequest,
    GeminiBackend, GeminiConfig, ReasoningBackend,
};
pub use db::Database;
pub use display::{
    CreateResult, DecisionList, DecisionSummary, DeleteResult, OperationStatus, TemplateCatalog,
    UpdateResult,
};
pub use editor::{EditorSession, DEFAULT_DEBOUNCE};
pub use error::{AssistantError, JournalError, Result};
pub use journal::{AssistantOutcome, AssistantTicket, Confirm, Journal};
pub use models::{Decision, DecisionField, DecisionId, DecisionStatus};
pub use params::{DecisionSeed, DeleteDecision};
pub use storage::{MemoryStorage, Storage};
pub use store::{DecisionStore, SharedStore, StoreBuilder};
