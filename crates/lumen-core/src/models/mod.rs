//! Data models for decisions and assistant output.
//!
//! [`Decision`] is the only persisted entity. Its JSON form uses camelCase
//! keys so a stored collection reads naturally in the storage slot, and the
//! optional AI fields are omitted entirely until an assistant call succeeds.
//! Display implementations live in [`crate::display::models`].

mod assistant;
mod decision;
mod status;


pub use assistant::{AiState, BrainstormOption, ResourceSuggestions, SuggestedResource};
pub use decision::{Decision, DecisionField, DecisionId, DEFAULT_TITLE};
pub use status::DecisionStatus;
