//! Payload types produced by the reasoning assistant.

use serde::{Deserialize, Serialize};

/// One brainstormed course of action with its trade-offs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrainstormOption {
    pub option: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// A link traceable to a search-grounded citation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestedResource {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of a resource suggestion request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSuggestions {
    /// Free-text summary written by the assistant
    pub analysis: String,
    /// Grounded links, never generated text
    pub resources: Vec<SuggestedResource>,
}

/// Per-capability request state held by an assistant panel.
///
/// Distinguishes "never asked" from "asked and failed", which the persisted
/// optional fields alone cannot express.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AiState<T> {
    #[default]
    NotRequested,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> AiState<T> {
    /// Seeds the state from a persisted optional field.
    pub fn from_persisted(value: Option<T>) -> Self {
        match value {
            Some(v) => AiState::Succeeded(v),
            None => AiState::NotRequested,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AiState::Pending)
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            AiState::Succeeded(v) => Some(v),
            _ => None,
        }
    }
}
