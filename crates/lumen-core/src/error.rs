//! Error types for the journal library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DecisionId;

/// Error type for store, editor and journal operations.
#[derive(Error, Debug)]
pub enum JournalError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Decision not found for the given ID
    #[error("Decision with ID {id} not found")]
    DecisionNotFound { id: DecisionId },
    /// An operation needs an open decision but nothing is selected
    #[error("No decision is currently selected")]
    NoSelection,
    /// Another assistant request of the same panel is still in flight
    #[error("An assistant request is already running for this decision")]
    AssistantBusy,
    /// Assistant request failures, including rejected preconditions
    #[error(transparent)]
    Assistant(#[from] AssistantError),
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Durable storage refused a write
    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// Errors surfaced by the reasoning assistant.
///
/// Every variant is recoverable: callers turn it into a visible message and
/// leave the decision's existing AI fields untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// Required input was empty, so no request was sent
    #[error("{message}")]
    MissingInput {
        field: &'static str,
        message: &'static str,
    },
    /// No API key was configured for the backend
    #[error("The assistant is not configured. Set LUMEN_API_KEY or GEMINI_API_KEY and try again.")]
    NotConfigured,
    /// Network or connection failure
    #[error("Failed to reach the assistant: {0}")]
    Transport(String),
    /// The API answered with a non-success status
    #[error("Assistant API returned {status}: {message}")]
    Api { status: u16, message: String },
    /// The API answered without any candidate text
    #[error("The assistant returned an empty response")]
    EmptyResponse,
    /// Structured output did not match the expected shape
    #[error("The assistant returned an unexpected format: {reason}")]
    MalformedResponse { reason: String },
}

impl AssistantError {
    /// Creates a shape-mismatch error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> JournalError {
        JournalError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> JournalError {
        JournalError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl JournalError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| JournalError::database(message).with_source(e))
    }
}

/// Result type alias for journal operations
pub type Result<T> = std::result::Result<T, JournalError>;
