//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Decision;

/// Result of creating a decision: a confirmation line, then the decision.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Decision> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created decision with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Result of editing a decision, with the list of changes made.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use lumen_core::{
///     display::UpdateResult,
///     models::{Decision, DecisionId},
/// };
///
/// let decision = Decision::new(DecisionId::new("decision-7"), Timestamp::now());
/// let result = UpdateResult::with_changes(decision, vec!["Updated choice".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Changes made:\n- Updated choice"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Decision> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated decision with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Confirmation of a deletion.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Decision> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted decision '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}
