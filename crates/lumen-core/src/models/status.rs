//! Status enumeration for decisions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a decision.
///
/// Transitions are user-triggered in both directions; nothing moves a
/// decision between states automatically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DecisionStatus {
    /// Decision is logged and awaiting an outcome
    #[default]
    Pending,

    /// Outcome and reflections have been recorded
    Reviewed,
}

impl FromStr for DecisionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(DecisionStatus::Pending),
            "reviewed" => Ok(DecisionStatus::Reviewed),
            _ => Err(format!("Invalid decision status: {s}")),
        }
    }
}

impl DecisionStatus {
    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Pending => "Pending",
            DecisionStatus::Reviewed => "Reviewed",
        }
    }

    /// Get status with an icon for list display.
    ///
    /// ```rust
    /// use lumen_core::models::DecisionStatus;
    ///
    /// assert_eq!(DecisionStatus::Pending.with_icon(), "○ Pending");
    /// assert_eq!(DecisionStatus::Reviewed.with_icon(), "✓ Reviewed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            DecisionStatus::Pending => "○ Pending",
            DecisionStatus::Reviewed => "✓ Reviewed",
        }
    }
}
