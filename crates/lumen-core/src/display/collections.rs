//! Collection wrapper types for displaying groups of domain objects.

use std::{collections::BTreeMap, fmt};

use super::datetime::LocalDate;
use crate::{models::Decision, templates::DecisionTemplate};

/// Newtype wrapper for the decision list panel.
///
/// Each entry shows title, status and creation date. The collection is
/// displayed in the order given, which for store snapshots is newest first.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use lumen_core::{
///     display::DecisionList,
///     models::{Decision, DecisionId},
/// };
///
/// let decision = Decision::new(DecisionId::new("decision-1"), Timestamp::now());
/// let output = DecisionList(vec![decision]).to_string();
/// assert!(output.contains("## Untitled Decision (ID: decision-1)"));
///
/// assert_eq!(DecisionList(vec![]).to_string(), "No decisions logged yet.\n");
/// ```
pub struct DecisionList(pub Vec<Decision>);

impl fmt::Display for DecisionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No decisions logged yet.");
        }

        for decision in &self.0 {
            writeln!(f, "## {} (ID: {})", decision.title, decision.id)?;
            writeln!(f)?;
            writeln!(f, "- **Status**: {}", decision.status.with_icon())?;
            writeln!(f, "- **Created**: {}", LocalDate(&decision.created_at))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Templates grouped by category, in category order.
pub struct TemplateCatalog(pub BTreeMap<&'static str, Vec<DecisionTemplate>>);

impl TemplateCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self(crate::templates::by_category())
    }
}

impl fmt::Display for TemplateCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No templates available.");
        }

        for (category, templates) in &self.0 {
            writeln!(f, "## {category}")?;
            writeln!(f)?;
            for template in templates {
                write!(f, "{template}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
