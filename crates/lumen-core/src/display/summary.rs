//! Read-only summary of a decision.

use std::fmt;

use super::models::write_section;
use crate::models::Decision;

/// Narrative view of a decision: the dilemma in one sentence, then the
/// outcome blocks.
///
/// The actual outcome and reflections appear only for reviewed decisions.
/// Empty blocks render a placeholder instead of nothing.
pub struct DecisionSummary<'a>(pub &'a Decision);

fn or_default<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.trim().is_empty() {
        fallback
    } else {
        text.trim()
    }
}

impl fmt::Display for DecisionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decision = self.0;

        writeln!(f, "## The Dilemma")?;
        writeln!(f)?;
        writeln!(
            f,
            "Faced with the situation of **{}**, the chosen course of action was to **{}**.",
            or_default(&decision.situation, "an undefined situation"),
            or_default(&decision.choice, "make a choice"),
        )?;
        writeln!(f)?;

        write_section(f, "Expected Outcome", &decision.expected_outcome)?;
        if decision.is_reviewed() {
            write_section(f, "Actual Outcome", &decision.actual_outcome)?;
            write_section(f, "Reflections & Learnings", &decision.reflections)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{DecisionId, DecisionStatus};

    fn decision() -> Decision {
        Decision::new(DecisionId::new("decision-1"), Timestamp::now())
    }

    #[test]
    fn test_empty_dilemma_uses_fallback_phrases() {
        let output = DecisionSummary(&decision()).to_string();
        assert!(output.contains(
            "Faced with the situation of **an undefined situation**, the chosen course of action was to **make a choice**."
        ));
    }

    #[test]
    fn test_pending_summary_has_only_expected_outcome() {
        let mut decision = decision();
        decision.expected_outcome = "Higher salary".to_string();
        decision.reflections = "Kept for later".to_string();

        let output = DecisionSummary(&decision).to_string();
        assert!(output.contains("## Expected Outcome\n\nHigher salary"));
        assert!(!output.contains("Actual Outcome"));
        assert!(!output.contains("Kept for later"));
    }

    #[test]
    fn test_reviewed_with_empty_outcome_shows_placeholder() {
        let mut decision = decision();
        decision.status = DecisionStatus::Reviewed;

        let output = DecisionSummary(&decision).to_string();
        assert!(output.contains("## Actual Outcome\n\n_Not yet specified._"));
        assert!(output.contains("## Reflections & Learnings\n\n_Not yet specified._"));
    }
}
