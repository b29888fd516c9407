//! Parameter structures for journal operations.
//!
//! These structures stay free of interface-framework derives so the CLI (or
//! any other front end) can wrap them with its own argument parsing and
//! convert with `.into()`.

use crate::{
    models::{Decision, DecisionField},
    templates::DecisionTemplate,
};

/// Optional initial values for a new decision.
///
/// Every `None` field keeps the new decision's default (empty text, or the
/// placeholder title).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionSeed {
    pub title: Option<String>,
    pub situation: Option<String>,
    pub choice: Option<String>,
    pub reasoning: Option<String>,
    pub expected_outcome: Option<String>,
}

impl DecisionSeed {
    /// Seed that copies a template's fields.
    pub fn from_template(template: &DecisionTemplate) -> Self {
        Self {
            title: Some(template.title.to_string()),
            situation: Some(template.situation.to_string()),
            choice: template.choice.map(String::from),
            reasoning: template.reasoning.map(String::from),
            expected_outcome: template.expected_outcome.map(String::from),
        }
    }

    /// Pairs of field and value for every field the seed sets.
    pub fn fields(&self) -> Vec<(DecisionField, &str)> {
        [
            (DecisionField::Title, &self.title),
            (DecisionField::Situation, &self.situation),
            (DecisionField::Choice, &self.choice),
            (DecisionField::Reasoning, &self.reasoning),
            (DecisionField::ExpectedOutcome, &self.expected_outcome),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }

    /// Writes the seeded fields onto a decision.
    pub fn apply_to(&self, decision: &mut Decision) {
        for (field, value) in self.fields() {
            decision.set_field(field, value.to_string());
        }
    }
}

/// Parameters for permanently deleting a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDecision {
    /// The ID of the decision to delete
    pub id: String,
    /// Explicit confirmation; deletion is refused without it
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{DecisionId, DEFAULT_TITLE};

    #[test]
    fn test_seed_only_overrides_given_fields() {
        let mut decision = Decision::new(DecisionId::new("decision-1"), Timestamp::now());
        let seed = DecisionSeed {
            situation: Some("Choosing between job A and B".to_string()),
            ..Default::default()
        };
        seed.apply_to(&mut decision);

        assert_eq!(decision.title, DEFAULT_TITLE);
        assert_eq!(decision.situation, "Choosing between job A and B");
        assert_eq!(decision.choice, "");
    }

    #[test]
    fn test_seed_from_template_keeps_missing_fields_unset() {
        let template = DecisionTemplate {
            title: "T",
            situation: "S",
            choice: None,
            reasoning: Some("R"),
            expected_outcome: None,
        };
        let seed = DecisionSeed::from_template(&template);
        assert_eq!(seed.fields().len(), 3);
        assert_eq!(seed.choice, None);
    }
}
