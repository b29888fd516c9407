//! Decision model definition and field access.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{BrainstormOption, DecisionStatus, SuggestedResource};
use crate::{assistant::AssistantOutput, templates::DecisionTemplate};

/// Title given to a freshly created decision.
pub const DEFAULT_TITLE: &str = "Untitled Decision";

/// Unique, immutable identifier of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionId(String);

impl DecisionId {
    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Time-based identifier for a decision created at `now`.
    pub fn from_timestamp(now: Timestamp) -> Self {
        Self(format!("decision-{}", now.as_millisecond()))
    }

    /// Appends a numeric disambiguator, used when the time-based id is taken.
    pub fn with_suffix(&self, n: u32) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DecisionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A logged decision with its context, outcome and assistant content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Unique identifier, generated at creation
    pub id: DecisionId,

    pub title: String,

    /// Context of the choice being faced
    #[serde(default)]
    pub situation: String,

    /// Current leading option
    #[serde(default)]
    pub choice: String,

    /// Why the choice seems best
    #[serde(default)]
    pub reasoning: String,

    /// Predicted result of the choice
    #[serde(default)]
    pub expected_outcome: String,

    /// What actually happened (meaningful once reviewed)
    #[serde(default)]
    pub actual_outcome: String,

    /// Learnings recorded during review
    #[serde(default)]
    pub reflections: String,

    pub status: DecisionStatus,

    /// Creation time, used for display and ordering only
    pub created_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_options: Option<Vec<BrainstormOption>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_follow_up_questions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_resources_analysis: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggested_resources: Option<Vec<SuggestedResource>>,
}

impl Decision {
    /// Creates an empty pending decision.
    pub fn new(id: DecisionId, created_at: Timestamp) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            situation: String::new(),
            choice: String::new(),
            reasoning: String::new(),
            expected_outcome: String::new(),
            actual_outcome: String::new(),
            reflections: String::new(),
            status: DecisionStatus::Pending,
            created_at,
            ai_analysis: None,
            ai_options: None,
            ai_follow_up_questions: None,
            ai_resources_analysis: None,
            ai_suggested_resources: None,
        }
    }

    pub fn is_reviewed(&self) -> bool {
        self.status == DecisionStatus::Reviewed
    }

    /// Returns the text of an editable field.
    pub fn field(&self, field: DecisionField) -> &str {
        match field {
            DecisionField::Title => &self.title,
            DecisionField::Situation => &self.situation,
            DecisionField::Choice => &self.choice,
            DecisionField::Reasoning => &self.reasoning,
            DecisionField::ExpectedOutcome => &self.expected_outcome,
            DecisionField::ActualOutcome => &self.actual_outcome,
            DecisionField::Reflections => &self.reflections,
        }
    }

    /// Replaces the text of an editable field.
    pub fn set_field(&mut self, field: DecisionField, value: String) {
        let slot = match field {
            DecisionField::Title => &mut self.title,
            DecisionField::Situation => &mut self.situation,
            DecisionField::Choice => &mut self.choice,
            DecisionField::Reasoning => &mut self.reasoning,
            DecisionField::ExpectedOutcome => &mut self.expected_outcome,
            DecisionField::ActualOutcome => &mut self.actual_outcome,
            DecisionField::Reflections => &mut self.reflections,
        };
        *slot = value;
    }

    /// Overwrites the five pre-review text fields from a template.
    ///
    /// Optional template fields that are absent clear the target field.
    /// Status, review fields and AI content are left alone.
    pub fn apply_template(&mut self, template: &DecisionTemplate) {
        self.title = template.title.to_string();
        self.situation = template.situation.to_string();
        self.choice = template.choice.unwrap_or_default().to_string();
        self.reasoning = template.reasoning.unwrap_or_default().to_string();
        self.expected_outcome = template.expected_outcome.unwrap_or_default().to_string();
    }

    /// Merges a successful assistant response into the AI fields.
    ///
    /// A fresh analysis invalidates follow-up questions derived from the
    /// previous one.
    pub fn merge_assistant_output(&mut self, output: AssistantOutput) {
        match output {
            AssistantOutput::Analysis(text) => {
                self.ai_analysis = Some(text);
                self.ai_follow_up_questions = None;
            }
            AssistantOutput::Options(options) => self.ai_options = Some(options),
            AssistantOutput::FollowUpQuestions(questions) => {
                self.ai_follow_up_questions = Some(questions);
            }
            AssistantOutput::Resources(suggestions) => {
                self.ai_resources_analysis = Some(suggestions.analysis);
                self.ai_suggested_resources = Some(suggestions.resources);
            }
        }
    }
}

/// Editable free-text fields of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionField {
    Title,
    Situation,
    Choice,
    Reasoning,
    ExpectedOutcome,
    ActualOutcome,
    Reflections,
}

impl DecisionField {
    pub const ALL: [DecisionField; 7] = [
        DecisionField::Title,
        DecisionField::Situation,
        DecisionField::Choice,
        DecisionField::Reasoning,
        DecisionField::ExpectedOutcome,
        DecisionField::ActualOutcome,
        DecisionField::Reflections,
    ];

    /// Name used in the persisted JSON form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionField::Title => "title",
            DecisionField::Situation => "situation",
            DecisionField::Choice => "choice",
            DecisionField::Reasoning => "reasoning",
            DecisionField::ExpectedOutcome => "expectedOutcome",
            DecisionField::ActualOutcome => "actualOutcome",
            DecisionField::Reflections => "reflections",
        }
    }

    /// Fields that only become editable once a decision is reviewed.
    pub fn is_review_field(&self) -> bool {
        matches!(self, DecisionField::ActualOutcome | DecisionField::Reflections)
    }
}

impl fmt::Display for DecisionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "title" => Ok(DecisionField::Title),
            "situation" => Ok(DecisionField::Situation),
            "choice" => Ok(DecisionField::Choice),
            "reasoning" => Ok(DecisionField::Reasoning),
            "expectedoutcome" => Ok(DecisionField::ExpectedOutcome),
            "actualoutcome" => Ok(DecisionField::ActualOutcome),
            "reflections" => Ok(DecisionField::Reflections),
            _ => Err(format!("Invalid decision field: {s}")),
        }
    }
}
