//! Argument wrappers for each command.
//!
//! Clap derives stay in this crate; each wrapper converts into the matching
//! `lumen_core` parameter type with `From`, so core types never depend on
//! the argument parser.

use clap::{Args, ValueEnum};
use lumen_core::{
    models::DecisionField, params::DecisionSeed, AssistantAction, DeleteDecision,
};

/// Log a new decision
#[derive(Args)]
pub struct NewDecisionArgs {
    /// Start from a built-in template (see `lumen templates`)
    #[arg(long)]
    pub template: Option<String>,
    #[command(flatten)]
    pub fields: DraftFields,
}

/// Fields that can be set before a decision is reviewed.
#[derive(Args, Default)]
pub struct DraftFields {
    /// Short name for the decision
    #[arg(long)]
    pub title: Option<String>,
    /// The context of the choice you face
    #[arg(long)]
    pub situation: Option<String>,
    /// The option you are leaning towards
    #[arg(long)]
    pub choice: Option<String>,
    /// Why that option seems best
    #[arg(long)]
    pub reasoning: Option<String>,
    /// What you expect to happen
    #[arg(long)]
    pub expected_outcome: Option<String>,
}

impl From<DraftFields> for DecisionSeed {
    fn from(val: DraftFields) -> Self {
        DecisionSeed {
            title: val.title,
            situation: val.situation,
            choice: val.choice,
            reasoning: val.reasoning,
            expected_outcome: val.expected_outcome,
        }
    }
}

/// Show a decision
#[derive(Args)]
pub struct ShowDecisionArgs {
    #[arg(help = "Identifier of the decision to show")]
    pub id: String,
    /// Show the read-only summary instead of every field
    #[arg(long)]
    pub summary: bool,
}

/// A command that targets one decision
#[derive(Args)]
pub struct DecisionIdArg {
    #[arg(help = "Identifier of the decision")]
    pub id: String,
}

/// Edit a decision's text fields
#[derive(Args)]
pub struct EditDecisionArgs {
    #[arg(help = "Identifier of the decision to edit")]
    pub id: String,
    /// Overwrite the pre-review fields from a template first
    #[arg(long)]
    pub template: Option<String>,
    #[command(flatten)]
    pub fields: DraftFields,
    /// What actually happened (reviewed decisions only)
    #[arg(long)]
    pub actual_outcome: Option<String>,
    /// What you learned (reviewed decisions only)
    #[arg(long)]
    pub reflections: Option<String>,
}

impl EditDecisionArgs {
    /// Field edits in the order they are applied.
    pub fn edits(self) -> Vec<(DecisionField, String)> {
        let seed: DecisionSeed = self.fields.into();
        let mut edits: Vec<_> = seed
            .fields()
            .into_iter()
            .map(|(field, value)| (field, value.to_string()))
            .collect();
        edits.extend(
            [
                (DecisionField::ActualOutcome, self.actual_outcome),
                (DecisionField::Reflections, self.reflections),
            ]
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v))),
        );
        edits
    }
}

/// Delete a decision permanently
#[derive(Args)]
pub struct DeleteDecisionArgs {
    #[arg(help = "Identifier of the decision to permanently delete")]
    pub id: String,
    /// Skip the interactive prompt and delete right away
    #[arg(long)]
    pub confirm: bool,
}

impl From<&DeleteDecisionArgs> for DeleteDecision {
    fn from(val: &DeleteDecisionArgs) -> Self {
        DeleteDecision {
            id: val.id.clone(),
            confirmed: val.confirm,
        }
    }
}

/// Ask the reasoning assistant about a decision
#[derive(Args)]
pub struct AssistArgs {
    #[arg(help = "Identifier of the decision")]
    pub id: String,
    #[arg(value_enum, help = "What to ask for")]
    pub action: AssistActionArg,
    /// API key for the reasoning service
    #[arg(long, env = "LUMEN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Model name, e.g. gemini-2.5-pro
    #[arg(long, env = "LUMEN_MODEL")]
    pub model: Option<String>,
}

/// Assistant capabilities as command-line values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum AssistActionArg {
    /// Critique your reasoning for biases and blind spots
    Analyze,
    /// Brainstorm 3-4 options with pros and cons
    Brainstorm,
    /// Ask three deeper questions based on the last analysis
    FollowUp,
    /// Find helpful resources from the web
    Resources,
}

impl From<AssistActionArg> for AssistantAction {
    fn from(val: AssistActionArg) -> Self {
        match val {
            AssistActionArg::Analyze => AssistantAction::AnalyzeReasoning,
            AssistActionArg::Brainstorm => AssistantAction::BrainstormOptions,
            AssistActionArg::FollowUp => AssistantAction::FollowUpQuestions,
            AssistActionArg::Resources => AssistantAction::SuggestResources,
        }
    }
}
