//! Display implementations for domain models.
//!
//! Everything renders as markdown. The review sections of a decision only
//! appear once it is reviewed; AI sections only appear once they have
//! content.

use std::fmt;

use super::{datetime::LocalDateTime, PLACEHOLDER};
use crate::{
    assistant::{AssistantAction, AssistantPanel},
    models::{
        AiState, BrainstormOption, Decision, DecisionStatus, ResourceSuggestions,
        SuggestedResource,
    },
    templates::DecisionTemplate,
};

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Writes a `##` section, substituting the placeholder for empty text.
pub(crate) fn write_section(f: &mut fmt::Formatter<'_>, heading: &str, text: &str) -> fmt::Result {
    writeln!(f, "## {heading}")?;
    writeln!(f)?;
    if text.trim().is_empty() {
        writeln!(f, "{PLACEHOLDER}")?;
    } else {
        writeln!(f, "{}", text.trim_end())?;
    }
    writeln!(f)
}

fn write_options(f: &mut fmt::Formatter<'_>, options: &[BrainstormOption]) -> fmt::Result {
    for option in options {
        write!(f, "{option}")?;
    }
    Ok(())
}

fn write_questions(f: &mut fmt::Formatter<'_>, questions: &[String]) -> fmt::Result {
    for (i, question) in questions.iter().enumerate() {
        writeln!(f, "{}. {question}", i + 1)?;
    }
    writeln!(f)
}

fn write_resources(
    f: &mut fmt::Formatter<'_>,
    analysis: &str,
    resources: &[SuggestedResource],
) -> fmt::Result {
    writeln!(f, "{}", analysis.trim_end())?;
    writeln!(f)?;
    if !resources.is_empty() {
        writeln!(f, "**Sources**")?;
        writeln!(f)?;
        for resource in resources {
            writeln!(f, "{resource}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        write_section(f, "Situation", &self.situation)?;
        write_section(f, "Choice", &self.choice)?;
        write_section(f, "Reasoning", &self.reasoning)?;
        write_section(f, "Expected Outcome", &self.expected_outcome)?;

        if self.is_reviewed() {
            write_section(f, "Actual Outcome", &self.actual_outcome)?;
            write_section(f, "Reflections", &self.reflections)?;
        }

        if let Some(analysis) = &self.ai_analysis {
            write_section(f, AssistantAction::AnalyzeReasoning.label(), analysis)?;
        }
        if let Some(questions) = &self.ai_follow_up_questions {
            writeln!(f, "## {}", AssistantAction::FollowUpQuestions)?;
            writeln!(f)?;
            write_questions(f, questions)?;
        }
        if let Some(options) = &self.ai_options {
            writeln!(f, "## {}", AssistantAction::BrainstormOptions)?;
            writeln!(f)?;
            write_options(f, options)?;
        }
        if let Some(analysis) = &self.ai_resources_analysis {
            writeln!(f, "## {}", AssistantAction::SuggestResources)?;
            writeln!(f)?;
            let resources = self.ai_suggested_resources.as_deref().unwrap_or_default();
            write_resources(f, analysis, resources)?;
        }

        Ok(())
    }
}

impl fmt::Display for BrainstormOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.option)?;
        writeln!(f)?;
        writeln!(f, "**Pros**")?;
        writeln!(f)?;
        for pro in &self.pros {
            writeln!(f, "- {pro}")?;
        }
        writeln!(f)?;
        writeln!(f, "**Cons**")?;
        writeln!(f)?;
        for con in &self.cons {
            writeln!(f, "- {con}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SuggestedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- [{}]({})", self.title, self.url)?;
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DecisionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}**: {}", self.title, self.situation)
    }
}

impl AssistantPanel {
    fn fmt_state<T>(
        f: &mut fmt::Formatter<'_>,
        action: AssistantAction,
        state: &AiState<T>,
        body: impl FnOnce(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    ) -> fmt::Result {
        match state {
            AiState::NotRequested => Ok(()),
            AiState::Pending => {
                writeln!(f, "## {action}")?;
                writeln!(f)?;
                writeln!(f, "_Thinking..._")?;
                writeln!(f)
            }
            AiState::Succeeded(value) => {
                writeln!(f, "## {action}")?;
                writeln!(f)?;
                body(f, value)
            }
            AiState::Failed(reason) => {
                writeln!(f, "## {action}")?;
                writeln!(f)?;
                writeln!(f, "Failed: {reason}")?;
                writeln!(f)
            }
        }
    }
}

impl fmt::Display for AssistantPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = self.error() {
            writeln!(f, "> **Error:** {error}")?;
            writeln!(f)?;
        }
        if let Some(action) = self.loading() {
            writeln!(f, "_Running {action}..._")?;
            writeln!(f)?;
        }

        Self::fmt_state(f, AssistantAction::AnalyzeReasoning, &self.analysis, |f, text| {
            writeln!(f, "{}", text.trim_end())?;
            writeln!(f)
        })?;
        Self::fmt_state(f, AssistantAction::FollowUpQuestions, &self.follow_up, |f, q| {
            write_questions(f, q)
        })?;
        Self::fmt_state(f, AssistantAction::BrainstormOptions, &self.options, |f, o| {
            write_options(f, o)
        })?;
        Self::fmt_state(
            f,
            AssistantAction::SuggestResources,
            &self.resources,
            |f, s: &ResourceSuggestions| write_resources(f, &s.analysis, &s.resources),
        )
    }
}
