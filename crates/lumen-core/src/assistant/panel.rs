//! Assistant panel state for the open decision.

use super::{AssistantAction, AssistantOutput};
use crate::models::{AiState, BrainstormOption, Decision, ResourceSuggestions};

/// Request state of the assistant for one open decision.
///
/// At most one request is in flight per panel. Errors are kept until the
/// user dismisses them or starts another request. A failed or running
/// request never hides content from an earlier success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistantPanel {
    loading: Option<AssistantAction>,
    error: Option<String>,
    pub analysis: AiState<String>,
    pub options: AiState<Vec<BrainstormOption>>,
    pub follow_up: AiState<Vec<String>>,
    pub resources: AiState<ResourceSuggestions>,
}

impl AssistantPanel {
    /// Panel for `decision`, seeded from its persisted AI fields.
    pub fn for_decision(decision: &Decision) -> Self {
        let resources = match (&decision.ai_resources_analysis, &decision.ai_suggested_resources) {
            (Some(analysis), resources) => Some(ResourceSuggestions {
                analysis: analysis.clone(),
                resources: resources.clone().unwrap_or_default(),
            }),
            (None, _) => None,
        };

        Self {
            loading: None,
            error: None,
            analysis: AiState::from_persisted(decision.ai_analysis.clone()),
            options: AiState::from_persisted(decision.ai_options.clone()),
            follow_up: AiState::from_persisted(decision.ai_follow_up_questions.clone()),
            resources: AiState::from_persisted(resources),
        }
    }

    /// The action currently in flight, if any.
    pub fn loading(&self) -> Option<AssistantAction> {
        self.loading
    }

    pub fn is_busy(&self) -> bool {
        self.loading.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Follow-up questions are only offered once an analysis exists.
    pub fn can_ask_follow_up(&self) -> bool {
        !self.is_busy() && self.analysis.succeeded().is_some()
    }

    pub(crate) fn start(&mut self, action: AssistantAction) {
        self.loading = Some(action);
        self.error = None;
        match action {
            AssistantAction::AnalyzeReasoning => mark_pending(&mut self.analysis),
            AssistantAction::BrainstormOptions => mark_pending(&mut self.options),
            AssistantAction::FollowUpQuestions => mark_pending(&mut self.follow_up),
            AssistantAction::SuggestResources => mark_pending(&mut self.resources),
        }
    }

    pub(crate) fn succeed(&mut self, output: &AssistantOutput) {
        self.loading = None;
        match output {
            AssistantOutput::Analysis(text) => {
                self.analysis = AiState::Succeeded(text.clone());
                self.follow_up = AiState::NotRequested;
            }
            AssistantOutput::Options(options) => {
                self.options = AiState::Succeeded(options.clone());
            }
            AssistantOutput::FollowUpQuestions(questions) => {
                self.follow_up = AiState::Succeeded(questions.clone());
            }
            AssistantOutput::Resources(suggestions) => {
                self.resources = AiState::Succeeded(suggestions.clone());
            }
        }
    }

    pub(crate) fn fail(&mut self, action: AssistantAction, message: String) {
        self.loading = None;
        self.error = Some(message.clone());
        match action {
            AssistantAction::AnalyzeReasoning => mark_failed(&mut self.analysis, message),
            AssistantAction::BrainstormOptions => mark_failed(&mut self.options, message),
            AssistantAction::FollowUpQuestions => mark_failed(&mut self.follow_up, message),
            AssistantAction::SuggestResources => mark_failed(&mut self.resources, message),
        }
    }

    /// Records a validation message without changing any capability state.
    pub(crate) fn reject(&mut self, message: String) {
        self.error = Some(message);
    }
}

/// Earlier successful content stays visible while a retry runs.
fn mark_pending<T>(state: &mut AiState<T>) {
    if state.succeeded().is_none() {
        *state = AiState::Pending;
    }
}

fn mark_failed<T>(state: &mut AiState<T>, message: String) {
    if state.succeeded().is_none() {
        *state = AiState::Failed(message);
    }
}
