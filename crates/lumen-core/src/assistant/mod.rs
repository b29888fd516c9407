//! Reasoning assistant client.
//!
//! Four independent, stateless operations turn decision text into structured
//! content. None of them touches a [`Decision`](crate::models::Decision): the
//! caller merges the returned [`AssistantOutput`] and persists it, which keeps
//! every call safe to retry.
//!
//! | Operation                 | Precondition         | Output                          |
//! |---------------------------|----------------------|---------------------------------|
//! | `analyze_reasoning`       | reasoning non-empty  | critique text                   |
//! | `brainstorm_options`      | situation non-empty  | 3-4 options with pros and cons  |
//! | `ask_follow_up_questions` | analysis non-empty   | exactly 3 questions             |
//! | `suggest_resources`       | situation non-empty  | summary + grounded links        |
//!
//! Preconditions are checked before any request is sent.

use std::fmt;

use log::debug;

use crate::{
    error::AssistantError,
    models::{BrainstormOption, ResourceSuggestions},
};

pub mod backend;
pub mod gemini;
pub mod panel;
mod prompts;
mod validate;

pub use backend::{Citation, GenerateRequest, GenerateResponse, ReasoningBackend};
pub use gemini::{GeminiBackend, GeminiConfig};
pub use panel::AssistantPanel;

/// The four assistant capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistantAction {
    AnalyzeReasoning,
    BrainstormOptions,
    FollowUpQuestions,
    SuggestResources,
}

impl AssistantAction {
    pub fn label(&self) -> &'static str {
        match self {
            AssistantAction::AnalyzeReasoning => "Reasoning Analysis",
            AssistantAction::BrainstormOptions => "Brainstormed Options",
            AssistantAction::FollowUpQuestions => "Follow-up Questions",
            AssistantAction::SuggestResources => "Suggested Resources",
        }
    }
}

impl fmt::Display for AssistantAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs for one assistant call, captured from the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantRequest {
    AnalyzeReasoning {
        situation: String,
        reasoning: String,
    },
    BrainstormOptions {
        situation: String,
    },
    FollowUpQuestions {
        situation: String,
        reasoning: String,
        analysis: String,
    },
    SuggestResources {
        situation: String,
        choice: String,
    },
}

impl AssistantRequest {
    pub fn action(&self) -> AssistantAction {
        match self {
            AssistantRequest::AnalyzeReasoning { .. } => AssistantAction::AnalyzeReasoning,
            AssistantRequest::BrainstormOptions { .. } => AssistantAction::BrainstormOptions,
            AssistantRequest::FollowUpQuestions { .. } => AssistantAction::FollowUpQuestions,
            AssistantRequest::SuggestResources { .. } => AssistantAction::SuggestResources,
        }
    }

    /// Rejects requests whose required input is empty.
    pub fn validate(&self) -> Result<(), AssistantError> {
        match self {
            AssistantRequest::AnalyzeReasoning { reasoning, .. } => {
                require(reasoning, "reasoning", "Please provide your reasoning first.")
            }
            AssistantRequest::BrainstormOptions { situation }
            | AssistantRequest::SuggestResources { situation, .. } => {
                require(situation, "situation", "Please describe the situation first.")
            }
            AssistantRequest::FollowUpQuestions { analysis, .. } => {
                require(analysis, "analysis", "Please run a reasoning analysis first.")
            }
        }
    }
}

fn require(value: &str, field: &'static str, message: &'static str) -> Result<(), AssistantError> {
    if value.trim().is_empty() {
        Err(AssistantError::MissingInput { field, message })
    } else {
        Ok(())
    }
}

/// Structured content returned by a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantOutput {
    Analysis(String),
    Options(Vec<BrainstormOption>),
    FollowUpQuestions(Vec<String>),
    Resources(ResourceSuggestions),
}

impl AssistantOutput {
    pub fn action(&self) -> AssistantAction {
        match self {
            AssistantOutput::Analysis(_) => AssistantAction::AnalyzeReasoning,
            AssistantOutput::Options(_) => AssistantAction::BrainstormOptions,
            AssistantOutput::FollowUpQuestions(_) => AssistantAction::FollowUpQuestions,
            AssistantOutput::Resources(_) => AssistantAction::SuggestResources,
        }
    }
}

/// Stateless client over a reasoning backend.
#[derive(Debug, Clone)]
pub struct AssistantClient<B> {
    backend: B,
}

impl<B: ReasoningBackend> AssistantClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Critiques the reasoning: biases, assumptions, blind spots and a few
    /// clarifying questions.
    pub async fn analyze_reasoning(
        &self,
        situation: &str,
        reasoning: &str,
    ) -> Result<String, AssistantError> {
        require(reasoning, "reasoning", "Please provide your reasoning first.")?;

        let request = GenerateRequest::text(prompts::analyze_reasoning(situation, reasoning));
        let response = self.backend.generate(&request).await?;
        non_empty_text(response.text)
    }

    /// Brainstorms 3-4 options with pros and cons.
    pub async fn brainstorm_options(
        &self,
        situation: &str,
    ) -> Result<Vec<BrainstormOption>, AssistantError> {
        require(situation, "situation", "Please describe the situation first.")?;

        let request = GenerateRequest::structured(
            prompts::brainstorm_options(situation),
            prompts::options_schema(),
        );
        let response = self.backend.generate(&request).await?;
        validate::parse_options(&response.text)
    }

    /// Generates exactly three deeper questions from an earlier analysis.
    pub async fn ask_follow_up_questions(
        &self,
        situation: &str,
        reasoning: &str,
        analysis: &str,
    ) -> Result<Vec<String>, AssistantError> {
        require(analysis, "analysis", "Please run a reasoning analysis first.")?;

        let request = GenerateRequest::structured(
            prompts::follow_up_questions(situation, reasoning, analysis),
            prompts::questions_schema(),
        );
        let response = self.backend.generate(&request).await?;
        validate::parse_questions(&response.text)
    }

    /// Summarizes helpful resources; links come only from search citations.
    pub async fn suggest_resources(
        &self,
        situation: &str,
        choice: &str,
    ) -> Result<ResourceSuggestions, AssistantError> {
        require(situation, "situation", "Please describe the situation first.")?;

        let request = GenerateRequest::grounded(prompts::suggest_resources(situation, choice));
        let response = self.backend.generate(&request).await?;
        let resources = validate::grounded_resources(&response.citations);
        debug!(
            "Kept {} of {} citations as resources",
            resources.len(),
            response.citations.len()
        );
        if response.text.trim().is_empty() && resources.is_empty() {
            return Err(AssistantError::EmptyResponse);
        }
        Ok(ResourceSuggestions {
            analysis: response.text,
            resources,
        })
    }

    /// Runs whichever operation `request` describes.
    pub async fn execute(
        &self,
        request: &AssistantRequest,
    ) -> Result<AssistantOutput, AssistantError> {
        match request {
            AssistantRequest::AnalyzeReasoning {
                situation,
                reasoning,
            } => self
                .analyze_reasoning(situation, reasoning)
                .await
                .map(AssistantOutput::Analysis),
            AssistantRequest::BrainstormOptions { situation } => self
                .brainstorm_options(situation)
                .await
                .map(AssistantOutput::Options),
            AssistantRequest::FollowUpQuestions {
                situation,
                reasoning,
                analysis,
            } => self
                .ask_follow_up_questions(situation, reasoning, analysis)
                .await
                .map(AssistantOutput::FollowUpQuestions),
            AssistantRequest::SuggestResources { situation, choice } => self
                .suggest_resources(situation, choice)
                .await
                .map(AssistantOutput::Resources),
        }
    }
}

fn non_empty_text(text: String) -> Result<String, AssistantError> {
    if text.trim().is_empty() {
        Err(AssistantError::EmptyResponse)
    } else {
        Ok(text)
    }
}
