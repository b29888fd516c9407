//! Backend seam between the assistant client and a generative API.

use std::future::Future;

use serde_json::Value;

use crate::error::AssistantError;

/// One stateless generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Schema constraining the response to JSON, when structured output is
    /// wanted
    pub response_schema: Option<Value>,
    /// Whether the backend may ground its answer with web search
    pub grounded_search: bool,
}

impl GenerateRequest {
    /// Plain free-text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
            grounded_search: false,
        }
    }

    /// Request whose answer must be JSON matching `schema`.
    pub fn structured(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
            grounded_search: false,
        }
    }

    /// Free-text request backed by web search.
    pub fn grounded(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
            grounded_search: true,
        }
    }
}

/// A source the backend cited while answering a grounded request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Citation {
    pub title: Option<String>,
    pub uri: Option<String>,
}

/// Text and citation metadata returned by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResponse {
    pub text: String,
    pub citations: Vec<Citation>,
}

impl GenerateResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: Vec::new(),
        }
    }
}

/// An external reasoning service.
///
/// Implementations hold no conversation state; each call carries everything
/// the service needs.
pub trait ReasoningBackend {
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = Result<GenerateResponse, AssistantError>> + Send;
}
