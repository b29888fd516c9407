//! Gemini `generateContent` backend.

use std::{env, time::Duration};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::backend::{Citation, GenerateRequest, GenerateResponse, ReasoningBackend};
use crate::error::AssistantError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_VARS: [&str; 3] = ["LUMEN_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// Connection settings for the Gemini API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL up to and including the API version
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GeminiConfig {
    /// Reads settings from the environment.
    ///
    /// The key comes from the first non-empty of `LUMEN_API_KEY`,
    /// `GEMINI_API_KEY` and `API_KEY`; `LUMEN_MODEL` and `LUMEN_API_ENDPOINT`
    /// override the defaults.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: API_KEY_VARS.iter().find_map(|name| non_empty(*name)),
            model: non_empty("LUMEN_MODEL").unwrap_or(defaults.model),
            endpoint: non_empty("LUMEN_API_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout: defaults.timeout,
        }
    }

    /// Overrides the key when one is given.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// Overrides the model when one is given.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// HTTP client for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl GeminiBackend {
    /// Builds a backend from `config`.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::NotConfigured` without an API key, and
    /// `AssistantError::Transport` if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, AssistantError> {
        let api_key = config.api_key.clone().ok_or(AssistantError::NotConfigured)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            url: config.url(),
        })
    }
}

impl ReasoningBackend for GeminiBackend {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AssistantError> {
        let body = GenerateContentRequest::from_request(request);
        debug!(
            "POST {} (structured: {}, grounded: {})",
            self.url,
            request.response_schema.is_some(),
            request.grounded_search
        );

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::malformed(format!("invalid API response: {e}")))?;
        payload.into_response()
    }
}

// Wire types for the generateContent endpoint.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

impl<'a> GenerateContentRequest<'a> {
    fn from_request(request: &'a GenerateRequest) -> Self {
        let tools = if request.grounded_search {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };

        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: request.response_schema.as_ref().map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
            tools,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GenerateContentResponse {
    fn into_response(self) -> Result<GenerateResponse, AssistantError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match block_reason {
                Some(reason) => AssistantError::Api {
                    status: 200,
                    message: format!("prompt blocked: {reason}"),
                },
                None => AssistantError::EmptyResponse,
            });
        };

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text)
            .collect();

        let citations = candidate
            .grounding_metadata
            .map(|metadata| metadata.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|chunk| chunk.web)
            .map(|web| Citation {
                title: web.title,
                uri: web.uri,
            })
            .collect();

        Ok(GenerateResponse { text, citations })
    }
}

/// Extracts the message from an API error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
