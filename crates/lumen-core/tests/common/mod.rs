#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use lumen_core::{
    assistant::{Citation, GenerateRequest, GenerateResponse, ReasoningBackend},
    AssistantError, DecisionStore, Journal, MemoryStorage, StoreBuilder,
};
use tempfile::TempDir;

pub const TEST_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Backend that replays queued responses and records every request.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    responses: Arc<Mutex<VecDeque<Result<GenerateResponse, AssistantError>>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.push(Ok(GenerateResponse::text(text)))
    }

    pub fn reply_with_citations(self, text: &str, citations: Vec<Citation>) -> Self {
        self.push(Ok(GenerateResponse {
            text: text.to_string(),
            citations,
        }))
    }

    pub fn fail(self, error: AssistantError) -> Self {
        self.push(Err(error))
    }

    fn push(self, response: Result<GenerateResponse, AssistantError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ReasoningBackend for ScriptedBackend {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AssistantError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AssistantError::EmptyResponse))
    }
}

pub const THREE_OPTIONS: &str = r#"[
    {"option": "Accept job A", "pros": ["Stable salary", "Good benefits"], "cons": ["Long commute"]},
    {"option": "Accept job B", "pros": ["Equity", "Fast growth"], "cons": ["Higher risk", "Long hours"]},
    {"option": "Negotiate with both", "pros": ["Better terms"], "cons": ["Could lose an offer"]}
]"#;

/// Journal over in-memory storage, returning the storage handle for
/// inspecting writes.
pub fn memory_journal() -> (MemoryStorage, Journal) {
    let storage = MemoryStorage::new();
    let journal = Journal::new(DecisionStore::open(storage.clone())).with_debounce(TEST_DEBOUNCE);
    (storage, journal)
}

/// SQLite-backed store in a temporary directory.
pub fn create_test_store() -> (TempDir, DecisionStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}
