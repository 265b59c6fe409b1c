//! Scripted leaf implementations shared by orchestration tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::{LlmError, TextGenerator};
use crate::retrieval::{RetrievalError, VectorRetriever};

/// Returns the same response for every prompt.
pub struct CannedGenerator {
    response: String,
}

impl CannedGenerator {
    pub fn new(response: String) -> Self {
        Self { response }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.response.clone())
    }
}

/// Fails every call, simulating an unreachable model.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::EmptyContent)
    }
}

/// Returns a canned response and remembers the last prompt it was given,
/// for assertions on prompt construction.
pub struct RecordingGenerator {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    pub fn new(response: String) -> Self {
        Self {
            response,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> String {
        self.prompts
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no prompt recorded")
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Returns the same chunks for every query.
pub struct CannedRetriever {
    chunks: Vec<String>,
}

impl CannedRetriever {
    pub fn new(chunks: Vec<String>) -> Self {
        Self { chunks }
    }
}

#[async_trait]
impl VectorRetriever for CannedRetriever {
    async fn similarity_search(
        &self,
        _query: &str,
        k: usize,
    ) -> Result<Vec<String>, RetrievalError> {
        Ok(self.chunks.iter().take(k).cloned().collect())
    }
}

/// Fails every search, simulating an unreachable vector store.
pub struct FailingRetriever;

#[async_trait]
impl VectorRetriever for FailingRetriever {
    async fn similarity_search(
        &self,
        _query: &str,
        _k: usize,
    ) -> Result<Vec<String>, RetrievalError> {
        Err(RetrievalError::Embedding("store unreachable".to_string()))
    }
}
