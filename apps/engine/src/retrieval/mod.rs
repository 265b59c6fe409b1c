//! Vector retrieval — semantic nearest-neighbor search over previously
//! ingested feedback and resume text.
//!
//! Orchestration depends on the [`VectorRetriever`] trait; the concrete
//! backend is a Chroma server queried over HTTP with Gemini embeddings
//! computed client-side. Ingestion (chunking, content hashing, dedup) lives
//! in [`ingest`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

pub mod ingest;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT_SECS: u64 = 60;
/// Upload batch cap for ingestion.
const ADD_BATCH_SIZE: usize = 500;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("vector store error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("embedding error: {0}")]
    Embedding(String),
}

/// Semantic search over a vector index. May return fewer than `k` chunks,
/// or none at all — callers substitute their own sentinel for empty results.
#[async_trait]
pub trait VectorRetriever: Send + Sync {
    async fn similarity_search(&self, query: &str, k: usize)
        -> Result<Vec<String>, RetrievalError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Embeddings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

/// Gemini `embedContent` client used for both queries and ingestion.
#[derive(Clone)]
pub struct EmbeddingClient {
    client: Client,
    api_key: String,
    model: String,
}

impl EmbeddingClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }

    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        let url = format!(
            "{GEMINI_API_BASE}/{}:embedContent?key={}",
            self.model, self.api_key
        );
        let body = json!({
            "model": format!("models/{}", self.model),
            "content": { "parts": [{ "text": text }] },
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Embedding(format!(
                "embedContent returned {status}: {message}"
            )));
        }

        let parsed: EmbedResponse = response.json().await?;
        Ok(parsed.embedding.values)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Chroma backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CollectionInfo {
    id: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    /// One row of documents per query embedding; we always send exactly one.
    #[serde(default)]
    documents: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    #[serde(default)]
    ids: Vec<String>,
}

/// HTTP client for one Chroma collection.
#[derive(Clone)]
pub struct ChromaRetriever {
    client: Client,
    base_url: String,
    collection_id: String,
    embedder: EmbeddingClient,
}

impl ChromaRetriever {
    /// Resolves (or creates) the named collection and returns a retriever
    /// bound to it.
    pub async fn connect(
        base_url: &str,
        collection_name: &str,
        embedder: EmbeddingClient,
    ) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let url = format!("{}/api/v1/collections", base_url.trim_end_matches('/'));
        let response = client
            .post(&url)
            .json(&json!({ "name": collection_name, "get_or_create": true }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let info: CollectionInfo = response.json().await?;
        info!(
            "Connected to Chroma collection '{collection_name}' ({})",
            info.id
        );

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            collection_id: info.id,
            embedder,
        })
    }

    fn collection_url(&self, op: &str) -> String {
        format!(
            "{}/api/v1/collections/{}/{op}",
            self.base_url, self.collection_id
        )
    }

    async fn post_collection(
        &self,
        op: &str,
        body: serde_json::Value,
    ) -> Result<reqwest::Response, RetrievalError> {
        let response = self.client.post(self.collection_url(op)).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Ids already stored in the collection. Ids are content hashes, so this
    /// doubles as the dedup set for ingestion.
    async fn existing_ids(&self) -> Result<Vec<String>, RetrievalError> {
        let response = self.post_collection("get", json!({ "include": [] })).await?;
        let parsed: GetResponse = response.json().await?;
        Ok(parsed.ids)
    }

    /// Embeds and upserts document chunks, skipping content hashes already
    /// present and batching uploads.
    pub async fn add_documents(
        &self,
        documents: &[ingest::DocumentChunk],
    ) -> Result<usize, RetrievalError> {
        let existing: std::collections::HashSet<String> =
            self.existing_ids().await?.into_iter().collect();

        let fresh: Vec<&ingest::DocumentChunk> = documents
            .iter()
            .filter(|d| !existing.contains(&d.id))
            .collect();

        if fresh.is_empty() {
            debug!("No new documents to store");
            return Ok(0);
        }

        let mut stored = 0;
        for batch in fresh.chunks(ADD_BATCH_SIZE) {
            let mut embeddings = Vec::with_capacity(batch.len());
            for chunk in batch {
                embeddings.push(self.embedder.embed(&chunk.text).await?);
            }

            let ids: Vec<&str> = batch.iter().map(|c| c.id.as_str()).collect();
            let texts: Vec<&str> = batch.iter().map(|c| c.text.as_str()).collect();
            let metadatas: Vec<serde_json::Value> = batch
                .iter()
                .map(|c| json!({ "hash": c.id, "type": c.doc_type, "source": c.source }))
                .collect();

            self.post_collection(
                "add",
                json!({
                    "ids": ids,
                    "embeddings": embeddings,
                    "documents": texts,
                    "metadatas": metadatas,
                }),
            )
            .await?;

            stored += batch.len();
            info!("Stored {} documents in Chroma (total {stored})", batch.len());
        }

        Ok(stored)
    }
}

#[async_trait]
impl VectorRetriever for ChromaRetriever {
    async fn similarity_search(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<String>, RetrievalError> {
        let embedding = self.embedder.embed(query).await?;

        let response = self
            .post_collection(
                "query",
                json!({
                    "query_embeddings": [embedding],
                    "n_results": k,
                    "include": ["documents"],
                }),
            )
            .await?;

        let parsed: QueryResponse = response.json().await?;
        let chunks = parsed.documents.into_iter().next().unwrap_or_default();
        debug!("Similarity search returned {} chunks", chunks.len());
        Ok(chunks)
    }
}
