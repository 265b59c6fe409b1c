//! Document preparation for the vector store: feedback-block splitting,
//! sliding-window chunking, and content-addressed ids.
//!
//! Text extraction from PDFs happens upstream; this module takes plain text.

use sha2::{Digest, Sha256};

/// Chunk size and overlap, in characters.
pub const CHUNK_SIZE: usize = 500;
pub const CHUNK_OVERLAP: usize = 50;

/// One chunk ready for ingestion. `id` is the SHA-256 of the chunk text, so
/// identical content always maps to the same id and re-ingestion is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentChunk {
    pub id: String,
    pub text: String,
    /// "resumes" or "feedbacks".
    pub doc_type: String,
    /// Where the text came from (filename, upload id).
    pub source: String,
}

impl DocumentChunk {
    pub fn new(text: String, doc_type: &str, source: &str) -> Self {
        Self {
            id: content_hash(&text),
            text,
            doc_type: doc_type.to_string(),
            source: source.to_string(),
        }
    }
}

/// SHA-256 hex digest of document content.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Splits a feedback form into individual feedback blocks. Blocks are
/// separated by blank lines in the extracted text.
pub fn split_feedback_blocks(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sliding-window chunker over char boundaries: `chunk_size` chars per
/// chunk, each window starting `chunk_size - overlap` after the previous.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    assert!(chunk_size > overlap, "chunk_size must exceed overlap");

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() <= chunk_size {
        return vec![text.to_string()];
    }

    let step = chunk_size - overlap;
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        start += step;
    }
    chunks
}

/// Prepares raw document text for ingestion: split feedback forms into
/// blocks, chunk everything, hash each chunk.
pub fn prepare_document(text: &str, doc_type: &str, source: &str) -> Vec<DocumentChunk> {
    let blocks: Vec<String> = if doc_type == "feedbacks" {
        split_feedback_blocks(text)
    } else {
        vec![text.to_string()]
    };

    let mut chunks = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for block in &blocks {
        for piece in chunk_text(block, CHUNK_SIZE, CHUNK_OVERLAP) {
            let chunk = DocumentChunk::new(piece, doc_type, source);
            // Intra-document dedup; the store-level dedup handles the rest.
            if seen.insert(chunk.id.clone()) {
                chunks.push(chunk);
            }
        }
    }
    chunks
}
