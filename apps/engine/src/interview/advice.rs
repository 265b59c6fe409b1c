//! Free-form career advice grounded in the resume and retrieved feedback.

use tracing::warn;

use crate::errors::AdviceError;
use crate::interview::prompts::{ADVICE_PROMPT_TEMPLATE, NO_CONTEXT_SENTINEL};
use crate::llm::TextGenerator;
use crate::retrieval::VectorRetriever;

const RETRIEVAL_K: usize = 5;

/// Answers a candidate question using their resume plus retrieved feedback
/// as context. Output is free text, not validated JSON.
pub async fn answer_query(
    user_query: &str,
    resume_text: &str,
    retriever: &dyn VectorRetriever,
    llm: &dyn TextGenerator,
) -> Result<String, AdviceError> {
    let relevant_feedback = match retriever.similarity_search(user_query, RETRIEVAL_K).await {
        Ok(chunks) if !chunks.is_empty() => chunks.join("\n\n"),
        Ok(_) => NO_CONTEXT_SENTINEL.to_string(),
        Err(e) => {
            warn!("Retrieval failed, answering without feedback context: {e}");
            NO_CONTEXT_SENTINEL.to_string()
        }
    };

    let context = format!("Resume:\n{resume_text}\n\nRelevant Feedback:\n{relevant_feedback}");
    let prompt = ADVICE_PROMPT_TEMPLATE
        .replace("{user_query}", user_query)
        .replace("{context}", &context);

    match llm.complete(&prompt).await {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) => {
            warn!("Advice call failed: {e}");
            Err(AdviceError::NoResponse)
        }
    }
}
