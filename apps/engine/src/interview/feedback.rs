//! Feedback synthesis — retrieval-grounded assessment of the full answer
//! history, returned as a typed five-field structure.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::SynthesisError;
use crate::interview::prompts::{FEEDBACK_PROMPT_TEMPLATE, NO_CONTEXT_SENTINEL};
use crate::interview::question::Question;
use crate::llm::TextGenerator;
use crate::retrieval::VectorRetriever;
use crate::session::DifficultyEngine;

/// How many feedback chunks to retrieve per synthesis.
const RETRIEVAL_K: usize = 5;

/// The five keys the model must return. Checked as a set before typed
/// deserialization so a missing key is reported distinctly from prose that
/// is not JSON at all.
const REQUIRED_KEYS: [&str; 5] = [
    "feedback_summary",
    "skill_levels",
    "strengths",
    "areas_for_improvement",
    "suggested_improvements",
];

/// One question/answer pair as submitted by the caller, in answer order.
#[derive(Debug, Clone)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub user_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub skill: String,
    pub level: String,
    pub evidence: String,
}

/// Structured skill assessment synthesized from the full answer history.
/// Produced once per call; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackAssessment {
    pub feedback_summary: String,
    pub skill_levels: Vec<SkillAssessment>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub suggested_improvements: Vec<String>,
}

/// Synthesizes a [`FeedbackAssessment`] from the answer history.
///
/// Retrieval failures and empty results both degrade to a sentinel context
/// rather than failing the call; the model call itself happens exactly once.
pub async fn synthesize(
    answers: &[AnsweredQuestion],
    resume_text: &str,
    engine: &DifficultyEngine,
    retriever: &dyn VectorRetriever,
    llm: &dyn TextGenerator,
) -> Result<FeedbackAssessment, SynthesisError> {
    let feedback_context = match retriever.similarity_search(resume_text, RETRIEVAL_K).await {
        Ok(chunks) if !chunks.is_empty() => chunks.join("\n\n"),
        Ok(_) => NO_CONTEXT_SENTINEL.to_string(),
        Err(e) => {
            warn!("Retrieval failed, synthesizing without context: {e}");
            NO_CONTEXT_SENTINEL.to_string()
        }
    };

    let transcript = build_transcript(answers, engine);
    let summary = engine.performance_summary();

    let prompt = FEEDBACK_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{feedback_context}", &feedback_context)
        .replace("{total}", &summary.total_questions.to_string())
        .replace("{correct}", &summary.correct_answers.to_string())
        .replace("{incorrect}", &summary.incorrect_answers.to_string())
        .replace("{accuracy}", &format!("{:.2}", summary.accuracy))
        .replace("{highest}", &summary.highest_difficulty.to_string())
        .replace("{transcript}", &transcript);

    let raw = match llm.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Feedback synthesis call failed: {e}");
            return Err(SynthesisError::NoFeedback);
        }
    };

    parse_assessment(&raw)
}

/// Formats the per-question transcript with difficulty tags.
///
/// Each answer's difficulty is looked up in the engine history by question
/// id first; untagged records fall back to positional alignment (the two
/// sequences are expected to align 1:1, but identifier joining holds even
/// when callers reorder or omit answers).
fn build_transcript(answers: &[AnsweredQuestion], engine: &DifficultyEngine) -> String {
    let history = engine.history();

    answers
        .iter()
        .enumerate()
        .map(|(i, answered)| {
            let by_id = history
                .iter()
                .find(|r| r.question_id == Some(answered.question.id))
                .map(|r| r.difficulty_level);
            let difficulty = by_id
                .or_else(|| history.get(i).map(|r| r.difficulty_level))
                .map(|d| d.to_string())
                .unwrap_or_else(|| "Unknown".to_string());

            format!(
                "Q: {} (Difficulty: {difficulty}/10)\nA: {}",
                answered.question.text, answered.user_answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts and validates the assessment object from raw model output.
///
/// Extraction is a greedy brace span — first `{` to last `}` — which
/// tolerates prose around a single JSON object but deliberately does not
/// attempt to disambiguate multiple top-level objects.
fn parse_assessment(raw: &str) -> Result<FeedbackAssessment, SynthesisError> {
    let start = raw.find('{').ok_or(SynthesisError::InvalidJson)?;
    let end = raw.rfind('}').ok_or(SynthesisError::InvalidJson)?;
    if end < start {
        return Err(SynthesisError::InvalidJson);
    }
    let span = &raw[start..=end];

    let value: serde_json::Value =
        serde_json::from_str(span).map_err(|_| SynthesisError::InvalidJson)?;
    let object = value.as_object().ok_or(SynthesisError::InvalidJson)?;

    if !REQUIRED_KEYS.iter().all(|key| object.contains_key(*key)) {
        return Err(SynthesisError::MissingFields);
    }

    // Keys are present; a type mismatch inside one of them is still a schema
    // violation and reports as the same legacy message.
    serde_json::from_value(value).map_err(|_| SynthesisError::MissingFields)
}
