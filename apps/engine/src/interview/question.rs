//! MCQ generation — builds a difficulty-parameterized prompt, calls the
//! model once, and validates the structured payload.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::GenerationError;
use crate::interview::prompts::QUESTION_PROMPT_TEMPLATE;
use crate::llm::{strip_json_fences, TextGenerator};
use crate::session::DifficultyEngine;

/// Number of answer choices a question must carry.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice question. Ephemeral — lives for a single
/// question/answer cycle and is never persisted by this crate.
///
/// `difficulty_level` is always the level the engine requested. The model
/// reports its own value, but that self-report is advisory only and is
/// overwritten before the question leaves this module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable id, generated at creation; scoring tags the history record
    /// with it so feedback can join answers to difficulty by identifier.
    pub id: Uuid,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_option: String,
    pub difficulty_level: u8,
}

/// Generates the next question at the engine's current difficulty.
///
/// Exactly one model call, no retry: the caller retries the whole operation
/// if it wants another attempt.
pub async fn generate_next_question(
    resume_text: &str,
    engine: &DifficultyEngine,
    llm: &dyn TextGenerator,
) -> Result<Question, GenerationError> {
    let target = engine.current_difficulty();
    debug!("Generating question at difficulty level {target}");

    let prompt = QUESTION_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{difficulty}", &target.to_string());

    let raw = match llm.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Question generation call failed: {e}");
            return Err(GenerationError::NoResponse);
        }
    };

    let body = strip_json_fences(&raw);
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| GenerationError::InvalidFormat)?;

    parse_question(&value, target)
}

/// Validates the model payload and assembles a [`Question`] at `target`.
fn parse_question(value: &serde_json::Value, target: u8) -> Result<Question, GenerationError> {
    let text = value
        .get("question")
        .and_then(|v| v.as_str())
        .ok_or(GenerationError::UnexpectedShape)?;

    let options: Vec<String> = value
        .get("options")
        .and_then(|v| v.as_array())
        .ok_or(GenerationError::UnexpectedShape)?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or(GenerationError::UnexpectedShape)?;

    if options.len() != OPTION_COUNT {
        warn!("Model returned {} options instead of {OPTION_COUNT}", options.len());
        return Err(GenerationError::UnexpectedShape);
    }

    let answer = value
        .get("answer")
        .and_then(|v| v.as_str())
        .ok_or(GenerationError::UnexpectedShape)?;

    if let Some(reported) = value.get("difficulty_level").and_then(|v| v.as_u64()) {
        if reported != u64::from(target) {
            warn!("Model self-reported difficulty {reported}, overriding with requested {target}");
        }
    }

    Ok(Question {
        id: Uuid::new_v4(),
        text: text.to_string(),
        options,
        correct_option: answer.to_string(),
        difficulty_level: target,
    })
}
