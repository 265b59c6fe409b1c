//! Answer scoring — exact-match comparison plus the difficulty transition.

use serde::Serialize;
use tracing::debug;

use crate::errors::GenerationError;
use crate::interview::question::Question;
use crate::session::DifficultyEngine;

/// Result of scoring one submitted answer.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreOutcome {
    #[serde(rename = "is_correct")]
    pub correct: bool,
    pub correct_answer: String,
    pub new_difficulty: u8,
}

/// Scores a submitted answer against the question and records the outcome.
///
/// Comparison trims surrounding whitespace on both sides and is
/// case-sensitive. Exactly one history record is appended per call.
///
/// A question whose `correct_option` is not among its own options is corrupt
/// caller input and fails hard with [`GenerationError::NoCorrectOption`]
/// rather than being silently scored as wrong — nothing is recorded in that
/// case.
pub fn score(
    selected_answer: &str,
    question: &Question,
    engine: &mut DifficultyEngine,
) -> Result<ScoreOutcome, GenerationError> {
    let correct_answer = question.correct_option.trim();

    if !question.options.iter().any(|o| o.trim() == correct_answer) {
        return Err(GenerationError::NoCorrectOption);
    }

    let correct = selected_answer.trim() == correct_answer;
    engine.record_answer(question.id, correct);

    debug!(
        "Scored answer for question {} (correct={correct}): difficulty now {}",
        question.id,
        engine.current_difficulty()
    );

    Ok(ScoreOutcome {
        correct,
        correct_answer: question.correct_option.clone(),
        new_difficulty: engine.current_difficulty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn capital_question() -> Question {
        Question {
            id: Uuid::new_v4(),
            text: "What is the capital of France?".to_string(),
            options: vec![
                "Paris".to_string(),
                "Lyon".to_string(),
                "Marseille".to_string(),
                "Nice".to_string(),
            ],
            correct_option: "Paris".to_string(),
            difficulty_level: 3,
        }
    }

    #[test]
    fn test_correct_answer_raises_difficulty() {
        let mut engine = DifficultyEngine::new();
        let question = capital_question();
        let outcome = score("Paris", &question, &mut engine).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.correct_answer, "Paris");
        assert_eq!(outcome.new_difficulty, 4);
    }

    #[test]
    fn test_incorrect_answer_lowers_difficulty() {
        let mut engine = DifficultyEngine::new();
        let outcome = score("Lyon", &capital_question(), &mut engine).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.new_difficulty, 2);
    }

    #[test]
    fn test_whitespace_is_trimmed_on_both_sides() {
        let mut engine = DifficultyEngine::new();
        let mut question = capital_question();
        question.correct_option = " Paris\t".to_string();
        let outcome = score("  Paris ", &question, &mut engine).unwrap();
        assert!(outcome.correct);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let mut engine = DifficultyEngine::new();
        let outcome = score("paris", &capital_question(), &mut engine).unwrap();
        assert!(!outcome.correct);
    }

    #[test]
    fn test_exactly_one_record_per_call() {
        let mut engine = DifficultyEngine::new();
        let question = capital_question();
        score("Paris", &question, &mut engine).unwrap();
        assert_eq!(engine.history().len(), 1);
        score("Lyon", &question, &mut engine).unwrap();
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_record_is_tagged_with_question_id() {
        let mut engine = DifficultyEngine::new();
        let question = capital_question();
        score("Paris", &question, &mut engine).unwrap();
        assert_eq!(engine.history()[0].question_id, Some(question.id));
    }

    #[test]
    fn test_no_correct_option_fails_hard_without_recording() {
        let mut engine = DifficultyEngine::new();
        let mut question = capital_question();
        question.correct_option = "Berlin".to_string();
        let result = score("Paris", &question, &mut engine);
        assert!(matches!(result, Err(GenerationError::NoCorrectOption)));
        assert!(engine.history().is_empty());
        assert_eq!(engine.current_difficulty(), 3);
    }
}
