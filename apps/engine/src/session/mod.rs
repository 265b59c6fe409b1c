//! Per-session adaptive difficulty state.
//!
//! One [`DifficultyEngine`] per test-taking session, always. The engine
//! itself is plain synchronous state with no failure modes; concurrency
//! scoping lives in [`store::SessionStore`], which hands out a
//! lock-per-session handle so two callers can never interleave
//! `record_response` calls on the same trajectory.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

pub mod store;

pub use store::{SessionId, SessionStore};

/// Easiest question level.
pub const MIN_LEVEL: u8 = 1;
/// Hardest question level.
pub const MAX_LEVEL: u8 = 10;
/// Level every fresh session starts at.
pub const INITIAL_LEVEL: u8 = 3;

/// One answered question: correctness plus the level it was asked at.
/// Append-only; never mutated or removed once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseRecord {
    /// Stable id of the question this response answered. `None` for legacy
    /// callers that record correctness without a question in hand; feedback
    /// synthesis falls back to positional alignment for those.
    pub question_id: Option<Uuid>,
    pub was_correct: bool,
    /// The level the question was asked at — captured before the transition.
    pub difficulty_level: u8,
}

/// Read-only performance view, recomputed from history on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    /// Percentage, rounded to 2 decimals.
    pub accuracy: f64,
    pub highest_difficulty: u8,
    pub current_difficulty: u8,
}

/// Adaptive difficulty state machine over levels `[MIN_LEVEL, MAX_LEVEL]`.
///
/// Transition rule: a correct answer moves the level up one, an incorrect
/// answer moves it down one, clamped at the bounds with no wraparound.
#[derive(Debug, Clone)]
pub struct DifficultyEngine {
    current_level: u8,
    history: Vec<ResponseRecord>,
}

impl Default for DifficultyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultyEngine {
    pub fn new() -> Self {
        Self {
            current_level: INITIAL_LEVEL,
            history: Vec::new(),
        }
    }

    /// Records a response and adjusts the level. Never fails.
    ///
    /// The history entry captures the level the question was asked at, i.e.
    /// the level *before* this call mutates it.
    pub fn record_response(&mut self, is_correct: bool) {
        self.record(None, is_correct);
    }

    /// Like [`record_response`](Self::record_response) but tags the history
    /// entry with the question's stable id so feedback synthesis can join by
    /// identifier instead of position.
    pub fn record_answer(&mut self, question_id: Uuid, is_correct: bool) {
        self.record(Some(question_id), is_correct);
    }

    fn record(&mut self, question_id: Option<Uuid>, is_correct: bool) {
        self.history.push(ResponseRecord {
            question_id,
            was_correct: is_correct,
            difficulty_level: self.current_level,
        });

        let old_level = self.current_level;
        if is_correct {
            if self.current_level < MAX_LEVEL {
                self.current_level += 1;
            }
        } else if self.current_level > MIN_LEVEL {
            self.current_level -= 1;
        }

        debug!(
            "Recorded response (correct={is_correct}): difficulty {old_level} -> {}",
            self.current_level
        );
    }

    pub fn current_difficulty(&self) -> u8 {
        self.current_level
    }

    pub fn history(&self) -> &[ResponseRecord] {
        &self.history
    }

    /// Restores the creation state: level back to [`INITIAL_LEVEL`], history
    /// cleared. Destructive — prior history is discarded, not archived.
    pub fn reset(&mut self) {
        self.current_level = INITIAL_LEVEL;
        self.history.clear();
        debug!("Engine reset. Difficulty set to {}", self.current_level);
    }

    /// Summary over the full history. An empty history is a defined
    /// degenerate case: zeroed counts with `highest_difficulty` equal to the
    /// current level, not an error.
    pub fn performance_summary(&self) -> PerformanceSummary {
        if self.history.is_empty() {
            return PerformanceSummary {
                total_questions: 0,
                correct_answers: 0,
                incorrect_answers: 0,
                accuracy: 0.0,
                highest_difficulty: self.current_level,
                current_difficulty: self.current_level,
            };
        }

        let total = self.history.len();
        let correct = self.history.iter().filter(|r| r.was_correct).count();
        let highest = self
            .history
            .iter()
            .map(|r| r.difficulty_level)
            .max()
            .unwrap_or(self.current_level);

        PerformanceSummary {
            total_questions: total,
            correct_answers: correct,
            incorrect_answers: total - correct,
            accuracy: round2(correct as f64 / total as f64 * 100.0),
            highest_difficulty: highest,
            current_difficulty: self.current_level,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
