//! Orchestration layer: question generation, answer scoring, feedback
//! synthesis, and career advice, all parameterized over the leaf traits.

pub mod advice;
pub mod feedback;
pub mod prompts;
pub mod question;
pub mod ranking;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_support;

pub use advice::answer_query;
pub use feedback::{synthesize, AnsweredQuestion, FeedbackAssessment, SkillAssessment};
pub use question::{generate_next_question, Question};
pub use ranking::{rank_candidates, ResumeSubmission};
pub use scoring::{score, ScoreOutcome};
