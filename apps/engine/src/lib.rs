//! Adaptive interview engine — retrieval-augmented MCQ generation with
//! difficulty tracking.
//!
//! The crate owns three things:
//! - the per-session [`session::DifficultyEngine`] state machine,
//! - the orchestration layer in [`interview`] (question generation, answer
//!   scoring, feedback synthesis, free-form career advice),
//! - the leaf clients those rely on: [`llm::GeminiClient`] behind the
//!   [`llm::TextGenerator`] trait and [`retrieval::ChromaRetriever`] behind
//!   [`retrieval::VectorRetriever`].
//!
//! HTTP routing, auth, account storage, and PDF extraction live in the
//! embedding service, not here. The embedding service is also responsible
//! for holding one [`session::SessionStore`] and resolving a session id to
//! its engine before calling into [`interview`].

pub mod config;
pub mod errors;
pub mod interview;
pub mod llm;
pub mod retrieval;
pub mod session;

pub use config::Config;
pub use errors::{AdviceError, GenerationError, SynthesisError};
pub use interview::advice::answer_query;
pub use interview::feedback::{synthesize, AnsweredQuestion, FeedbackAssessment, SkillAssessment};
pub use interview::question::{generate_next_question, Question};
pub use interview::ranking::{rank_candidates, ResumeSubmission};
pub use interview::scoring::{score, ScoreOutcome};
pub use llm::{GeminiClient, LlmError, TextGenerator};
pub use retrieval::{ChromaRetriever, EmbeddingClient, RetrievalError, VectorRetriever};
pub use session::{DifficultyEngine, PerformanceSummary, ResponseRecord, SessionStore};
