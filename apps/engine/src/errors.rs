use thiserror::Error;

/// Failures of the question generation and scoring pipeline.
///
/// The three model-response kinds are deliberately distinct so callers can
/// log and alert on them separately: an unreachable model, prose that is not
/// JSON, and JSON that is missing the expected keys are different incidents.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The generator errored or returned no text. Never retried here; the
    /// caller retries the whole generate call if it wants to.
    #[error("No question generated.")]
    NoResponse,

    /// The model output was not parseable as JSON after fence stripping.
    #[error("AI response is not in valid JSON format.")]
    InvalidFormat,

    /// Valid JSON, but not the `question`/`options`/`answer` shape we asked
    /// for.
    #[error("Unexpected response format.")]
    UnexpectedShape,

    /// The question being scored has no correct option among its choices.
    /// This is corrupt caller input, not a model failure — fail hard rather
    /// than silently scoring the answer as wrong.
    #[error("Question has no matching correct option.")]
    NoCorrectOption,
}

/// Failures of feedback synthesis.
///
/// The display strings are load-bearing: they are the three messages the
/// frontend has always matched on, kept verbatim behind a tagged enum.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("No feedback generated.")]
    NoFeedback,

    #[error("AI response is not in valid JSON format.")]
    InvalidJson,

    #[error("JSON missing required fields.")]
    MissingFields,
}

/// Failures of the free-form career advice call.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("No response generated.")]
    NoResponse,
}
