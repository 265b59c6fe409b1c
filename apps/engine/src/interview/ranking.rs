//! Resume screening — ranks a batch of uploaded resumes and returns the
//! model's top candidate names as free text.

use std::fmt::Write as _;

use tracing::warn;

use crate::errors::AdviceError;
use crate::interview::prompts::RANKING_PROMPT_HEADER;
use crate::llm::TextGenerator;

/// Per-resume cap on prompt text, in characters. Resumes are excerpted, not
/// sent whole; names and recent experience live at the top anyway.
const RESUME_EXCERPT_CHARS: usize = 1500;

/// One uploaded resume: the extracted text plus the filename it came from.
/// PDF extraction happens upstream; this takes plain text.
#[derive(Debug, Clone)]
pub struct ResumeSubmission {
    pub filename: String,
    pub text: String,
}

/// Asks the model to pick the best-fit candidates across all submissions.
///
/// Output is free text (the names, in order of suitability), not validated
/// JSON. One model call, no retry.
pub async fn rank_candidates(
    resumes: &[ResumeSubmission],
    llm: &dyn TextGenerator,
) -> Result<String, AdviceError> {
    let mut prompt = RANKING_PROMPT_HEADER.to_string();
    for (i, resume) in resumes.iter().enumerate() {
        let excerpt: String = resume.text.chars().take(RESUME_EXCERPT_CHARS).collect();
        let _ = write!(
            prompt,
            "Resume {} ({}):\n{excerpt}\n\n",
            i + 1,
            resume.filename
        );
    }

    match llm.complete(&prompt).await {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) => {
            warn!("Resume ranking call failed: {e}");
            Err(AdviceError::NoResponse)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::test_support::{CannedGenerator, FailingGenerator, RecordingGenerator};

    fn submission(filename: &str, text: &str) -> ResumeSubmission {
        ResumeSubmission {
            filename: filename.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_rank_candidates_returns_trimmed_names() {
        let resumes = vec![submission("alice.pdf", "Alice Example. Rust, Postgres.")];
        let llm = CannedGenerator::new("  Alice Example\n".to_string());
        let names = rank_candidates(&resumes, &llm).await.unwrap();
        assert_eq!(names, "Alice Example");
    }

    #[tokio::test]
    async fn test_prompt_lists_each_resume_with_filename() {
        let resumes = vec![
            submission("alice.pdf", "Alice Example. Rust."),
            submission("bob.pdf", "Bob Sample. Go."),
        ];
        let llm = RecordingGenerator::new("Alice Example".to_string());
        rank_candidates(&resumes, &llm).await.unwrap();
        let prompt = llm.last_prompt();
        assert!(prompt.contains("Resume 1 (alice.pdf):\nAlice Example. Rust."));
        assert!(prompt.contains("Resume 2 (bob.pdf):\nBob Sample. Go."));
        assert!(prompt.contains("expert recruiter"));
    }

    #[tokio::test]
    async fn test_resume_text_is_excerpted_to_cap() {
        let long_text = format!("{}UNSEEN TAIL", "x".repeat(RESUME_EXCERPT_CHARS));
        let resumes = vec![submission("long.pdf", &long_text)];
        let llm = RecordingGenerator::new("Someone".to_string());
        rank_candidates(&resumes, &llm).await.unwrap();
        let prompt = llm.last_prompt();
        assert!(prompt.contains(&"x".repeat(RESUME_EXCERPT_CHARS)));
        assert!(!prompt.contains("UNSEEN TAIL"));
    }

    #[tokio::test]
    async fn test_generator_failure_is_no_response() {
        let resumes = vec![submission("a.pdf", "text")];
        let result = rank_candidates(&resumes, &FailingGenerator).await;
        assert!(matches!(result, Err(AdviceError::NoResponse)));
    }
}
