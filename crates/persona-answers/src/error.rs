use std::path::PathBuf;

use persona_llm::LlmError;
use thiserror::Error;

/// Startup failures while assembling the dispatcher
///
/// Per-question failures never surface here; they become text answers.
#[derive(Debug, Error)]
pub enum AnswersError {
    /// Personality instruction file could not be read
    #[error("failed to read personality instruction {}: {source}", .path.display())]
    Personality {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Completion client could not be constructed
    #[error(transparent)]
    Client(#[from] LlmError),
}
