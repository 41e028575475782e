use std::path::Path;
use std::sync::Arc;

use crate::error::AnswersError;

/// System instruction prepended to every completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personality(Arc<str>);

impl Personality {
    pub fn new(instruction: impl Into<Arc<str>>) -> Self {
        Self(instruction.into())
    }

    /// Read the instruction file verbatim
    ///
    /// # Errors
    ///
    /// Returns `AnswersError::Personality` if the file cannot be read as UTF-8
    pub fn load(path: &Path) -> Result<Self, AnswersError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AnswersError::Personality {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "personality instruction loaded");

        Ok(Self::new(contents))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
