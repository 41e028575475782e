use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Reply to a question: a pre-recorded clip or generated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Answer {
    /// Play the named audio file
    Audio { file: String },
    /// Show or speak this text
    Text { text: String },
}

impl Answer {
    pub fn audio(file: impl Into<String>) -> Self {
        Self::Audio { file: file.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Text answer describing a failure, prefixed with `Error: `
    pub fn error(description: impl Display) -> Self {
        Self::Text {
            text: format!("Error: {description}"),
        }
    }
}
