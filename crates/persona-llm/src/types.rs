use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Role of a message participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Personality instruction
    System,
    /// Visitor question
    User,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// Message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Parameters controlling text generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionParams {
    /// Sampling temperature (0.0 to 2.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Provider-independent completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages, system first
    pub messages: Vec<Message>,
    /// Generation parameters
    #[serde(default)]
    pub params: CompletionParams,
}

/// Provider-independent completion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// One generated alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token accounting reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl CompletionResponse {
    /// Text of the first choice
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` when there are no choices and
    /// `EmptyCompletion` when the first choice has no content.
    pub fn into_first_text(self) -> Result<String, LlmError> {
        let first = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::MalformedResponse("response contained no choices".to_owned()))?;

        first.content.ok_or(LlmError::EmptyCompletion)
    }
}
