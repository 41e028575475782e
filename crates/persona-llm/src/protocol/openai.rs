//! `OpenAI` chat completion API wire format types
//!
//! Groq and most hosted open-model APIs accept this format unchanged.

use serde::{Deserialize, Serialize};

use crate::types::{Choice, CompletionRequest, CompletionResponse, Message, Usage};

// -- Request types --

/// `OpenAI` chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<OpenAiMessage>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// `OpenAI` message within a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiMessage {
    /// Message role
    pub role: String,
    /// Text content
    pub content: String,
}

// -- Response types --

/// `OpenAI` chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiResponse {
    /// Response identifier
    #[serde(default)]
    pub id: String,
    /// Model used
    #[serde(default)]
    pub model: String,
    /// Generated choices
    pub choices: Vec<OpenAiChoice>,
    /// Token usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<OpenAiUsage>,
}

/// Choice within an `OpenAI` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiChoice {
    /// Choice index
    #[serde(default)]
    pub index: u32,
    /// Generated message
    pub message: OpenAiChoiceMessage,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message within an `OpenAI` response choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiChoiceMessage {
    /// Role (always "assistant")
    pub role: String,
    /// Text content
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage in an `OpenAI` response
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OpenAiUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

// -- Error envelope --

/// Error body returned with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiErrorEnvelope {
    pub error: OpenAiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiErrorBody {
    pub message: String,
}

/// Human-readable message for an error body
///
/// Falls back to the raw body when it is not a standard error envelope.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<OpenAiErrorEnvelope>(body).map_or_else(|_| body.trim().to_owned(), |e| e.error.message)
}

// -- Conversions --

impl From<&Message> for OpenAiMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_str().to_owned(),
            content: message.content.clone(),
        }
    }
}

impl From<&CompletionRequest> for OpenAiRequest {
    fn from(request: &CompletionRequest) -> Self {
        Self {
            model: request.model.clone(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.params.temperature,
            max_tokens: request.params.max_tokens,
        }
    }
}

impl From<OpenAiResponse> for CompletionResponse {
    fn from(response: OpenAiResponse) -> Self {
        Self {
            id: response.id,
            model: response.model,
            choices: response
                .choices
                .into_iter()
                .map(|c| Choice {
                    index: c.index,
                    content: c.message.content,
                    finish_reason: c.finish_reason,
                })
                .collect(),
            usage: response.usage.map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        }
    }
}
