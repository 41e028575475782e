//! Chat completion client for Persona
//!
//! Wraps an OpenAI-compatible chat completions API (Groq by default) behind
//! the [`CompletionClient`] trait so callers can substitute a test double.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod protocol;
pub mod provider;
pub mod types;

pub use error::LlmError;
pub use provider::CompletionClient;
pub use provider::openai::OpenAiCompatibleClient;
pub use types::{Choice, CompletionParams, CompletionRequest, CompletionResponse, Message, Role, Usage};
