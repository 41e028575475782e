//! Completion client trait and implementations

pub mod openai;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::{CompletionRequest, CompletionResponse};

/// A chat completion backend
///
/// Built once at startup and shared across requests, so implementations
/// must be cheap to call concurrently.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Send a non-streaming completion request
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
