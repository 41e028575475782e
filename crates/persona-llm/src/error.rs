use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while requesting a completion
///
/// The `Display` output is what callers show after `"Error: "`, so each
/// variant reads as a complete sentence fragment.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Client could not be constructed from configuration
    #[error("invalid completion client configuration: {0}")]
    Configuration(String),

    /// Transport-level failure (DNS, connect, TLS, timeout)
    #[error("request to completion API failed: {0}")]
    Request(String),

    /// API answered with a non-success status
    #[error("completion API returned {status}: {message}")]
    Status {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Error message extracted from the body, or the raw body
        message: String,
    },

    /// Response body was not a valid completion
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    /// Completion parsed but carried no text to relay
    #[error("completion contained no text")]
    EmptyCompletion,
}

impl LlmError {
    /// Whether the failure came from the remote side rather than this process
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Request(_) | Self::Status { .. } | Self::MalformedResponse(_) | Self::EmptyCompletion
        )
    }
}
