use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Groq's OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Completion API configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Bearer credential for the completion API
    ///
    /// Optional at parse time so a missing key is reported by validation
    /// with a clear message instead of a serde error.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL of an OpenAI-compatible API, `/chat/completions` is appended
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// File holding the personality instruction sent as the system message
    #[serde(default = "default_prompt_path")]
    pub prompt_path: PathBuf,
    /// Whole-request timeout for the HTTP client; unset leaves it unbounded
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            prompt_path: default_prompt_path(),
            timeout_seconds: None,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    0.7
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    300
}

fn default_prompt_path() -> PathBuf {
    PathBuf::from("prompt.txt")
}
