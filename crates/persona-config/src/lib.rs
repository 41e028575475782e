#![allow(clippy::must_use_candidate)]

pub mod answers;
pub mod cors;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use answers::*;
pub use cors::*;
pub use env::ExpandError;
pub use health::*;
pub use llm::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Persona configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion API configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Predefined audio answers
    #[serde(default)]
    pub answers: AnswersConfig,
    /// Logging and trace export
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
