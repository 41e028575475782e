//! Programmatic configuration builder for integration tests

use std::io::Write;
use std::net::SocketAddr;

use persona_config::{AnswersConfig, Config, CorsConfig, LlmConfig, ServerConfig, TriggerConfig};
use secrecy::SecretString;
use tempfile::NamedTempFile;

/// Personality instruction written for every test server
pub const TEST_PERSONALITY: &str = "You are a test persona. Answer briefly.";

/// Configuration plus the personality file it points at
///
/// The file is removed when this is dropped, so keep it alive until the
/// server has been built.
pub struct TestConfig {
    pub config: Config,
    _personality: NamedTempFile,
}

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
    personality: String,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: SocketAddr::from(([127, 0, 0, 1], 0)),
                    ..ServerConfig::default()
                },
                llm: LlmConfig {
                    api_key: Some(SecretString::from("test-key")),
                    ..LlmConfig::default()
                },
                ..Config::default()
            },
            personality: TEST_PERSONALITY.to_owned(),
        }
    }

    /// Point the completion client at a mock backend
    pub fn with_llm(mut self, base_url: &str) -> Self {
        self.config.llm.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Override the generation settings sent upstream
    pub fn with_generation(mut self, model: &str, temperature: f64, max_tokens: u32) -> Self {
        model.clone_into(&mut self.config.llm.model);
        self.config.llm.temperature = temperature;
        self.config.llm.max_tokens = max_tokens;
        self
    }

    /// Replace the built-in trigger table
    pub fn with_triggers(mut self, pairs: &[(&str, &str)]) -> Self {
        self.config.answers = AnswersConfig {
            triggers: Some(
                pairs
                    .iter()
                    .map(|(phrase, file)| TriggerConfig {
                        phrase: (*phrase).to_owned(),
                        file: (*file).to_owned(),
                    })
                    .collect(),
            ),
        };
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Write the personality file and build the final config
    pub fn build(mut self) -> TestConfig {
        let mut file = NamedTempFile::new().expect("create personality file");
        file.write_all(self.personality.as_bytes())
            .expect("write personality file");
        self.config.llm.prompt_path = file.path().to_path_buf();

        TestConfig {
            config: self.config,
            _personality: file,
        }
    }
}
