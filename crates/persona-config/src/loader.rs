use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a referenced environment
    /// variable is missing, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text that may contain placeholders
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        tracing::debug!(
            model = %config.llm.model,
            listen_address = %config.server.listen_address,
            "configuration loaded"
        );

        Ok(config)
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the API credential is missing, generation
    /// parameters are out of range, a trigger is blank, or CORS settings
    /// cannot be honored
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_llm_config()?;
        self.validate_answers_config()?;
        self.validate_cors_config()?;
        self.validate_telemetry_config()?;
        Ok(())
    }

    fn validate_llm_config(&self) -> anyhow::Result<()> {
        let has_key = self
            .llm
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty());

        if !has_key {
            anyhow::bail!("llm.api_key must be set (for example `api_key = \"{{{{ env.GROQ_API_KEY }}}}\"`)");
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            anyhow::bail!("llm.temperature must be between 0.0 and 2.0, got {}", self.llm.temperature);
        }

        if self.llm.max_tokens == 0 {
            anyhow::bail!("llm.max_tokens must be greater than 0");
        }

        if self.llm.timeout_seconds == Some(0) {
            anyhow::bail!("llm.timeout_seconds must be greater than 0 when set");
        }

        if self.llm.model.trim().is_empty() {
            anyhow::bail!("llm.model must not be empty");
        }

        Ok(())
    }

    fn validate_answers_config(&self) -> anyhow::Result<()> {
        let Some(ref triggers) = self.answers.triggers else {
            return Ok(());
        };

        for (index, trigger) in triggers.iter().enumerate() {
            if trigger.phrase.trim().is_empty() {
                anyhow::bail!("answers.triggers[{index}].phrase must not be empty");
            }
            if trigger.file.trim().is_empty() {
                anyhow::bail!("answers.triggers[{index}].file must not be empty");
            }
        }

        Ok(())
    }

    fn validate_cors_config(&self) -> anyhow::Result<()> {
        let cors = &self.server.cors;

        // Browsers refuse credentialed responses that carry a wildcard
        if cors.enabled && cors.credentials && cors.has_wildcard() {
            anyhow::bail!("server.cors.credentials requires explicit origins, methods and headers");
        }

        Ok(())
    }

    fn validate_telemetry_config(&self) -> anyhow::Result<()> {
        if let Some(ref otlp) = self.telemetry.otlp
            && !(0.0..=1.0).contains(&otlp.sampling_rate)
        {
            anyhow::bail!("telemetry.otlp.sampling_rate must be between 0.0 and 1.0");
        }

        Ok(())
    }
}
