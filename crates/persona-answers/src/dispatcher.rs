//! Question dispatch: predefined audio first, completion API otherwise

use std::sync::Arc;

use persona_config::{Config, LlmConfig};
use persona_llm::{CompletionClient, CompletionParams, CompletionRequest, CompletionResponse, Message, OpenAiCompatibleClient};

use crate::error::AnswersError;
use crate::matcher::TriggerTable;
use crate::personality::Personality;
use crate::types::{Answer, Question};

/// Fixed per-process generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl From<&LlmConfig> for GenerationSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Answers questions; cheap to clone and shared by every request
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

struct DispatcherInner {
    client: Arc<dyn CompletionClient>,
    triggers: TriggerTable,
    personality: Personality,
    settings: GenerationSettings,
}

impl Dispatcher {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        triggers: TriggerTable,
        personality: Personality,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            inner: Arc::new(DispatcherInner {
                client,
                triggers,
                personality,
                settings,
            }),
        }
    }

    /// Build the production dispatcher: Groq-compatible client, personality
    /// file from disk, configured or built-in triggers
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built or the personality
    /// file cannot be read
    pub fn from_config(config: &Config) -> Result<Self, AnswersError> {
        let client = OpenAiCompatibleClient::new("groq", &config.llm)?;
        let personality = Personality::load(&config.llm.prompt_path)?;
        let triggers = TriggerTable::from_config(&config.answers);

        tracing::info!(
            model = %config.llm.model,
            triggers = triggers.len(),
            "dispatcher ready"
        );

        Ok(Self::new(
            Arc::new(client),
            triggers,
            personality,
            GenerationSettings::from(&config.llm),
        ))
    }

    /// Answer one question
    ///
    /// Never fails: completion errors are folded into an `Error: ` text answer.
    #[tracing::instrument(name = "ask", skip_all, fields(bytes = question.text.len()))]
    pub async fn handle(&self, question: Question) -> Answer {
        let text = question.text.trim();

        if let Some(file) = self.inner.triggers.detect(text) {
            tracing::debug!(file, "answering with predefined audio");
            return Answer::audio(file);
        }

        let request = self.completion_request(text);
        let client = &self.inner.client;

        tracing::debug!(provider = client.name(), model = %request.model, "requesting completion");

        match client
            .complete(&request)
            .await
            .and_then(CompletionResponse::into_first_text)
        {
            Ok(reply) => Answer::text(reply),
            Err(e) => {
                tracing::warn!(provider = client.name(), upstream = e.is_upstream(), error = %e, "completion failed");
                Answer::error(e)
            }
        }
    }

    fn completion_request(&self, text: &str) -> CompletionRequest {
        let settings = &self.inner.settings;

        CompletionRequest {
            model: settings.model.clone(),
            messages: vec![
                Message::system(self.inner.personality.as_str()),
                Message::user(text),
            ],
            params: CompletionParams {
                temperature: Some(settings.temperature),
                max_tokens: Some(settings.max_tokens),
            },
        }
    }
}
