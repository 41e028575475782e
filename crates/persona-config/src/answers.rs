use serde::Deserialize;

/// Predefined audio answers
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswersConfig {
    /// Ordered trigger list; earlier entries win when several match
    ///
    /// `None` selects the built-in table.
    #[serde(default)]
    pub triggers: Option<Vec<TriggerConfig>>,
}

/// One trigger phrase and the clip it selects
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriggerConfig {
    /// Case-insensitive substring to look for
    pub phrase: String,
    /// Audio file name returned to the client
    pub file: String,
}
