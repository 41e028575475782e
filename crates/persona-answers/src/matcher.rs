//! Trigger phrase lookup for predefined audio answers

use persona_config::AnswersConfig;

/// Trigger phrases shipped with the service, in match priority order
const BUILTIN_TRIGGERS: &[(&str, &str)] = &[
    ("life story", "life-story.mp3"),
    ("your life story", "life-story.mp3"),
    ("superpower", "superpower.mp3"),
    ("top 3 areas", "growth-areas.mp3"),
    ("areas you'd like to grow", "growth-areas.mp3"),
    ("misconception", "misunderstanding.mp3"),
    ("coworkers think", "misunderstanding.mp3"),
    ("boundaries", "boundaries.mp3"),
    ("limits", "boundaries.mp3"),
];

/// A phrase and the audio file it selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    phrase: String,
    file: String,
}

impl Trigger {
    /// Lowercased phrase matched against questions
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Audio file identifier returned on a match
    pub fn file(&self) -> &str {
        &self.file
    }
}

/// Ordered, immutable trigger table
///
/// Lookup is case-insensitive substring containment. When several phrases
/// occur in a question the earliest entry in the table wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerTable {
    triggers: Vec<Trigger>,
}

impl TriggerTable {
    /// Build a table from `(phrase, file)` pairs, keeping their order
    pub fn new<I, P, F>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, F)>,
        P: AsRef<str>,
        F: Into<String>,
    {
        let triggers = pairs
            .into_iter()
            .map(|(phrase, file)| Trigger {
                phrase: phrase.as_ref().to_lowercase(),
                file: file.into(),
            })
            .collect();

        Self { triggers }
    }

    /// The table the service ships with
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TRIGGERS.iter().copied())
    }

    /// Configured triggers, or the built-in table when none are configured
    pub fn from_config(config: &AnswersConfig) -> Self {
        config.triggers.as_ref().map_or_else(Self::builtin, |triggers| {
            Self::new(triggers.iter().map(|t| (t.phrase.as_str(), t.file.clone())))
        })
    }

    /// Audio file for the first trigger phrase contained in `text`
    pub fn detect(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();

        self.triggers
            .iter()
            .find(|trigger| lowered.contains(&trigger.phrase))
            .map(Trigger::file)
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }
}
