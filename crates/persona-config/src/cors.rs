use std::time::Duration;

use serde::Deserialize;

/// Cross-origin access for browser frontends
///
/// Everything is allowed unless narrowed here.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Attach the CORS layer at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Allowed origins (`"*"` or explicit list)
    #[serde(default)]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (`"*"` or explicit list)
    #[serde(default)]
    pub methods: AnyOrArray,
    /// Allowed request headers (`"*"` or explicit list)
    #[serde(default)]
    pub headers: AnyOrArray,
    /// Send `Access-Control-Allow-Credentials: true`
    #[serde(default)]
    pub credentials: bool,
    /// Preflight cache lifetime in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            origins: AnyOrArray::Any,
            methods: AnyOrArray::Any,
            headers: AnyOrArray::Any,
            credentials: false,
            max_age: None,
        }
    }
}

impl CorsConfig {
    /// Preflight cache lifetime as a `Duration`
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }

    /// Whether any of origins, methods or headers is a wildcard
    pub const fn has_wildcard(&self) -> bool {
        self.origins.is_any() || self.methods.is_any() || self.headers.is_any()
    }
}

/// Either the wildcard `"*"` or an explicit list of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnyOrArray {
    #[default]
    Any,
    List(Vec<String>),
}

impl AnyOrArray {
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnyOrArray {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for AnyOrArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = match RawAnyOrArray::deserialize(deserializer)? {
            RawAnyOrArray::One(value) => vec![value],
            RawAnyOrArray::Many(values) => values,
        };

        // A "*" anywhere in the list widens it to everything
        if values.iter().any(|v| v == "*") {
            Ok(Self::Any)
        } else {
            Ok(Self::List(values))
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}
