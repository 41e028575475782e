use serde::Deserialize;
use url::Url;

/// Logging and trace export configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Service name attached to exported spans
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Console log format
    #[serde(default)]
    pub log_format: LogFormat,
    /// OTLP span export
    #[serde(default)]
    pub otlp: Option<OtlpConfig>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
            otlp: None,
        }
    }
}

/// Console log format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// OTLP exporter settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OtlpConfig {
    /// Collector endpoint
    pub endpoint: Url,
    /// Wire protocol
    #[serde(default)]
    pub protocol: ExportProtocol,
    /// Fraction of root traces to sample (0.0 to 1.0)
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: f64,
}

/// OTLP export protocol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportProtocol {
    #[default]
    Grpc,
    HttpProto,
}

fn default_service_name() -> String {
    "persona".to_owned()
}

fn default_log_filter() -> String {
    "info".to_owned()
}

#[allow(clippy::missing_const_for_fn)]
fn default_sampling_rate() -> f64 {
    1.0
}
