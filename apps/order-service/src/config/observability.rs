//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Observability section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log line encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for this service's targets when `RUST_LOG` is unset.
    pub level: String,
    /// Line encoding.
    pub format: LogFormat,
    /// Attach the enclosing spans to each event.
    pub include_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
            include_spans: true,
        }
    }
}
