//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and `warn` to everything else.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::{LogFormat, LoggingConfig};

/// Error type for logging setup.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Configured level is not a valid filter directive.
    #[error("invalid log level '{level}': {message}")]
    InvalidLevel {
        /// Configured level.
        level: String,
        /// Parser message.
        message: String,
    },
    /// A global subscriber was already installed.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

fn default_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(format!("warn,order_service={level}")).map_err(|e| {
        LoggingError::InvalidLevel {
            level: level.to_string(),
            message: e.to_string(),
        }
    })
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => default_filter(&config.level),
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns `InvalidLevel` for a bad level, or `SubscriberError` if a
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;

    let result = match config.format {
        LogFormat::Pretty => {
            let span_events = if config.include_spans {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            };
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_span_events(span_events)
                .try_init()
        }
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
            .try_init(),
    };

    result.map_err(|e| LoggingError::SubscriberError(e.to_string()))
}
