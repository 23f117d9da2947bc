//! Configuration module for the order service.
//!
//! YAML configuration with `${VAR}` / `${VAR:-default}` environment variable
//! interpolation, validated before the service starts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_service::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("HTTP port: {}", config.server.http_port);
//! ```

mod notifications;
mod observability;
mod payment;
mod seed;
mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use notifications::{NotificationsConfig, SenderKind};
pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use payment::PaymentConfig;
pub use seed::{CatalogSeed, DirectorySeed, MenuItemSeed, RestaurantSeed, UserSeed};
pub use server::ServerConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "ORDER_SERVICE_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Payment gateway configuration.
    #[serde(default)]
    pub payment: PaymentConfig,
    /// Notification configuration.
    #[serde(default)]
    pub notifications: NotificationsConfig,
    /// Menu catalog seed.
    #[serde(default)]
    pub catalog: CatalogSeed,
    /// Contact directory seed.
    #[serde(default)]
    pub directory: DirectorySeed,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// `path` defaults to `$ORDER_SERVICE_CONFIG`, then `config.yaml`.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(
        || std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.yaml".to_string()),
        str::to_string,
    );

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.http_port == 0 {
        return Err(ConfigError::ValidationError(
            "server.http_port must be non-zero".to_string(),
        ));
    }

    if config.payment.key_id.trim().is_empty() || config.payment.key_secret.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "payment.key_id and payment.key_secret are required".to_string(),
        ));
    }

    let currency = &config.payment.currency;
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ConfigError::ValidationError(format!(
            "payment.currency must be a 3-letter upper-case code, got '{currency}'"
        )));
    }

    if config.notifications.queue_capacity == 0 {
        return Err(ConfigError::ValidationError(
            "notifications.queue_capacity must be positive".to_string(),
        ));
    }

    if config.notifications.sender == SenderKind::Webhook
        && config.notifications.webhook_url.trim().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "notifications.webhook_url is required for the webhook sender".to_string(),
        ));
    }

    if let Some(item) = config.catalog.items.iter().find(|i| i.price.is_sign_negative()) {
        return Err(ConfigError::ValidationError(format!(
            "catalog item '{}' has a negative price",
            item.id
        )));
    }

    if config.observability.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    Ok(())
}
