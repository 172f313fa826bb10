//! Configuration validation
//!
//! Checks that values are within valid ranges before any socket is opened.
//! Every problem is collected so the user sees them all at once.

use crate::{ConfigError, ConfigResult, StudentbusConfig};

/// Endpoint schemes accepted by the transport layer
const URL_SCHEMES: &[&str] = &["tcp://", "ipc://", "inproc://", "pgm://", "epgm://"];

/// Accepted `logging.level` values
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    InvalidUrl { field: String, url: String },
    MustBePositive { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl { field, url } => {
                write!(
                    f,
                    "{} = '{}' must start with one of: {}",
                    field,
                    url,
                    URL_SCHEMES.join(", ")
                )
            }
            Self::MustBePositive { field } => {
                write!(f, "{} must be greater than 0", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &StudentbusConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

/// All validation problems, in field order
pub fn collect_errors(config: &StudentbusConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    validate_url("server.url", &config.server.url, &mut errors);
    validate_url("client.url", &config.client.url, &mut errors);

    let positive = [
        ("server.publish_interval_ms", config.server.publish_interval_ms),
        ("client.poll_timeout_ms", config.client.poll_timeout_ms),
        (
            "transport.max_message_size",
            config.transport.max_message_size as u64,
        ),
    ];
    for (field, value) in positive {
        if value == 0 {
            errors.push(ConfigValidationError::MustBePositive {
                field: field.to_string(),
            });
        }
    }

    if config.client.max_batches == Some(0) {
        errors.push(ConfigValidationError::MustBePositive {
            field: "client.max_batches".to_string(),
        });
    }

    if let Some(dir) = &config.server.data_dir {
        if dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError::InvalidValue {
                field: "server.data_dir".to_string(),
                reason: "path is empty".to_string(),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    errors
}

fn validate_url(field: &str, url: &str, errors: &mut Vec<ConfigValidationError>) {
    let has_scheme = URL_SCHEMES
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme));
    if !has_scheme {
        errors.push(ConfigValidationError::InvalidUrl {
            field: field.to_string(),
            url: url.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_pass() {
        assert!(collect_errors(&StudentbusConfig::default()).is_empty());
    }

    #[test]
    fn test_bad_urls() {
        let mut config = StudentbusConfig::default();
        config.server.url = "127.0.0.1:5555".to_string();
        config.client.url = "tcp://".to_string();

        let errors = collect_errors(&config);
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            &errors[0],
            ConfigValidationError::InvalidUrl { field, .. } if field == "server.url"
        ));
    }

    #[test]
    fn test_zero_values() {
        let mut config = StudentbusConfig::default();
        config.server.publish_interval_ms = 0;
        config.client.poll_timeout_ms = 0;
        config.client.max_batches = Some(0);
        config.transport.max_message_size = 0;

        assert_eq!(collect_errors(&config).len(), 4);
    }

    #[test]
    fn test_empty_data_dir() {
        let mut config = StudentbusConfig::default();
        config.server.data_dir = Some(PathBuf::new());
        assert_eq!(collect_errors(&config).len(), 1);
    }

    #[test]
    fn test_unknown_log_level_reported_together() {
        let mut config = StudentbusConfig::default();
        config.logging.level = "verbose".to_string();
        config.server.publish_interval_ms = 0;

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("logging.level"));
        assert!(err.contains("server.publish_interval_ms"));
    }
}
