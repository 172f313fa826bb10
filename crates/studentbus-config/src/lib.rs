// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # studentbus Configuration System
//!
//! Type-safe configuration loader for studentbus with support for:
//! - TOML file parsing (`studentbus.toml`, every section optional)
//! - Environment variable overrides (`STUDENTBUS_*`)
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studentbus_config::load_config;
//!
//! let config = load_config(None, None).expect("Failed to load config");
//! println!("Server URL: {}", config.server.url);
//! println!("Publish every {:?}", config.server.publish_interval());
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    CONFIG_FILE_NAME, CONFIG_PATH_ENV,
};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StudentbusConfig::default();
        assert!(validate_config(&config).is_ok());
    }
}
