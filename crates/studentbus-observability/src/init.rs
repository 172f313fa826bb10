// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for studentbus
//!
//! Installs a console `tracing_subscriber` fmt layer. `RUST_LOG` wins when
//! set; otherwise the filter is built from the base level plus per-crate
//! debug flags.

use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;

/// Logging initialization failure
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Console logging settings
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Level for everything not named by a debug flag
    pub base_level: String,
    pub debug_flags: CrateDebugFlags,
    /// Print the event target (module path) in each line
    pub with_target: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            base_level: "info".to_string(),
            debug_flags: CrateDebugFlags::default(),
            with_target: false,
        }
    }
}

impl LoggingOptions {
    pub fn new(base_level: impl Into<String>, debug_flags: CrateDebugFlags) -> Self {
        Self {
            base_level: base_level.into(),
            debug_flags,
            ..Default::default()
        }
    }

    /// Filter directives used when `RUST_LOG` is not set
    pub fn filter_string(&self) -> String {
        self.debug_flags.to_filter_string(&self.base_level)
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }

        let filter = self.filter_string();
        EnvFilter::try_new(&filter).map_err(|e| LoggingError::InvalidFilter {
            filter,
            reason: e.to_string(),
        })
    }
}

/// Initialize console logging
///
/// # Errors
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_logging(options: &LoggingOptions) -> Result<(), LoggingError> {
    let env_filter = options.env_filter()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(options.with_target)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

/// Initialize logging at `info` with the given debug flags
pub fn init_logging_default(debug_flags: &CrateDebugFlags) -> Result<(), LoggingError> {
    init_logging(&LoggingOptions::new("info", debug_flags.clone()))
}
