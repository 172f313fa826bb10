// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (or built-in defaults when no file exists)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::validation::validate_config;
use crate::{ConfigError, ConfigResult, StudentbusConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "studentbus.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "STUDENTBUS_CONFIG_PATH";

/// Environment variables and the dotted keys they override
const ENV_OVERRIDES: &[(&str, &[&str])] = &[
    ("STUDENTBUS_URL", &["server.url", "client.url"]),
    ("STUDENTBUS_DATA_DIR", &["server.data_dir"]),
    ("STUDENTBUS_PUBLISH_INTERVAL_MS", &["server.publish_interval_ms"]),
    ("STUDENTBUS_RELOAD", &["server.reload_each_cycle"]),
    ("STUDENTBUS_POLL_TIMEOUT_MS", &["client.poll_timeout_ms"]),
    ("STUDENTBUS_LOG_LEVEL", &["logging.level"]),
];

/// Find the studentbus configuration file
///
/// Search order:
/// 1. `STUDENTBUS_CONFIG_PATH` environment variable (must exist)
/// 2. Current working directory: `./studentbus.toml`
///
/// Returns `Ok(None)` when no file is configured and none is present; the
/// built-in defaults apply in that case.
pub fn find_config_file() -> ConfigResult<Option<PathBuf>> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.is_file() {
            return Ok(Some(path));
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by {} not found: {}",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    if let Ok(cwd) = env::current_dir() {
        let candidate = cwd.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Load configuration
///
/// # Arguments
///
/// * `config_path` - Optional explicit path. If `None`, [`find_config_file`] decides.
/// * `cli_args` - Optional CLI overrides keyed by dotted path (`server.url`, ...)
///
/// # Errors
///
/// Returns error if an explicit file is missing, contains invalid TOML, or the
/// merged configuration fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<StudentbusConfig> {
    let config_file = match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            Some(path.to_path_buf())
        }
        None => find_config_file()?,
    };

    let mut config = match config_file {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        }
        None => StudentbusConfig::default(),
    };

    // Apply overrides in order
    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `STUDENTBUS_URL` -> `server.url` and `client.url`
/// - `STUDENTBUS_DATA_DIR` -> `server.data_dir`
/// - `STUDENTBUS_PUBLISH_INTERVAL_MS` -> `server.publish_interval_ms`
/// - `STUDENTBUS_RELOAD` -> `server.reload_each_cycle`
/// - `STUDENTBUS_POLL_TIMEOUT_MS` -> `client.poll_timeout_ms`
/// - `STUDENTBUS_LOG_LEVEL` -> `logging.level`
///
/// Values that do not parse for their field are ignored.
pub fn apply_environment_overrides(config: &mut StudentbusConfig) {
    apply_overrides_from(config, |name| env::var(name).ok());
}

fn apply_overrides_from<F>(config: &mut StudentbusConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    for (name, keys) in ENV_OVERRIDES {
        if let Some(value) = lookup(name) {
            for key in keys.iter() {
                set_field(config, key, &value);
            }
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - Dotted keys to values, e.g. `{"server.url": "tcp://*:6000"}`
///
/// Unknown keys and unparseable values are ignored.
pub fn apply_cli_overrides(config: &mut StudentbusConfig, cli_args: &HashMap<String, String>) {
    for (key, value) in cli_args {
        set_field(config, key, value);
    }
}

fn parse_bool(value: &str) -> bool {
    let value = value.to_lowercase();
    value == "true" || value == "1" || value == "yes"
}

/// Set one field by dotted key. Unknown keys and values that do not parse
/// leave the configuration unchanged.
fn set_field(config: &mut StudentbusConfig, key: &str, value: &str) {
    fn set<T: std::str::FromStr>(slot: &mut T, value: &str) {
        if let Ok(v) = value.parse() {
            *slot = v;
        }
    }

    match key {
        "server.url" => config.server.url = value.to_string(),
        "server.data_dir" => config.server.data_dir = Some(PathBuf::from(value)),
        "server.publish_interval_ms" => set(&mut config.server.publish_interval_ms, value),
        "server.warmup_ms" => set(&mut config.server.warmup_ms, value),
        "server.reload_each_cycle" => config.server.reload_each_cycle = parse_bool(value),
        "client.url" => config.client.url = value.to_string(),
        "client.poll_timeout_ms" => set(&mut config.client.poll_timeout_ms, value),
        "client.max_batches" => {
            if let Ok(n) = value.parse() {
                config.client.max_batches = Some(n);
            }
        }
        "transport.send_hwm" => set(&mut config.transport.send_hwm, value),
        "transport.recv_hwm" => set(&mut config.transport.recv_hwm, value),
        "transport.max_message_size" => set(&mut config.transport.max_message_size, value),
        "logging.level" => config.logging.level = value.to_lowercase(),
        _ => {}
    }
}
