// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to a section of `studentbus.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default endpoint for both roles
pub const DEFAULT_URL: &str = "tcp://127.0.0.1:5555";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StudentbusConfig {
    pub server: ServerSection,
    pub client: ClientSection,
    pub transport: TransportSection,
    pub logging: LoggingSection,
}

/// `[server]`: publisher role
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSection {
    /// Endpoint the PUB socket binds to
    pub url: String,
    /// Directory holding `*.txt` roster files
    pub data_dir: Option<PathBuf>,
    /// Pause between two publishes
    pub publish_interval_ms: u64,
    /// Pause before each publish so freshly connected subscribers are ready
    pub warmup_ms: u64,
    /// Rescan `data_dir` before every publish
    pub reload_each_cycle: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            data_dir: None,
            publish_interval_ms: 5000,
            warmup_ms: 100,
            reload_each_cycle: false,
        }
    }
}

impl ServerSection {
    pub fn publish_interval(&self) -> Duration {
        Duration::from_millis(self.publish_interval_ms)
    }

    pub fn warmup(&self) -> Duration {
        Duration::from_millis(self.warmup_ms)
    }
}

/// `[client]`: subscriber role
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientSection {
    /// Endpoint the SUB socket connects to
    pub url: String,
    /// Receive poll timeout; shutdown is checked between polls
    pub poll_timeout_ms: u64,
    /// Stop after this many batches (None = run until interrupted)
    pub max_batches: Option<u64>,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            poll_timeout_ms: 500,
            max_batches: None,
        }
    }
}

impl ClientSection {
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }
}

/// `[transport]`: socket tuning shared by both roles
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransportSection {
    pub send_hwm: usize,
    pub recv_hwm: usize,
    pub max_message_size: usize,
}

impl Default for TransportSection {
    fn default() -> Self {
        Self {
            send_hwm: 1000,
            recv_hwm: 1000,
            max_message_size: 10 * 1024 * 1024,
        }
    }
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSection {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
