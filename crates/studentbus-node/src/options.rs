//! Run-loop options derived from the loaded configuration

use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;
use studentbus_config::{StudentbusConfig, TransportSection};
use studentbus_transports::TransportConfig;

use crate::error::NodeError;

/// Which side of the PUB/SUB pair this process plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Read roster files and publish them
    Server,
    /// Subscribe and print received rosters
    Client,
}

/// Publisher settings
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub data_dir: PathBuf,
    pub publish_interval: Duration,
    pub warmup: Duration,
    pub reload_each_cycle: bool,
    pub transport: TransportConfig,
}

impl ServerOptions {
    pub fn new(url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport: TransportConfig::new(url),
            data_dir: data_dir.into(),
            publish_interval: Duration::from_secs(5),
            warmup: Duration::from_millis(100),
            reload_each_cycle: false,
        }
    }

    /// # Errors
    ///
    /// `NodeError::MissingDataDir` when no roster directory is configured
    pub fn from_config(config: &StudentbusConfig) -> Result<Self, NodeError> {
        let data_dir = config
            .server
            .data_dir
            .clone()
            .ok_or(NodeError::MissingDataDir)?;

        Ok(Self {
            data_dir,
            publish_interval: config.server.publish_interval(),
            warmup: config.server.warmup(),
            reload_each_cycle: config.server.reload_each_cycle,
            transport: transport_config(&config.server.url, &config.transport),
        })
    }

    /// Endpoint the PUB socket binds
    pub fn url(&self) -> &str {
        &self.transport.address
    }
}

/// Subscriber settings
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub poll_timeout: Duration,
    pub max_batches: Option<u64>,
    pub transport: TransportConfig,
}

impl ClientOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            transport: TransportConfig::new(url),
            poll_timeout: Duration::from_millis(500),
            max_batches: None,
        }
    }

    pub fn from_config(config: &StudentbusConfig) -> Self {
        Self {
            poll_timeout: config.client.poll_timeout(),
            max_batches: config.client.max_batches,
            transport: transport_config(&config.client.url, &config.transport),
        }
    }

    /// Endpoint the SUB socket connects to
    pub fn url(&self) -> &str {
        &self.transport.address
    }
}

fn transport_config(url: &str, section: &TransportSection) -> TransportConfig {
    TransportConfig::new(url)
        .with_send_hwm(section.send_hwm)
        .with_recv_hwm(section.recv_hwm)
        .with_max_message_size(section.max_message_size)
}
