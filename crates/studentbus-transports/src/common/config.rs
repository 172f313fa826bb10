//! Common configuration types for transports

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{TransportError, TransportResult};

/// Address schemes understood by ZeroMQ
pub const SUPPORTED_SCHEMES: &[&str] = &["tcp://", "ipc://", "inproc://", "pgm://", "epgm://"];

/// Default endpoint shared by server and client
pub const DEFAULT_ADDRESS: &str = "tcp://127.0.0.1:5555";

/// Generic transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Address to bind (server) or connect (client)
    pub address: String,

    /// Timeout for blocking sends (None = infinite)
    pub timeout: Option<Duration>,

    /// High water mark for send buffer (0 = unlimited)
    pub send_hwm: usize,

    /// High water mark for receive buffer (0 = unlimited)
    pub recv_hwm: usize,

    /// Linger time on close (None = immediate)
    pub linger: Option<Duration>,

    /// Maximum message size (None = unlimited)
    pub max_message_size: Option<usize>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            timeout: Some(Duration::from_secs(1)),
            send_hwm: 1000,
            recv_hwm: 1000,
            linger: None,
            max_message_size: Some(10 * 1024 * 1024), // 10 MB default
        }
    }
}

impl TransportConfig {
    /// Create a new config with the given address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set no timeout (blocking)
    pub fn with_no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Set send high water mark
    pub fn with_send_hwm(mut self, hwm: usize) -> Self {
        self.send_hwm = hwm;
        self
    }

    /// Set receive high water mark
    pub fn with_recv_hwm(mut self, hwm: usize) -> Self {
        self.recv_hwm = hwm;
        self
    }

    /// Set linger time
    pub fn with_linger(mut self, linger: Duration) -> Self {
        self.linger = Some(linger);
        self
    }

    /// Set maximum message size
    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = Some(size);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.address.is_empty() {
            return Err("Address cannot be empty".to_string());
        }

        if !SUPPORTED_SCHEMES
            .iter()
            .any(|scheme| self.address.starts_with(scheme))
        {
            return Err(format!(
                "Address '{}' must start with one of: {}",
                self.address,
                SUPPORTED_SCHEMES.join(", ")
            ));
        }

        if let Some(max_size) = self.max_message_size {
            if max_size == 0 {
                return Err("Maximum message size must be greater than 0".to_string());
            }
        }

        Ok(())
    }

    /// Linger in milliseconds as ZeroMQ expects it
    pub(crate) fn linger_ms(&self) -> TransportResult<i32> {
        match self.linger {
            Some(linger) => socket_int("linger", linger.as_millis()),
            None => Ok(0),
        }
    }
}

/// Convert a configured value to the C `int` ZeroMQ socket options take
pub(crate) fn socket_int<T>(option: &str, value: T) -> TransportResult<i32>
where
    T: TryInto<i32> + Copy + std::fmt::Display,
{
    value.try_into().map_err(|_| {
        TransportError::InvalidConfig(format!(
            "{} value {} does not fit a socket option (max {})",
            option,
            value,
            i32::MAX
        ))
    })
}

/// Server-specific configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base transport config
    #[serde(flatten)]
    pub base: TransportConfig,
}

impl ServerConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            base: TransportConfig::new(address),
        }
    }
}

impl From<TransportConfig> for ServerConfig {
    fn from(base: TransportConfig) -> Self {
        Self { base }
    }
}

/// Client-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base transport config
    #[serde(flatten)]
    pub base: TransportConfig,

    /// Reconnect interval handed to ZeroMQ
    pub reconnect_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base: TransportConfig::default(),
            reconnect_interval: Duration::from_millis(100),
        }
    }
}

impl ClientConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            base: TransportConfig::new(address),
            ..Default::default()
        }
    }
}

impl From<TransportConfig> for ClientConfig {
    fn from(base: TransportConfig) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }
}
