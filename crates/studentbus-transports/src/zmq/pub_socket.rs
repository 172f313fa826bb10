//! ZMQ PUB pattern (server-side publish-subscribe)
//!
//! PUB sockets broadcast every message to all connected subscribers.
//! Subscribers that connect late miss earlier messages, which is why the
//! roster server republishes on an interval.

use crate::common::config::socket_int;
use crate::common::{ServerConfig, TransportCounters, TransportError, TransportResult};
use crate::traits::{Publisher, Transport, TransportStats};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

/// ZMQ PUB socket implementation (publisher)
pub struct ZmqPub {
    context: Arc<zmq::Context>,
    config: ServerConfig,
    socket: Arc<Mutex<Option<zmq::Socket>>>,
    running: Arc<Mutex<bool>>,
    counters: TransportCounters,
}

impl ZmqPub {
    /// Create a new PUB socket
    pub fn new(context: Arc<zmq::Context>, config: ServerConfig) -> TransportResult<Self> {
        config
            .base
            .validate()
            .map_err(TransportError::InvalidConfig)?;

        Ok(Self {
            context,
            config,
            socket: Arc::new(Mutex::new(None)),
            running: Arc::new(Mutex::new(false)),
            counters: TransportCounters::new(),
        })
    }

    /// Create with default context
    pub fn with_address(address: impl Into<String>) -> TransportResult<Self> {
        let context = Arc::new(zmq::Context::new());
        let config = ServerConfig::new(address);
        Self::new(context, config)
    }

    /// Endpoint this publisher binds to
    pub fn address(&self) -> &str {
        &self.config.base.address
    }

    fn check_size(&self, len: usize) -> TransportResult<()> {
        if let Some(max_size) = self.config.base.max_message_size {
            if len > max_size {
                return Err(TransportError::MessageTooLarge {
                    size: len,
                    max_size,
                });
            }
        }
        Ok(())
    }
}

impl Transport for ZmqPub {
    fn start(&mut self) -> TransportResult<()> {
        if *self.running.lock() {
            return Err(TransportError::AlreadyRunning);
        }

        let socket = self.context.socket(zmq::PUB)?;

        socket.set_linger(self.config.base.linger_ms()?)?;
        socket.set_sndhwm(socket_int("send_hwm", self.config.base.send_hwm)?)?;

        if let Some(timeout) = self.config.base.timeout {
            socket.set_sndtimeo(socket_int("timeout", timeout.as_millis())?)?;
        } else {
            socket.set_sndtimeo(-1)?; // Blocking
        }

        socket
            .bind(&self.config.base.address)
            .map_err(|e| {
                TransportError::BindFailed(format!("{}: {}", self.config.base.address, e))
            })?;

        *self.socket.lock() = Some(socket);
        *self.running.lock() = true;

        info!("[ZMQ-PUB] Listening on {}", self.config.base.address);

        Ok(())
    }

    fn stop(&mut self) -> TransportResult<()> {
        *self.running.lock() = false;
        *self.socket.lock() = None;
        debug!("[ZMQ-PUB] Stopped {}", self.config.base.address);
        Ok(())
    }

    fn is_running(&self) -> bool {
        *self.running.lock()
    }

    fn transport_type(&self) -> &str {
        "zmq-pub"
    }
}

impl Publisher for ZmqPub {
    fn publish(&self, topic: &[u8], data: &[u8]) -> TransportResult<()> {
        let sock_guard = self.socket.lock();
        let sock = sock_guard.as_ref().ok_or(TransportError::NotRunning)?;

        self.check_size(data.len())?;

        // Send multipart message: [topic, data]
        sock.send(topic, zmq::SNDMORE)
            .map_err(|e| TransportError::SendFailed(e.to_string()))?;
        sock.send(data, 0)
            .map_err(|e| TransportError::SendFailed(e.to_string()))?;

        self.counters.record_sent(topic.len() + data.len());
        Ok(())
    }

    fn publish_simple(&self, data: &[u8]) -> TransportResult<()> {
        let sock_guard = self.socket.lock();
        let sock = sock_guard.as_ref().ok_or(TransportError::NotRunning)?;

        self.check_size(data.len())?;

        sock.send(data, 0)
            .map_err(|e| TransportError::SendFailed(e.to_string()))?;

        self.counters.record_sent(data.len());
        Ok(())
    }
}

impl TransportStats for ZmqPub {
    fn messages_sent(&self) -> u64 {
        self.counters.messages_sent()
    }

    fn messages_received(&self) -> u64 {
        0
    }

    fn bytes_sent(&self) -> u64 {
        self.counters.bytes_sent()
    }

    fn bytes_received(&self) -> u64 {
        0
    }
}
