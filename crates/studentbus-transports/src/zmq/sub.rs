//! ZMQ SUB pattern (client-side publish-subscribe)
//!
//! SUB sockets receive broadcast messages from a PUB server. Nothing is
//! delivered until at least one subscription (possibly empty) is set.

use crate::common::config::socket_int;
use crate::common::{ClientConfig, TransportCounters, TransportError, TransportResult};
use crate::traits::{Subscriber, Transport, TransportStats};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

/// ZMQ SUB socket implementation (subscriber)
pub struct ZmqSub {
    context: Arc<zmq::Context>,
    config: ClientConfig,
    socket: Arc<Mutex<Option<zmq::Socket>>>,
    running: Arc<Mutex<bool>>,
    counters: TransportCounters,
}

impl ZmqSub {
    /// Create a new SUB socket
    pub fn new(context: Arc<zmq::Context>, config: ClientConfig) -> TransportResult<Self> {
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
        let config = ClientConfig::new(address);
        Self::new(context, config)
    }

    /// Endpoint this subscriber connects to
    pub fn address(&self) -> &str {
        &self.config.base.address
    }
}

impl Transport for ZmqSub {
    fn start(&mut self) -> TransportResult<()> {
        if *self.running.lock() {
            return Err(TransportError::AlreadyRunning);
        }

        let socket = self.context.socket(zmq::SUB)?;

        socket.set_linger(self.config.base.linger_ms()?)?;
        socket.set_rcvhwm(socket_int("recv_hwm", self.config.base.recv_hwm)?)?;
        socket.set_reconnect_ivl(socket_int(
            "reconnect_interval",
            self.config.reconnect_interval.as_millis(),
        )?)?;
        if let Some(max_size) = self.config.base.max_message_size {
            let max_size = i64::try_from(max_size).map_err(|_| {
                TransportError::InvalidConfig(format!("max_message_size {} too large", max_size))
            })?;
            socket.set_maxmsgsize(max_size)?;
        }

        socket
            .connect(&self.config.base.address)
            .map_err(|e| {
                TransportError::ConnectFailed(format!("{}: {}", self.config.base.address, e))
            })?;

        *self.socket.lock() = Some(socket);
        *self.running.lock() = true;

        info!("[ZMQ-SUB] Connected to {}", self.config.base.address);

        Ok(())
    }

    fn stop(&mut self) -> TransportResult<()> {
        *self.running.lock() = false;
        *self.socket.lock() = None;
        debug!("[ZMQ-SUB] Stopped {}", self.config.base.address);
        Ok(())
    }

    fn is_running(&self) -> bool {
        *self.running.lock()
    }

    fn transport_type(&self) -> &str {
        "zmq-sub"
    }
}

impl Subscriber for ZmqSub {
    fn subscribe(&mut self, topic: &[u8]) -> TransportResult<()> {
        let sock_guard = self.socket.lock();
        let sock = sock_guard.as_ref().ok_or(TransportError::NotRunning)?;

        sock.set_subscribe(topic)?;

        Ok(())
    }

    fn unsubscribe(&mut self, topic: &[u8]) -> TransportResult<()> {
        let sock_guard = self.socket.lock();
        let sock = sock_guard.as_ref().ok_or(TransportError::NotRunning)?;

        sock.set_unsubscribe(topic)?;

        Ok(())
    }

    fn receive(&self) -> TransportResult<(Vec<u8>, Vec<u8>)> {
        self.receive_timeout(0) // 0 = blocking
    }

    fn receive_timeout(&self, timeout_ms: u64) -> TransportResult<(Vec<u8>, Vec<u8>)> {
        let sock_guard = self.socket.lock();
        let sock = sock_guard.as_ref().ok_or(TransportError::NotRunning)?;

        // Poll for messages if timeout specified
        if timeout_ms > 0 {
            let poll_items = &mut [sock.as_poll_item(zmq::POLLIN)];
            zmq::poll(poll_items, i64::try_from(timeout_ms).unwrap_or(i64::MAX))?;

            if !poll_items[0].is_readable() {
                return Err(TransportError::Timeout);
            }
        }

        let mut first = zmq::Message::new();
        sock.recv(&mut first, 0)
            .map_err(recv_error)?;

        if !sock.get_rcvmore()? {
            // Single-part message (no topic frame)
            self.counters.record_received(first.len());
            return Ok((Vec::new(), first.to_vec()));
        }

        let mut data_msg = zmq::Message::new();
        sock.recv(&mut data_msg, 0)
            .map_err(recv_error)?;

        // Drain any trailing frames so the next receive starts on a boundary
        while sock.get_rcvmore()? {
            let mut extra = zmq::Message::new();
            sock.recv(&mut extra, 0)
                .map_err(recv_error)?;
        }

        self.counters.record_received(first.len() + data_msg.len());
        Ok((first.to_vec(), data_msg.to_vec()))
    }
}

fn recv_error(err: zmq::Error) -> TransportError {
    match err {
        zmq::Error::EINTR => TransportError::Interrupted,
        other => TransportError::ReceiveFailed(other.to_string()),
    }
}

impl TransportStats for ZmqSub {
    fn messages_sent(&self) -> u64 {
        0
    }

    fn messages_received(&self) -> u64 {
        self.counters.messages_received()
    }

    fn bytes_sent(&self) -> u64 {
        0
    }

    fn bytes_received(&self) -> u64 {
        self.counters.bytes_received()
    }
}
