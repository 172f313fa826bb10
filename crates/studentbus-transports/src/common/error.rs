//! Common error types for all transports

/// Result type alias for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport-agnostic error type
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to bind server socket
    #[error("Bind failed: {0}")]
    BindFailed(String),

    /// Failed to connect client socket
    #[error("Connect failed: {0}")]
    ConnectFailed(String),

    /// Failed to send message
    #[error("Send failed: {0}")]
    SendFailed(String),

    /// Failed to receive message
    #[error("Receive failed: {0}")]
    ReceiveFailed(String),

    /// Timeout occurred
    #[error("Operation timed out")]
    Timeout,

    /// A blocking call was interrupted by a signal
    #[error("Operation interrupted")]
    Interrupted,

    /// Transport is not running
    #[error("Transport is not running")]
    NotRunning,

    /// Transport is already running
    #[error("Transport is already running")]
    AlreadyRunning,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Message too large
    #[error("Message too large: {size} bytes (max: {max_size})")]
    MessageTooLarge { size: usize, max_size: usize },

    /// Transport-specific error
    #[cfg(any(feature = "zmq-server", feature = "zmq-client"))]
    #[error("ZMQ error: {0}")]
    Zmq(zmq::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransportError {
    /// True for errors a polling loop should simply retry
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// True when a signal cut a blocking call short (EINTR)
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

#[cfg(any(feature = "zmq-server", feature = "zmq-client"))]
impl From<zmq::Error> for TransportError {
    fn from(err: zmq::Error) -> Self {
        match err {
            zmq::Error::EAGAIN => Self::Timeout,
            zmq::Error::EINTR => Self::Interrupted,
            _ => Self::Zmq(err),
        }
    }
}
