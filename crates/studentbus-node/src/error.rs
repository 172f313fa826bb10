//! Node error type

use studentbus_config::ConfigError;
use studentbus_roster::{CodecError, LoadError};
use studentbus_transports::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("roster load failed: {0}")]
    Load(#[from] LoadError),

    #[error("batch encoding failed: {0}")]
    Codec(#[from] CodecError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("directory required in server mode (use -d/--dir or server.data_dir)")]
    MissingDataDir,

    #[error("failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
