// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # studentbus
//!
//! Distributes student rosters over ZeroMQ PUB/SUB. A server reads every
//! `.txt` roster file in a directory, merges them into one deduplicated set
//! and republishes it as a JSON array on a fixed interval. Clients subscribe,
//! decode each batch and print it as a table sorted by name.
//!
//! ## Feature Flags
//!
//! - **`node`** (default): everything below plus the server/client run loops
//! - **`roster`**: student records, line parser, directory loader, JSON codec
//! - **`transports`**: ZMQ PUB/SUB sockets behind `Publisher`/`Subscriber`
//! - **`config`**: TOML configuration with environment and CLI overrides
//! - **`observability`**: `tracing` setup and per-crate debug flags
//!
//! ## Example
//!
//! ```rust,no_run
//! use studentbus::prelude::*;
//!
//! let options = ServerOptions::new("tcp://127.0.0.1:5555", "./students");
//! let shutdown = ShutdownSignal::new();
//! shutdown.install_ctrlc_handler()?;
//! run_server(&options, &shutdown)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(feature = "roster")]
pub use studentbus_roster as roster;

#[cfg(feature = "transports")]
pub use studentbus_transports as transports;

#[cfg(feature = "config")]
pub use studentbus_config as config;

#[cfg(feature = "observability")]
pub use studentbus_observability as observability;

#[cfg(feature = "node")]
pub use studentbus_node as node;

/// Prelude - commonly used types and functions
pub mod prelude {
    #[cfg(feature = "roster")]
    pub use crate::roster::{
        decode_batch, encode_batch, load_directory, parse_line, render_table, Roster, Student,
    };

    #[cfg(feature = "transports")]
    pub use crate::transports::{Publisher, Subscriber, Transport};

    #[cfg(feature = "config")]
    pub use crate::config::{load_config, StudentbusConfig};

    #[cfg(feature = "node")]
    pub use crate::node::{
        run_client, run_server, BatchSink, ClientOptions, ServerOptions, ShutdownSignal,
    };
}
