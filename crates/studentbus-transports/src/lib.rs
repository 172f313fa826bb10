// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # studentbus-transports
//!
//! Transport abstraction layer for studentbus. Roster batches travel over a
//! ZeroMQ publish/subscribe pair, but the node crate only talks to the traits
//! in [`traits`], so the socket implementation can be swapped without
//! touching the run loops.
//!
//! ## Feature Flags
//!
//! - `zmq-server`: PUB socket ([`zmq::ZmqPub`])
//! - `zmq-client`: SUB socket ([`zmq::ZmqSub`])
//! - `zmq` (default): both
//!
//! ## Example: Publish-Subscribe
//!
//! ### Publisher (Server)
//!
//! ```no_run
//! use studentbus_transports::zmq::ZmqPub;
//! use studentbus_transports::traits::{Publisher, Transport};
//!
//! let mut publisher = ZmqPub::with_address("tcp://127.0.0.1:5555")?;
//! publisher.start()?;
//! publisher.publish_simple(br#"[{"id":1,"fio":"Doe Jane","birth_date":"01.02.2000"}]"#)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Subscriber (Client)
//!
//! ```no_run
//! use studentbus_transports::zmq::ZmqSub;
//! use studentbus_transports::traits::{Subscriber, Transport};
//!
//! let mut subscriber = ZmqSub::with_address("tcp://127.0.0.1:5555")?;
//! subscriber.start()?;
//! subscriber.subscribe(b"")?;
//!
//! let (_topic, batch) = subscriber.receive_timeout(500)?;
//! println!("received {} bytes", batch.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod common;
pub mod traits;

#[cfg(any(feature = "zmq-server", feature = "zmq-client"))]
pub mod zmq;

pub use common::{
    ClientConfig, ServerConfig, TransportConfig, TransportCounters, TransportError,
    TransportResult,
};

pub use traits::{Publisher, Subscriber, Transport, TransportStats};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::common::*;
    pub use crate::traits::*;

    #[cfg(feature = "zmq-server")]
    pub use crate::zmq::ZmqPub;

    #[cfg(feature = "zmq-client")]
    pub use crate::zmq::ZmqSub;
}
