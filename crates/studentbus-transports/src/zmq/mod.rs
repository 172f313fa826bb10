// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! ZMQ transport implementations
//!
//! Publish-Subscribe: PUB (server, binds) ↔ SUB (client, connects).
//!
//! ## Feature Flags
//!
//! - `zmq-server`: Enable the PUB socket
//! - `zmq-client`: Enable the SUB socket
//! - `zmq`: Enable both

#[cfg(feature = "zmq-server")]
pub mod pub_socket;

#[cfg(feature = "zmq-client")]
pub mod sub;

#[cfg(feature = "zmq-server")]
pub use pub_socket::ZmqPub;

#[cfg(feature = "zmq-client")]
pub use sub::ZmqSub;
