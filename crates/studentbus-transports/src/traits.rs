// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Transport trait definitions
//!
//! These traits define the common interface for the publish/subscribe
//! transports. The node run loops are written against them, not against
//! concrete sockets.

use crate::common::TransportResult;

/// Base transport trait - implemented by all transports
pub trait Transport: Send + Sync {
    /// Start the transport (bind or connect)
    fn start(&mut self) -> TransportResult<()>;

    /// Stop the transport and release the socket
    fn stop(&mut self) -> TransportResult<()>;

    /// Check if transport is running
    fn is_running(&self) -> bool;

    /// Get transport name/type
    fn transport_type(&self) -> &str;
}

/// Publish-Subscribe pattern (Publisher side)
///
/// Used for one-to-many broadcast of roster batches.
pub trait Publisher: Transport {
    /// Publish a two-frame message: `[topic, data]`
    fn publish(&self, topic: &[u8], data: &[u8]) -> TransportResult<()>;

    /// Publish a single-frame message
    fn publish_simple(&self, data: &[u8]) -> TransportResult<()>;
}

/// Publish-Subscribe pattern (Subscriber side)
pub trait Subscriber: Transport {
    /// Subscribe to a topic prefix (empty = everything)
    fn subscribe(&mut self, topic: &[u8]) -> TransportResult<()>;

    /// Unsubscribe from a topic prefix
    fn unsubscribe(&mut self, topic: &[u8]) -> TransportResult<()>;

    /// Receive a published message, blocking
    fn receive(&self) -> TransportResult<(Vec<u8>, Vec<u8>)>; // (topic, data)

    /// Receive with timeout. `TransportError::Timeout` when nothing arrived.
    fn receive_timeout(&self, timeout_ms: u64) -> TransportResult<(Vec<u8>, Vec<u8>)>;
}

/// Statistics tracking
///
/// For monitoring transport throughput.
pub trait TransportStats {
    /// Get total messages sent
    fn messages_sent(&self) -> u64;

    /// Get total messages received
    fn messages_received(&self) -> u64;

    /// Get total bytes sent
    fn bytes_sent(&self) -> u64;

    /// Get total bytes received
    fn bytes_received(&self) -> u64;
}
