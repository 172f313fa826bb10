//! Message and byte counters shared by socket implementations

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters backing [`crate::traits::TransportStats`]
#[derive(Debug, Default)]
pub struct TransportCounters {
    messages_sent: AtomicU64,
    messages_received: AtomicU64,
    bytes_sent: AtomicU64,
    bytes_received: AtomicU64,
}

impl TransportCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_sent(&self, bytes: usize) {
        self.messages_sent.fetch_add(1, Ordering::Relaxed);
        self.bytes_sent.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub fn record_received(&self, bytes: usize) {
        self.messages_received.fetch_add(1, Ordering::Relaxed);
        self.bytes_received
            .fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub fn messages_sent(&self) -> u64 {
        self.messages_sent.load(Ordering::Relaxed)
    }

    pub fn messages_received(&self) -> u64 {
        self.messages_received.load(Ordering::Relaxed)
    }

    pub fn bytes_sent(&self) -> u64 {
        self.bytes_sent.load(Ordering::Relaxed)
    }

    pub fn bytes_received(&self) -> u64 {
        self.bytes_received.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let counters = TransportCounters::new();
        counters.record_sent(10);
        counters.record_sent(5);
        counters.record_received(7);

        assert_eq!(counters.messages_sent(), 2);
        assert_eq!(counters.bytes_sent(), 15);
        assert_eq!(counters.messages_received(), 1);
        assert_eq!(counters.bytes_received(), 7);
    }
}
