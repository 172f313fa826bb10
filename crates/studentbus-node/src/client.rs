// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Roster subscriber
//!
//! Connects a SUB socket with an empty subscription, decodes each frame as a
//! JSON student batch, sorts it by name and hands it to a [`BatchSink`].
//! Frames that fail to decode are logged and skipped; the loop keeps going.

use std::sync::Arc;
use studentbus_roster::{codec, display, Student};
use studentbus_transports::prelude::*;
use tracing::{debug, info, warn};

use crate::error::NodeError;
use crate::options::ClientOptions;
use crate::shutdown::ShutdownSignal;

/// Receives every decoded, sorted batch
pub trait BatchSink {
    fn handle_batch(&mut self, students: &[Student]);
}

impl<F> BatchSink for F
where
    F: FnMut(&[Student]),
{
    fn handle_batch(&mut self, students: &[Student]) {
        self(students)
    }
}

/// Totals reported when the client stops
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSummary {
    pub batches_received: u64,
    pub batches_rejected: u64,
    /// Students in the last accepted batch
    pub students_last: usize,
}

/// Connect, subscribe and receive until shutdown or `max_batches`
pub fn run_client<S>(
    options: &ClientOptions,
    shutdown: &ShutdownSignal,
    sink: &mut S,
) -> Result<ClientSummary, NodeError>
where
    S: BatchSink + ?Sized,
{
    let context = Arc::new(zmq::Context::new());
    let mut subscriber = ZmqSub::new(context, ClientConfig::from(options.transport.clone()))?;
    subscriber.start()?;
    subscriber.subscribe(b"")?;
    info!("Client connected to {}", options.url());

    let result = receive_loop(&subscriber, options, shutdown, sink);

    subscriber.stop()?;
    result
}

/// Receive loop over any [`Subscriber`]
pub fn receive_loop<T, S>(
    subscriber: &T,
    options: &ClientOptions,
    shutdown: &ShutdownSignal,
    sink: &mut S,
) -> Result<ClientSummary, NodeError>
where
    T: Subscriber + ?Sized,
    S: BatchSink + ?Sized,
{
    let timeout_ms = options.poll_timeout.as_millis().max(1) as u64;
    let mut summary = ClientSummary::default();

    while !shutdown.is_triggered() {
        if let Some(max) = options.max_batches {
            if summary.batches_received >= max {
                break;
            }
        }

        let (_topic, payload) = match subscriber.receive_timeout(timeout_ms) {
            Ok(frame) => frame,
            // A signal (Ctrl+C) interrupts the poll; the loop head re-checks shutdown
            Err(e) if e.is_timeout() || e.is_interrupted() => continue,
            Err(e) => return Err(e.into()),
        };

        info!("Received new data batch ({} bytes).", payload.len());

        let mut students = match codec::decode_batch(&payload) {
            Ok(students) => students,
            Err(e) => {
                warn!("Discarding undecodable batch: {}", e);
                summary.batches_rejected += 1;
                continue;
            }
        };

        display::sort_for_display(&mut students);
        sink.handle_batch(&students);

        summary.batches_received += 1;
        summary.students_last = students.len();
    }

    debug!(
        "Subscriber stopped: {} batches accepted, {} rejected",
        summary.batches_received, summary.batches_rejected
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Subscriber that replays queued frames, then times out
    #[derive(Default)]
    struct ScriptedSubscriber {
        frames: Mutex<VecDeque<Vec<u8>>>,
    }

    impl ScriptedSubscriber {
        fn with_frames(frames: Vec<Vec<u8>>) -> Self {
            Self {
                frames: Mutex::new(frames.into()),
            }
        }
    }

    impl Transport for ScriptedSubscriber {
        fn start(&mut self) -> TransportResult<()> {
            Ok(())
        }
        fn stop(&mut self) -> TransportResult<()> {
            Ok(())
        }
        fn is_running(&self) -> bool {
            true
        }
        fn transport_type(&self) -> &str {
            "scripted"
        }
    }

    impl Subscriber for ScriptedSubscriber {
        fn subscribe(&mut self, _topic: &[u8]) -> TransportResult<()> {
            Ok(())
        }
        fn unsubscribe(&mut self, _topic: &[u8]) -> TransportResult<()> {
            Ok(())
        }
        fn receive(&self) -> TransportResult<(Vec<u8>, Vec<u8>)> {
            self.receive_timeout(0)
        }
        fn receive_timeout(&self, _timeout_ms: u64) -> TransportResult<(Vec<u8>, Vec<u8>)> {
            match self.frames.lock().unwrap().pop_front() {
                Some(frame) => Ok((Vec::new(), frame)),
                None => {
                    std::thread::sleep(std::time::Duration::from_millis(5));
                    Err(TransportError::Timeout)
                }
            }
        }
    }

    fn student(id: u16, fio: &str, d: u32, m: u32, y: i32) -> Student {
        Student::new(id, fio, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn options(max_batches: Option<u64>) -> ClientOptions {
        let mut options = ClientOptions::new("inproc://test");
        options.poll_timeout = std::time::Duration::from_millis(10);
        options.max_batches = max_batches;
        options
    }

    #[test]
    fn test_batches_are_sorted_before_sink() {
        let batch = codec::encode_batch(&[
            student(2, "Zed Zack", 1, 1, 2000),
            student(1, "Abe Adam", 2, 2, 2001),
        ])
        .unwrap();
        let subscriber = ScriptedSubscriber::with_frames(vec![batch]);

        let mut seen: Vec<Vec<String>> = Vec::new();
        let mut sink = |students: &[Student]| {
            seen.push(students.iter().map(|s| s.fio.clone()).collect());
        };

        let summary =
            receive_loop(&subscriber, &options(Some(1)), &ShutdownSignal::new(), &mut sink)
                .unwrap();

        assert_eq!(summary.batches_received, 1);
        assert_eq!(summary.students_last, 2);
        assert_eq!(seen, vec![vec!["Abe Adam".to_string(), "Zed Zack".to_string()]]);
    }

    #[test]
    fn test_bad_frames_are_skipped() {
        let good = codec::encode_batch(&[student(7, "Kim Lee", 3, 4, 1999)]).unwrap();
        let subscriber = ScriptedSubscriber::with_frames(vec![
            b"not json".to_vec(),
            br#"[{"id":1,"fio":"X","birth_date":"31.02.2000"}]"#.to_vec(),
            good,
        ]);

        let mut count = 0usize;
        let mut sink = |students: &[Student]| count += students.len();

        let summary =
            receive_loop(&subscriber, &options(Some(1)), &ShutdownSignal::new(), &mut sink)
                .unwrap();

        assert_eq!(summary.batches_rejected, 2);
        assert_eq!(summary.batches_received, 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_empty_batch_is_delivered() {
        let subscriber = ScriptedSubscriber::with_frames(vec![b"[]".to_vec()]);
        let mut calls = 0usize;
        let mut sink = |_: &[Student]| calls += 1;

        let summary =
            receive_loop(&subscriber, &options(Some(1)), &ShutdownSignal::new(), &mut sink)
                .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(summary.students_last, 0);
    }

    #[test]
    fn test_shutdown_stops_idle_loop() {
        let subscriber = ScriptedSubscriber::default();
        let shutdown = ShutdownSignal::new();
        let trigger = shutdown.clone();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(50));
            trigger.trigger();
        });

        let mut calls = 0usize;
        let mut sink = |_: &[Student]| calls += 1;
        let summary = receive_loop(&subscriber, &options(None), &shutdown, &mut sink).unwrap();
        handle.join().unwrap();

        assert_eq!(calls, 0);
        assert_eq!(summary, ClientSummary::default());
    }

    /// Subscriber whose every poll is cut short by a signal
    struct SignalledSubscriber {
        shutdown: ShutdownSignal,
        polls: Mutex<u32>,
    }

    impl Transport for SignalledSubscriber {
        fn start(&mut self) -> TransportResult<()> {
            Ok(())
        }
        fn stop(&mut self) -> TransportResult<()> {
            Ok(())
        }
        fn is_running(&self) -> bool {
            true
        }
        fn transport_type(&self) -> &str {
            "signalled"
        }
    }

    impl Subscriber for SignalledSubscriber {
        fn subscribe(&mut self, _topic: &[u8]) -> TransportResult<()> {
            Ok(())
        }
        fn unsubscribe(&mut self, _topic: &[u8]) -> TransportResult<()> {
            Ok(())
        }
        fn receive(&self) -> TransportResult<(Vec<u8>, Vec<u8>)> {
            self.receive_timeout(0)
        }
        fn receive_timeout(&self, _timeout_ms: u64) -> TransportResult<(Vec<u8>, Vec<u8>)> {
            let mut polls = self.polls.lock().unwrap();
            *polls += 1;
            // The Ctrl+C handler sets the flag while the poll is interrupted
            if *polls == 2 {
                self.shutdown.trigger();
            }
            Err(TransportError::Interrupted)
        }
    }

    #[test]
    fn test_interrupted_poll_ends_in_clean_shutdown() {
        let shutdown = ShutdownSignal::new();
        let subscriber = SignalledSubscriber {
            shutdown: shutdown.clone(),
            polls: Mutex::new(0),
        };

        let mut calls = 0usize;
        let mut sink = |_: &[Student]| calls += 1;
        let summary = receive_loop(&subscriber, &options(None), &shutdown, &mut sink).unwrap();

        assert_eq!(*subscriber.polls.lock().unwrap(), 2);
        assert_eq!(calls, 0);
        assert_eq!(summary, ClientSummary::default());
    }

    #[test]
    fn test_non_timeout_error_propagates() {
        struct Broken;
        impl Transport for Broken {
            fn start(&mut self) -> TransportResult<()> {
                Ok(())
            }
            fn stop(&mut self) -> TransportResult<()> {
                Ok(())
            }
            fn is_running(&self) -> bool {
                false
            }
            fn transport_type(&self) -> &str {
                "broken"
            }
        }
        impl Subscriber for Broken {
            fn subscribe(&mut self, _topic: &[u8]) -> TransportResult<()> {
                Ok(())
            }
            fn unsubscribe(&mut self, _topic: &[u8]) -> TransportResult<()> {
                Ok(())
            }
            fn receive(&self) -> TransportResult<(Vec<u8>, Vec<u8>)> {
                Err(TransportError::NotRunning)
            }
            fn receive_timeout(&self, _timeout_ms: u64) -> TransportResult<(Vec<u8>, Vec<u8>)> {
                Err(TransportError::NotRunning)
            }
        }

        let mut sink = |_: &[Student]| {};
        let result = receive_loop(&Broken, &options(None), &ShutdownSignal::new(), &mut sink);
        assert!(matches!(
            result,
            Err(NodeError::Transport(TransportError::NotRunning))
        ));
    }
}
