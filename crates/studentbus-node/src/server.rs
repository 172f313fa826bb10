// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Roster publisher
//!
//! Binds a PUB socket, loads the roster directory and republishes the whole
//! roster as one JSON frame every interval. PUB/SUB drops messages sent
//! before a subscriber connects, so the periodic republish is what lets
//! clients join at any time.

use std::path::Path;
use std::sync::Arc;
use studentbus_roster::{codec, loader};
use studentbus_transports::prelude::*;
use tracing::{debug, info, warn};

use crate::error::NodeError;
use crate::options::ServerOptions;
use crate::shutdown::ShutdownSignal;

/// Totals reported when the server stops
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSummary {
    pub batches_published: u64,
    pub bytes_published: u64,
    /// Students in the last published batch
    pub students: usize,
}

/// Encoded roster ready to send
struct Batch {
    payload: Vec<u8>,
    students: usize,
}

fn load_batch(data_dir: &Path) -> Result<Batch, NodeError> {
    let report = loader::load_directory(data_dir)?;
    info!(
        "Total unique students found: {} ({} files, {} lines rejected)",
        report.roster.len(),
        report.files_scanned,
        report.lines_rejected
    );

    let students = report.roster.to_sorted_vec();
    Ok(Batch {
        payload: codec::encode_batch(&students)?,
        students: students.len(),
    })
}

/// Bind, load and publish until `shutdown` is triggered
pub fn run_server(
    options: &ServerOptions,
    shutdown: &ShutdownSignal,
) -> Result<ServerSummary, NodeError> {
    let context = Arc::new(zmq::Context::new());
    let mut publisher = ZmqPub::new(context, ServerConfig::from(options.transport.clone()))?;
    publisher.start()?;

    let result = serve(&publisher, options, shutdown);

    publisher.stop()?;
    result
}

/// Publish loop over any [`Publisher`]
pub fn serve<P>(
    publisher: &P,
    options: &ServerOptions,
    shutdown: &ShutdownSignal,
) -> Result<ServerSummary, NodeError>
where
    P: Publisher + ?Sized,
{
    let mut batch = load_batch(&options.data_dir)?;
    let mut summary = ServerSummary::default();

    loop {
        if !shutdown.wait(options.warmup) {
            break;
        }

        if options.reload_each_cycle && summary.batches_published > 0 {
            match load_batch(&options.data_dir) {
                Ok(fresh) => batch = fresh,
                Err(e) => warn!("Roster reload failed, republishing previous batch: {}", e),
            }
        }

        publisher.publish_simple(&batch.payload)?;
        summary.batches_published += 1;
        summary.bytes_published += batch.payload.len() as u64;
        summary.students = batch.students;

        info!(
            "Published student data ({} bytes). Waiting for next update...",
            batch.payload.len()
        );

        if !shutdown.wait(options.publish_interval) {
            break;
        }
    }

    debug!(
        "Publisher on {} stopped after {} batches",
        options.url(),
        summary.batches_published
    );
    Ok(summary)
}
