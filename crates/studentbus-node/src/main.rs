// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

use studentbus_config::load_config;
use studentbus_node::{
    run_client, run_server, ClientOptions, Mode, ServerOptions, ShutdownSignal,
};
use studentbus_observability::{
    debug_flags_help, init_logging, parse_debug_flags, strip_debug_args, LoggingOptions,
};
use studentbus_roster::{render_table, Student};

/// Student roster publisher/subscriber over ZeroMQ PUB/SUB
#[derive(Parser, Debug)]
#[command(name = "studentbus", version, long_about = None, after_help = debug_flags_help())]
struct Args {
    /// Run as the roster publisher or as a subscriber
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Directory of .txt roster files (server mode)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Endpoint to bind (server) or connect to (client) [default: tcp://127.0.0.1:5555]
    #[arg(short, long)]
    url: Option<String>,

    /// Path to a studentbus.toml configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds between publishes (server mode)
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Rescan the directory before every publish (server mode)
    #[arg(long, default_value_t = false)]
    reload: bool,

    /// Exit after this many batches (client mode)
    #[arg(long)]
    max_batches: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    /// Dotted-key overrides for the config loader
    fn overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();

        if let Some(url) = &self.url {
            overrides.insert("server.url".to_string(), url.clone());
            overrides.insert("client.url".to_string(), url.clone());
        }
        if let Some(dir) = &self.dir {
            overrides.insert(
                "server.data_dir".to_string(),
                dir.to_string_lossy().into_owned(),
            );
        }
        if let Some(ms) = self.interval_ms {
            overrides.insert("server.publish_interval_ms".to_string(), ms.to_string());
        }
        if self.reload {
            overrides.insert("server.reload_each_cycle".to_string(), "true".to_string());
        }
        if let Some(n) = self.max_batches {
            overrides.insert("client.max_batches".to_string(), n.to_string());
        }
        if self.verbose {
            overrides.insert("logging.level".to_string(), "debug".to_string());
        }

        overrides
    }
}

fn main() -> Result<()> {
    let debug_flags = parse_debug_flags();
    let args = Args::parse_from(strip_debug_args(std::env::args()));

    let config = load_config(args.config.as_deref(), Some(&args.overrides()))
        .context("Failed to load configuration")?;

    init_logging(&LoggingOptions::new(
        config.logging.level.clone(),
        debug_flags,
    ))
    .context("Failed to initialize logging")?;

    let shutdown = ShutdownSignal::new();
    shutdown
        .install_ctrlc_handler()
        .context("Failed to install Ctrl+C handler")?;

    match args.mode {
        Mode::Server => {
            let options = ServerOptions::from_config(&config)?;
            info!(
                "Starting server on {} (directory: {})",
                options.url(),
                options.data_dir.display()
            );
            let summary = run_server(&options, &shutdown)
                .with_context(|| format!("Server on {} failed", options.url()))?;
            info!(
                "Published {} batches ({} bytes)",
                summary.batches_published, summary.bytes_published
            );
        }
        Mode::Client => {
            let options = ClientOptions::from_config(&config);
            info!("Starting client, connecting to {}", options.url());
            let mut print_table = |students: &[Student]| {
                print!("{}", render_table(students));
            };
            let summary = run_client(&options, &shutdown, &mut print_table)
                .with_context(|| format!("Client on {} failed", options.url()))?;
            info!(
                "Received {} batches ({} rejected)",
                summary.batches_received, summary.batches_rejected
            );
        }
    }

    info!("Application finished gracefully.");
    Ok(())
}
