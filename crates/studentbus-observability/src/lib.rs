// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # studentbus-observability
//!
//! Console logging for the studentbus binaries, with per-crate debug flags
//! (`--debug-studentbus-roster`, `--debug-all`, `STUDENTBUS_DEBUG=...`).

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known studentbus crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "studentbus-config",
    "studentbus-node",
    "studentbus-roster",
    "studentbus-transports",
];
