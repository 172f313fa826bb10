// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! studentbus node library
//!
//! The server and client run loops behind the `studentbus` binary, exported
//! for testing and embedding.

pub mod client;
pub mod error;
pub mod options;
pub mod server;
pub mod shutdown;

pub use client::{run_client, BatchSink, ClientSummary};
pub use error::NodeError;
pub use options::{ClientOptions, Mode, ServerOptions};
pub use server::{run_server, ServerSummary};
pub use shutdown::ShutdownSignal;
