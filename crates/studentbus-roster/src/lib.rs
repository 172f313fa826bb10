// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # studentbus-roster
//!
//! Student roster model shared by the studentbus server and client.
//!
//! - [`parse`]: one roster line (`<id> <full name> <DD.MM.YYYY>`) into a [`Student`]
//! - [`loader`]: merge every `*.txt` file of a directory into a deduplicated [`Roster`]
//! - [`codec`]: JSON batch format carried over the wire
//! - [`display`]: sorted table rendering for the client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studentbus_roster::{codec, loader};
//!
//! let report = loader::load_directory("./students".as_ref())?;
//! let payload = codec::encode_batch(&report.roster.to_sorted_vec())?;
//! let students = codec::decode_batch(&payload)?;
//! print!("{}", studentbus_roster::display::render_table(&students));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod codec;
pub mod display;
pub mod error;
pub mod loader;
pub mod parse;
pub mod roster;
pub mod student;

pub use codec::{decode_batch, encode_batch};
pub use display::{render_table, sort_for_display};
pub use error::{CodecError, LoadError, RecordError};
pub use loader::{load_directory, LoadReport};
pub use parse::parse_line;
pub use roster::Roster;
pub use student::{parse_birth_date, Student, BIRTH_DATE_FORMAT};
