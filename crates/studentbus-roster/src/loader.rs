// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Directory loader
//!
//! Merges every `*.txt` roster file in one directory (not recursive) into a
//! single [`Roster`]. Files are visited in sorted path order so that the
//! record kept for a duplicated student does not depend on the filesystem.

use crate::error::LoadError;
use crate::parse::parse_line;
use crate::roster::Roster;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Roster file extension (case-sensitive)
pub const ROSTER_EXTENSION: &str = "txt";

/// Outcome of a directory scan
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub roster: Roster,
    /// Roster files that were read
    pub files_scanned: usize,
    /// Roster files that could not be read
    pub files_skipped: usize,
    pub lines_accepted: usize,
    pub lines_rejected: usize,
    /// Valid lines describing a student already in the roster
    pub duplicates: usize,
}

/// Load and merge every roster file in `dir`
///
/// # Errors
///
/// Returns `LoadError::Directory` if the directory itself cannot be listed.
/// Unreadable files and malformed lines are logged and counted instead.
pub fn load_directory(dir: &Path) -> Result<LoadReport, LoadError> {
    let dir_error = |source| LoadError::Directory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(dir_error)? {
        let path = entry.map_err(dir_error)?.path();
        // Follows symlinks
        let is_file = fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false);
        if is_file && path.extension().and_then(|e| e.to_str()) == Some(ROSTER_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();

    let mut report = LoadReport::default();
    for path in &files {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Could not read roster file {}: {}", path.display(), e);
                report.files_skipped += 1;
                continue;
            }
        };
        report.files_scanned += 1;

        let content = String::from_utf8_lossy(&bytes);
        merge_lines(path, &content, &mut report);
    }

    debug!(
        "Scanned {} roster files in {}: {} accepted, {} rejected, {} duplicates",
        report.files_scanned,
        dir.display(),
        report.lines_accepted,
        report.lines_rejected,
        report.duplicates
    );

    Ok(report)
}

fn merge_lines(path: &Path, content: &str, report: &mut LoadReport) {
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(student) => {
                report.lines_accepted += 1;
                if !report.roster.insert(student) {
                    report.duplicates += 1;
                }
            }
            Err(e) => {
                report.lines_rejected += 1;
                warn!(
                    "Rejected {}:{}: {} ({:?})",
                    path.display(),
                    index + 1,
                    e,
                    line
                );
            }
        }
    }
}
