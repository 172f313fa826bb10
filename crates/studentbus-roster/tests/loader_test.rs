// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for merging roster directories

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use studentbus_roster::{load_directory, LoadError, Student};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write fixture");
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_merge_and_deduplicate_across_files() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "a.txt",
        "1 Иванов Иван Иванович 01.02.2000\n2 Smith John 5.11.1998\n",
    );
    write(
        dir.path(),
        "b.txt",
        "9 Иванов Иван Иванович 01.02.2000\r\n3 Doe Jane 29.02.2000\r\n",
    );

    let report = load_directory(dir.path()).unwrap();

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.lines_accepted, 4);
    assert_eq!(report.lines_rejected, 0);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.roster.len(), 3);

    // a.txt is visited first, so its id is kept for the duplicate
    let ivanov = report
        .roster
        .iter()
        .find(|s| s.fio == "Иванов Иван Иванович")
        .unwrap();
    assert_eq!(ivanov.id, 1);
    let jane = Student::new(0, "Doe Jane", date(2000, 2, 29));
    assert!(report.roster.iter().any(|s| *s == jane));
}

#[test]
fn test_only_txt_files_are_read() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "students.txt", "1 Doe Jane 01.01.2000\n");
    write(dir.path(), "students.csv", "2 Roe Richard 01.01.2000\n");
    write(dir.path(), "OTHER.TXT", "3 Poe Edgar 01.01.2000\n");
    write(dir.path(), "notes", "4 Loe Lisa 01.01.2000\n");

    let nested = dir.path().join("nested.txt");
    fs::create_dir(&nested).unwrap();
    write(&nested, "inner.txt", "5 Moe Max 01.01.2000\n");

    let report = load_directory(dir.path()).unwrap();
    assert_eq!(report.files_scanned, 1);
    let names: Vec<String> = report.roster.to_sorted_vec().into_iter().map(|s| s.fio).collect();
    assert_eq!(names, vec!["Doe Jane"]);
}

#[test]
fn test_invalid_lines_are_counted_and_skipped() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "mixed.txt",
        "1 Doe Jane 01.01.2000\n\
         \n\
         garbage line\n\
         2 Roe Richard 31.04.2001\n\
         70000 Big Id 01.01.2000\n\
         3 Poe Edgar 19.01.1809\n",
    );

    let report = load_directory(dir.path()).unwrap();
    assert_eq!(report.lines_accepted, 2);
    assert_eq!(report.lines_rejected, 3);
    assert_eq!(report.roster.len(), 2);
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let dir = TempDir::new().unwrap();
    let mut bytes = b"1 Doe Jane 01.01.2000\n2 Bad ".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b" Name 01.01.2000\n");
    fs::write(dir.path().join("latin.txt"), bytes).unwrap();

    let report = load_directory(dir.path()).unwrap();
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.lines_accepted, 2);
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    let report = load_directory(dir.path()).unwrap();
    assert!(report.roster.is_empty());
    assert_eq!(report.files_scanned, 0);
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = load_directory(&missing).unwrap_err();
    match err {
        LoadError::Directory { path, .. } => assert_eq!(path, missing),
    }
}

#[cfg(unix)]
#[test]
fn test_symlinked_roster_file_is_read() {
    let source = TempDir::new().unwrap();
    write(source.path(), "real.roster", "1 Doe Jane 01.01.2000\n");

    let dir = TempDir::new().unwrap();
    std::os::unix::fs::symlink(source.path().join("real.roster"), dir.path().join("group.txt"))
        .unwrap();
    // Dangling links are skipped, not errors
    std::os::unix::fs::symlink(source.path().join("gone"), dir.path().join("stale.txt")).unwrap();

    let report = load_directory(dir.path()).unwrap();
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.roster.len(), 1);
}
