// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use tempfile::tempdir;
use yare::parameterized;

use super::*;

#[test]
fn own_process_is_alive() {
    assert!(SignalProbe.is_alive(std::process::id()));
}

#[test]
fn improbable_pid_is_dead() {
    // Linux caps pids well below this.
    assert!(!SignalProbe.is_alive(4_000_000));
}

#[test]
fn terminate_tolerates_missing_process() {
    terminate(4_000_000).unwrap();
}

#[test]
fn read_pid_file_parses_trimmed_integer() {
    let temp = tempdir().unwrap();
    let pid_path = temp.path().join("msgd.pid");
    fs::write(&pid_path, "12345\n").unwrap();

    assert_eq!(read_pid_file(&pid_path), Some(12345));
}

#[test]
fn read_pid_file_absent_is_none() {
    let temp = tempdir().unwrap();
    assert_eq!(read_pid_file(&temp.path().join("msgd.pid")), None);
}

#[parameterized(
    empty = { "" },
    garbage = { "not-a-pid" },
    zero = { "0" },
    negative = { "-5" },
    trailing_junk = { "123abc" },
)]
fn read_pid_file_rejects_invalid_contents(contents: &str) {
    let temp = tempdir().unwrap();
    let pid_path = temp.path().join("msgd.pid");
    fs::write(&pid_path, contents).unwrap();

    assert_eq!(read_pid_file(&pid_path), None);
}
