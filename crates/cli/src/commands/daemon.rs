// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `msg daemon` - daemon management commands.
//!
//! Human-readable output goes to stderr; stdout stays reserved for the
//! JSON lines `msg noti` emits.

use msg_core::RuntimePaths;

use crate::cli::DaemonCommand;
use crate::daemon::lifecycle;

pub fn run(paths: &RuntimePaths, command: DaemonCommand) -> i32 {
    match command {
        DaemonCommand::Start => start(paths),
        DaemonCommand::Stop => stop(paths),
        DaemonCommand::Status => status(paths),
    }
}

fn start(paths: &RuntimePaths) -> i32 {
    match lifecycle::start(paths) {
        Ok(()) => {
            eprintln!("daemon started");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn stop(paths: &RuntimePaths) -> i32 {
    match lifecycle::stop(paths) {
        Ok(true) => {
            eprintln!("daemon stopped");
            0
        }
        Ok(false) => {
            eprintln!("daemon not running");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn status(paths: &RuntimePaths) -> i32 {
    let status = lifecycle::status(paths);
    match (status.running, status.pid) {
        (true, Some(pid)) => {
            eprintln!("daemon running (pid={pid})");
            0
        }
        _ => {
            eprintln!("daemon not running");
            1
        }
    }
}
