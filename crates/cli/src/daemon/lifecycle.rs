// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: detect, spawn, stop.
//!
//! There is no lock around the pid and socket files. Liveness is decided by
//! probing the recorded pid, and stale files are an expected state that
//! every reader tolerates.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use msg_core::{
    ensure_runtime_dir, read_pid_file, terminate, Error, LivenessProbe, Result, RuntimePaths,
    SignalProbe,
};
use msg_ipc::DaemonRequest;

use super::client;
use crate::env;

/// Interval between liveness/readiness polls.
const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// How long `start` waits for the daemon to answer a ping.
const START_TIMEOUT: Duration = Duration::from_secs(5);
/// How long `stop` waits for the process to exit.
const STOP_TIMEOUT: Duration = Duration::from_secs(3);

/// What the pid file and a liveness probe say about the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonStatus {
    pub running: bool,
    /// The recorded pid, kept even when the probe says the process is dead.
    pub pid: Option<u32>,
}

/// Check whether a daemon is running, via the pid file and a signal probe.
pub fn status(paths: &RuntimePaths) -> DaemonStatus {
    status_with_probe(paths, &SignalProbe)
}

pub fn status_with_probe(paths: &RuntimePaths, probe: &dyn LivenessProbe) -> DaemonStatus {
    match read_pid_file(&paths.pid_path) {
        None => DaemonStatus {
            running: false,
            pid: None,
        },
        Some(pid) => DaemonStatus {
            running: probe.is_alive(pid),
            pid: Some(pid),
        },
    }
}

/// Ensure a daemon is running. Idempotent.
///
/// Spawns a detached msgd and polls it with pings until it answers or the
/// deadline passes. The poll loop, not the spawn itself, is the startup
/// synchronization: two concurrent callers may both spawn, the bind loser
/// exits on its own, and both polls succeed against the winner.
pub fn start(paths: &RuntimePaths) -> Result<()> {
    if status(paths).running {
        return Ok(());
    }

    ensure_runtime_dir(paths)?;
    spawn_daemon(paths)?;
    wait_for_daemon(paths, START_TIMEOUT)
}

/// Stop the daemon. Returns `false` when there was nothing to stop.
///
/// The socket and pid files are removed unconditionally afterwards: the
/// daemon may have died without running its own cleanup.
pub fn stop(paths: &RuntimePaths) -> Result<bool> {
    let Some(pid) = read_pid_file(&paths.pid_path) else {
        remove_runtime_files(paths);
        return Ok(false);
    };

    terminate(pid)?;
    wait_for_exit(pid, STOP_TIMEOUT);
    remove_runtime_files(paths);

    Ok(true)
}

/// Launch msgd detached: null stdio, no wait on the child.
fn spawn_daemon(paths: &RuntimePaths) -> Result<()> {
    let binary = find_daemon_binary();

    Command::new(&binary)
        .arg("--dir")
        .arg(&paths.dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(|e| {
            Error::DaemonStartFailed(format!("failed to launch {}: {e}", binary.display()))
        })
}

/// Find the msgd binary.
fn find_daemon_binary() -> PathBuf {
    // 1. Check MSG_DAEMON_BINARY env var
    if let Some(path) = env::daemon_binary() {
        return path;
    }

    // 2. Look next to the current executable
    if let Ok(exe) = std::env::current_exe() {
        let msgd = exe.with_file_name("msgd");
        if msgd.exists() {
            return msgd;
        }
    }

    // 3. Fall back to PATH
    PathBuf::from("msgd")
}

/// Poll with pings until the daemon responds or the deadline elapses.
///
/// Only "peer unreachable" keeps the loop going; any other failure while
/// polling propagates immediately.
fn wait_for_daemon(paths: &RuntimePaths, timeout: Duration) -> Result<()> {
    let deadline = Instant::now() + timeout;

    while Instant::now() < deadline {
        match client::send(paths, &DaemonRequest::Ping) {
            Ok(_) => return Ok(()),
            Err(e) if e.is_unreachable() => std::thread::sleep(POLL_INTERVAL),
            Err(e) => return Err(e),
        }
    }

    Err(Error::DaemonStartFailed(
        "timed out waiting for daemon startup".into(),
    ))
}

/// Poll liveness until the process is gone or the deadline elapses.
fn wait_for_exit(pid: u32, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;

    while Instant::now() < deadline {
        if !SignalProbe.is_alive(pid) {
            return true;
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    !SignalProbe.is_alive(pid)
}

/// Best-effort removal of the socket and pid files.
fn remove_runtime_files(paths: &RuntimePaths) {
    let _ = fs::remove_file(&paths.socket_path);
    let _ = fs::remove_file(&paths.pid_path);
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
