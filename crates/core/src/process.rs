// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process liveness probing and pid-file reading.
//!
//! There is no central registry of daemon processes: liveness is decided by
//! delivering a zero-effect signal to the pid recorded on disk. A recycled
//! pid (an unrelated process that took the number after a crash) is
//! indistinguishable from the daemon; nothing here guards against that.

use std::fs;
use std::io;
use std::path::Path;

/// Capability to check whether a pid refers to a live process.
///
/// Kept as a trait so lifecycle code can be exercised against a fake in
/// tests instead of real processes.
pub trait LivenessProbe {
    fn is_alive(&self, pid: u32) -> bool;
}

/// Probe backed by signal delivery (`kill(pid, 0)` semantics).
#[derive(Debug, Default, Clone, Copy)]
pub struct SignalProbe;

#[cfg(unix)]
impl LivenessProbe for SignalProbe {
    fn is_alive(&self, pid: u32) -> bool {
        let Ok(pid) = i32::try_from(pid) else {
            return false;
        };
        nix::sys::signal::kill(nix::unistd::Pid::from_raw(pid), None).is_ok()
    }
}

#[cfg(not(unix))]
impl LivenessProbe for SignalProbe {
    fn is_alive(&self, _pid: u32) -> bool {
        false
    }
}

/// Send SIGTERM to a process, tolerating "no such process".
///
/// The target may exit between the liveness check and the signal; that is
/// not an error for callers that only want the process gone.
#[cfg(unix)]
pub fn terminate(pid: u32) -> io::Result<()> {
    use nix::errno::Errno;
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let pid = i32::try_from(pid)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "pid out of range"))?;

    match kill(Pid::from_raw(pid), Signal::SIGTERM) {
        Ok(()) | Err(Errno::ESRCH) => Ok(()),
        Err(errno) => Err(io::Error::from_raw_os_error(errno as i32)),
    }
}

#[cfg(not(unix))]
pub fn terminate(_pid: u32) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "process termination is only supported on unix",
    ))
}

/// Read a pid from a pid file.
///
/// Returns `None` when the file is absent, unreadable, or does not hold a
/// positive integer; a stale or mangled pid file is an expected state, not
/// an error.
pub fn read_pid_file(pid_path: &Path) -> Option<u32> {
    let raw = fs::read_to_string(pid_path).ok()?;
    let pid: u32 = raw.trim().parse().ok()?;
    (pid > 0).then_some(pid)
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
