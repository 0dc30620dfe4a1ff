// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Idempotent shutdown state machine.
//!
//! Every exit path (termination signal, panic) funnels through one
//! [`ShutdownState`]. A single compare-and-set on entry guarantees that the
//! cleanup sequence runs at most once no matter how many triggers fire.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use msg_core::RuntimePaths;

/// Lifecycle state values for the atomic state field.
pub const STATE_RUNNING: u8 = 0;
pub const STATE_SHUTTING_DOWN: u8 = 1;
pub const STATE_STOPPED: u8 = 2;

/// Shutdown state shared between the serve loop and the panic hook.
pub struct ShutdownState {
    state: AtomicU8,
}

impl ShutdownState {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(STATE_RUNNING),
        }
    }

    /// Get the current state.
    pub fn get(&self) -> u8 {
        self.state.load(Ordering::Acquire)
    }

    /// Claim the transition `Running -> ShuttingDown`.
    ///
    /// Returns `true` for exactly one caller; everyone else must leave the
    /// cleanup to the winner.
    pub fn begin(&self) -> bool {
        self.state
            .compare_exchange(
                STATE_RUNNING,
                STATE_SHUTTING_DOWN,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Mark cleanup complete.
    pub fn finish(&self) {
        self.state.store(STATE_STOPPED, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.get() == STATE_RUNNING
    }
}

impl Default for ShutdownState {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the socket and pid files, ignoring "does not exist".
pub fn remove_runtime_files(paths: &RuntimePaths) {
    let _ = std::fs::remove_file(&paths.socket_path);
    let _ = std::fs::remove_file(&paths.pid_path);
}

/// Route panics through the fault-shutdown path.
///
/// A panic anywhere in the process cleans up the on-disk state (best
/// effort, no notifier stop since the runtime may be gone) and exits with
/// code 1, distinguishing fault shutdown from the signal-triggered exit 0.
pub fn install_panic_hook(state: Arc<ShutdownState>, paths: RuntimePaths) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_hook(info);
        if state.begin() {
            remove_runtime_files(&paths);
            state.finish();
        }
        std::process::exit(1);
    }));
}

#[cfg(test)]
#[path = "shutdown_tests.rs"]
mod tests;
