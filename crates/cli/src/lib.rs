// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! msgrs: Library behind the `msg` CLI.
//!
//! `msg noti <message>` relays a notification through the long-lived `msgd`
//! daemon, auto-starting it on first use. `msg daemon <start|stop|status>`
//! manages the daemon directly.

use std::path::PathBuf;

mod cli;
mod commands;
mod daemon;
mod env;

pub use cli::{Cli, Command, DaemonCommand};
pub use daemon::DaemonStatus;
pub use msg_core::{Error, Result};

use msg_core::RuntimePaths;

/// Run a parsed command, returning the process exit code.
pub fn run(cli: Cli) -> i32 {
    let paths = runtime_paths(cli.dir);
    match cli.command {
        Command::Noti { message } => commands::noti::run(&paths, &message.join(" ")),
        Command::Daemon { command } => commands::daemon::run(&paths, command),
    }
}

/// Resolve the runtime directory: `--dir` flag, then `MSG_DIR`, then `~/.msg`.
fn runtime_paths(dir_flag: Option<PathBuf>) -> RuntimePaths {
    let base = dir_flag
        .or_else(env::msg_dir)
        .unwrap_or_else(RuntimePaths::default_base_dir);
    RuntimePaths::resolve(base)
}
