// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! msgd - The msg daemon.
//!
//! Owns the Slack connection and listens on a Unix socket for IPC from
//! `msg` CLI processes. Runtime state (socket, pid file, log) lives in the
//! runtime directory (~/.msg by default).
//!
//! Usage:
//!   msgd [--dir <path>]
//!
//! Exit codes: 0 after a signal-triggered shutdown, 1 on a fault.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod env;
mod notifier;
mod server;
mod shutdown;

use msg_core::RuntimePaths;
use shutdown::ShutdownState;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let paths = RuntimePaths::resolve(parse_base_dir(&args));

    // The log file lives inside the runtime dir, so create it before
    // logging is up; failures fall back to stderr logging below.
    let _ = msg_core::ensure_runtime_dir(&paths);
    setup_logging(&paths.dir.join("daemon.log"));

    tracing::info!("msgd starting, dir={}", paths.dir.display());

    let state = Arc::new(ShutdownState::new());
    shutdown::install_panic_hook(Arc::clone(&state), paths.clone());

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to start runtime: {e}");
            eprintln!("msgd: failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(server::run(paths, state)) {
        tracing::error!("msgd failed: {e}");
        eprintln!("msgd: {e}");
        std::process::exit(1);
    }
}

fn parse_base_dir(args: &[String]) -> PathBuf {
    for i in 0..args.len() {
        if args[i] == "--dir" {
            if let Some(dir) = args.get(i + 1) {
                return PathBuf::from(dir);
            }
        }
    }
    if let Some(dir) = env::base_dir() {
        return dir;
    }
    RuntimePaths::default_base_dir()
}

fn setup_logging(log_path: &Path) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Try to open the log file, fall back to stderr
    if let Ok(file) = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
