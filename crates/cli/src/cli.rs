// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Relay notifications to Slack through a background daemon.
#[derive(Parser, Debug)]
#[command(name = "msg", version, about)]
pub struct Cli {
    /// Override the runtime directory (default: ~/.msg)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a notification (words are joined with spaces)
    Noti {
        /// Message text
        message: Vec<String>,
    },
    /// Manage the background daemon
    Daemon {
        #[command(subcommand)]
        command: DaemonCommand,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonCommand {
    /// Start the daemon if it is not already running
    Start,
    /// Stop the daemon and clean up its runtime files
    Stop,
    /// Report whether the daemon is running
    Status,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
