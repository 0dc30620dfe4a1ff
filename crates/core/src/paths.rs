// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Well-known runtime file paths.
//!
//! Everything the CLI and daemon share on disk lives in one runtime
//! directory (default `~/.msg`): the config file, the Unix socket, and the
//! pid file. Paths are derived once per process from a base directory and
//! never change afterwards.

use std::io;
use std::path::{Path, PathBuf};

/// Directory name under the home directory.
const MSG_DIR_NAME: &str = ".msg";
/// Config filename within the runtime directory.
const CONFIG_FILE_NAME: &str = "config.toml";
/// Socket filename within the runtime directory.
const SOCKET_FILE_NAME: &str = "msgd.sock";
/// PID filename within the runtime directory.
const PID_FILE_NAME: &str = "msgd.pid";

/// The fixed set of filesystem paths used at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimePaths {
    /// The runtime directory itself.
    pub dir: PathBuf,
    /// Config file consumed at daemon startup.
    pub config_path: PathBuf,
    /// Unix socket the daemon listens on.
    pub socket_path: PathBuf,
    /// Text file holding the daemon's process id.
    pub pid_path: PathBuf,
}

impl RuntimePaths {
    /// Derive all runtime paths from a base directory.
    ///
    /// Pure path joining: no validation, no filesystem access.
    pub fn resolve(base_dir: impl Into<PathBuf>) -> Self {
        let dir = base_dir.into();
        RuntimePaths {
            config_path: dir.join(CONFIG_FILE_NAME),
            socket_path: dir.join(SOCKET_FILE_NAME),
            pid_path: dir.join(PID_FILE_NAME),
            dir,
        }
    }

    /// The default base directory: `~/.msg`.
    pub fn default_base_dir() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(MSG_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(MSG_DIR_NAME))
    }
}

/// Create the runtime directory (recursively) with owner-only permissions.
///
/// Idempotent: an existing directory is left as-is.
pub fn ensure_runtime_dir(paths: &RuntimePaths) -> io::Result<()> {
    create_private_dir(&paths.dir)
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true).mode(0o700);
    builder.create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
