// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here with
//! typed accessor functions. The variable name constants are generated by
//! `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `MSG_DIR` if set.
pub fn msg_dir() -> Option<PathBuf> {
    std::env::var(vars::MSG_DIR).ok().map(PathBuf::from)
}

/// Returns the value of `MSG_DAEMON_BINARY` if set.
pub fn daemon_binary() -> Option<PathBuf> {
    std::env::var(vars::MSG_DAEMON_BINARY)
        .ok()
        .map(PathBuf::from)
}
