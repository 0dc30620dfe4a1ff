// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! msg-core: Shared library for the msg notification relay
//!
//! This crate provides the error taxonomy, runtime path derivation, config
//! loading, and process liveness primitives used by both the msg CLI and
//! the msgd daemon.

pub mod config;
pub mod error;
pub mod paths;
pub mod process;

pub use config::{load_config, parse_config, MsgConfig, SlackConfig, EXAMPLE_CONFIG};
pub use error::{Error, ErrorCode, Result};
pub use paths::{ensure_runtime_dir, RuntimePaths};
pub use process::{read_pid_file, terminate, LivenessProbe, SignalProbe};
