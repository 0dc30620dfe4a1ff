// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy shared by the CLI and the daemon.
//!
//! Every error maps to a stable [`ErrorCode`] string. Codes are the unit of
//! cross-process propagation: the daemon writes them into error responses
//! and the CLI prints them verbatim, so they must survive serialization
//! unchanged.

use std::fmt;

use thiserror::Error;

/// All possible errors that can occur in the msg crates.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    /// The daemon socket could not be reached: nothing is listening, the
    /// peer vanished mid-exchange, or the overall request deadline expired.
    #[error("daemon unavailable: {0}")]
    DaemonUnavailable(String),

    #[error("daemon failed to start: {0}")]
    DaemonStartFailed(String),

    /// The peer was reachable but violated the wire protocol.
    #[error("daemon returned a bad response: {0}")]
    DaemonBadResponse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("slack connection failed: {0}")]
    SlackConnect(String),

    #[error("slack post failed: {0}")]
    SlackPost(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for msg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable wire codes for the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ConfigNotFound,
    ConfigInvalid,
    DaemonUnavailable,
    DaemonStartFailed,
    DaemonBadResponse,
    InvalidRequest,
    SlackConnectFailed,
    SlackPostFailed,
    UnknownError,
}

impl ErrorCode {
    /// Returns the string representation used on the wire and in CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigNotFound => "CONFIG_NOT_FOUND",
            ErrorCode::ConfigInvalid => "CONFIG_INVALID",
            ErrorCode::DaemonUnavailable => "DAEMON_UNAVAILABLE",
            ErrorCode::DaemonStartFailed => "DAEMON_START_FAILED",
            ErrorCode::DaemonBadResponse => "DAEMON_BAD_RESPONSE",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::SlackConnectFailed => "SLACK_CONNECT_FAILED",
            ErrorCode::SlackPostFailed => "SLACK_POST_FAILED",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Error {
    /// Map this error to its wire code.
    ///
    /// Total: anything without a dedicated code (I/O faults and the like)
    /// collapses into `UNKNOWN_ERROR`.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ConfigNotFound(_) => ErrorCode::ConfigNotFound,
            Error::ConfigInvalid(_) => ErrorCode::ConfigInvalid,
            Error::DaemonUnavailable(_) => ErrorCode::DaemonUnavailable,
            Error::DaemonStartFailed(_) => ErrorCode::DaemonStartFailed,
            Error::DaemonBadResponse(_) => ErrorCode::DaemonBadResponse,
            Error::InvalidRequest(_) => ErrorCode::InvalidRequest,
            Error::SlackConnect(_) => ErrorCode::SlackConnectFailed,
            Error::SlackPost(_) => ErrorCode::SlackPostFailed,
            Error::Io(_) => ErrorCode::UnknownError,
        }
    }

    /// True when the error means "nobody is listening on the socket", the
    /// trigger for auto-starting the daemon.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::DaemonUnavailable(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
