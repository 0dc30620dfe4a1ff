// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared IPC protocol for CLI-daemon communication.
//!
//! This crate defines the message types and framing used between the `msg`
//! CLI and the `msgd` daemon. Each request and response is one JSON value
//! on a single line, terminated by a newline; there is no length prefix.
//! One connection carries exactly one request/response pair.
//!
//! Decoding is deliberately strict and hand-rolled: frames come from
//! arbitrary local processes, and a malformed frame must map to a
//! request-level error (`INVALID_REQUEST` server side, `DAEMON_BAD_RESPONSE`
//! client side) rather than tearing down the channel.

use msg_core::{Error, Result};
use serde_json::{json, Value};

/// Request sent from CLI to daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonRequest {
    /// Liveness probe; the reply carries the daemon's pid.
    Ping,
    /// Relay a message to the notifier. Never empty after trimming.
    Notify { message: String },
}

/// Response sent from daemon to CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonResponse {
    /// Success. `pid` is present on ping replies only.
    Ok { pid: Option<u32> },
    /// Failure, carrying a stable error code string.
    Err { code: String },
}

impl DaemonResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, DaemonResponse::Ok { .. })
    }
}

/// Encode a request as a newline-terminated frame.
pub fn encode_request(request: &DaemonRequest) -> String {
    let value = match request {
        DaemonRequest::Ping => json!({"type": "ping"}),
        DaemonRequest::Notify { message } => json!({"type": "notify", "message": message}),
    };
    format!("{value}\n")
}

/// Encode a response as a newline-terminated frame.
pub fn encode_response(response: &DaemonResponse) -> String {
    let value = match response {
        DaemonResponse::Ok { pid: None } => json!({"ok": true}),
        DaemonResponse::Ok { pid: Some(pid) } => json!({"ok": true, "pid": pid}),
        DaemonResponse::Err { code } => json!({"ok": false, "error": code}),
    };
    format!("{value}\n")
}

/// Decode one request frame.
///
/// The message of a valid `notify` is passed through untrimmed; only the
/// emptiness check trims.
pub fn decode_request(raw: &str) -> Result<DaemonRequest> {
    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|_| Error::InvalidRequest("request is not valid JSON".into()))?;

    let object = value
        .as_object()
        .ok_or_else(|| Error::InvalidRequest("request body must be an object".into()))?;

    match object.get("type").and_then(Value::as_str) {
        Some("ping") => Ok(DaemonRequest::Ping),
        Some("notify") => {
            let message = object
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .ok_or_else(|| {
                    Error::InvalidRequest("notify.message must be a non-empty string".into())
                })?;
            Ok(DaemonRequest::Notify {
                message: message.to_string(),
            })
        }
        _ => Err(Error::InvalidRequest("unsupported request type".into())),
    }
}

/// Decode one response frame.
///
/// `ok` must be exactly boolean `true` or `false`; an error response must
/// carry a non-empty string `error`. Unknown fields are dropped, so
/// re-encoding a decoded response yields the normalized shape.
pub fn decode_response(raw: &str) -> Result<DaemonResponse> {
    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|_| Error::DaemonBadResponse("daemon returned non-JSON response".into()))?;

    let object = value
        .as_object()
        .ok_or_else(|| Error::DaemonBadResponse("response is not an object".into()))?;

    match object.get("ok") {
        Some(Value::Bool(true)) => {
            let pid = object
                .get("pid")
                .and_then(Value::as_u64)
                .and_then(|pid| u32::try_from(pid).ok());
            Ok(DaemonResponse::Ok { pid })
        }
        Some(Value::Bool(false)) => {
            let code = object
                .get("error")
                .and_then(Value::as_str)
                .filter(|code| !code.is_empty())
                .ok_or_else(|| Error::DaemonBadResponse("response error is missing".into()))?;
            Ok(DaemonResponse::Err {
                code: code.to_string(),
            })
        }
        _ => Err(Error::DaemonBadResponse("response has invalid shape".into())),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
