// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! IPC client for communicating with the msgd daemon.
//!
//! One exchange per connection: write a single frame, half-close the write
//! side, then read until the peer closes. An overall deadline bounds the
//! whole exchange.
//!
//! Connection-level failures ("nobody is listening") are classified as
//! [`Error::DaemonUnavailable`] so the caller can decide to auto-start the
//! daemon; protocol-level failures surface as `DAEMON_BAD_RESPONSE`.

use std::io::{self, Read, Write};
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::time::{Duration, Instant};

use msg_core::{Error, Result, RuntimePaths};
use msg_ipc::{decode_response, encode_request, DaemonRequest, DaemonResponse};

/// Overall deadline for one request/response exchange.
const IPC_TIMEOUT: Duration = Duration::from_secs(15);

/// Send one request and collect the full response.
pub fn send(paths: &RuntimePaths, request: &DaemonRequest) -> Result<DaemonResponse> {
    send_with_timeout(paths, request, IPC_TIMEOUT)
}

/// [`send`] with an explicit overall deadline.
pub fn send_with_timeout(
    paths: &RuntimePaths,
    request: &DaemonRequest,
    overall: Duration,
) -> Result<DaemonResponse> {
    let deadline = Instant::now() + overall;

    let mut stream = UnixStream::connect(&paths.socket_path).map_err(classify)?;

    stream
        .set_write_timeout(Some(remaining(deadline)?))
        .map_err(Error::Io)?;
    stream
        .write_all(encode_request(request).as_bytes())
        .map_err(classify)?;
    stream.shutdown(Shutdown::Write).map_err(classify)?;

    let mut raw = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        stream
            .set_read_timeout(Some(remaining(deadline)?))
            .map_err(Error::Io)?;
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => raw.extend_from_slice(&chunk[..n]),
            Err(e) => return Err(classify(e)),
        }
    }

    let text = String::from_utf8_lossy(&raw);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::DaemonBadResponse(
            "daemon returned empty response".into(),
        ));
    }

    decode_response(trimmed)
}

/// Time left until the deadline; expiry counts as the peer being gone.
fn remaining(deadline: Instant) -> Result<Duration> {
    deadline
        .checked_duration_since(Instant::now())
        .filter(|d| !d.is_zero())
        .ok_or_else(|| Error::DaemonUnavailable("daemon timed out".into()))
}

/// Classify connection-level errors as "peer unreachable".
///
/// Covers the no-such-socket, connection-refused, broken-pipe and
/// not-connected families, plus read timeouts (reported as `WouldBlock` or
/// `TimedOut` depending on platform).
fn classify(e: io::Error) -> Error {
    use io::ErrorKind;

    match e.kind() {
        ErrorKind::NotFound
        | ErrorKind::ConnectionRefused
        | ErrorKind::ConnectionReset
        | ErrorKind::BrokenPipe
        | ErrorKind::NotConnected
        | ErrorKind::TimedOut
        | ErrorKind::WouldBlock => Error::DaemonUnavailable(e.to_string()),
        _ => Error::Io(e),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
