// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `msg noti` - send a notification through the daemon.
//!
//! Top-level retry policy: one attempt, and if (and only if) the daemon was
//! unreachable, one auto-start followed by exactly one more attempt. Any
//! other failure, including a failure of the retry, propagates.
//!
//! Output is a single JSON line on stdout mirroring the wire response, with
//! the ping-only pid field dropped; the exit code is 0 iff `ok`.

use msg_core::{ErrorCode, Result, RuntimePaths};
use msg_ipc::{encode_response, DaemonRequest, DaemonResponse};

use crate::daemon::{client, lifecycle};

pub fn run(paths: &RuntimePaths, message: &str) -> i32 {
    let message = message.trim();
    if message.is_empty() {
        print_outcome(&DaemonResponse::Err {
            code: ErrorCode::InvalidRequest.to_string(),
        });
        return 1;
    }

    match send_notification(paths, message) {
        Ok(response) => {
            let ok = response.is_ok();
            print_outcome(&normalize(response));
            if ok {
                0
            } else {
                1
            }
        }
        Err(e) => {
            print_outcome(&DaemonResponse::Err {
                code: e.code().to_string(),
            });
            1
        }
    }
}

/// Send, auto-starting the daemon on the first unreachable failure.
fn send_notification(paths: &RuntimePaths, message: &str) -> Result<DaemonResponse> {
    let request = DaemonRequest::Notify {
        message: message.to_string(),
    };

    match client::send(paths, &request) {
        Err(e) if e.is_unreachable() => {
            lifecycle::start(paths)?;
            client::send(paths, &request)
        }
        result => result,
    }
}

/// Success responses print as exactly `{"ok":true}`.
fn normalize(response: DaemonResponse) -> DaemonResponse {
    match response {
        DaemonResponse::Ok { .. } => DaemonResponse::Ok { pid: None },
        err => err,
    }
}

fn print_outcome(response: &DaemonResponse) {
    // encode_response frames with a trailing newline already.
    print!("{}", encode_response(response));
}

#[cfg(test)]
#[path = "noti_tests.rs"]
mod tests;
