// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::io::{Read, Write};
use std::os::unix::net::UnixListener;
use std::thread;

use tempfile::tempdir;

use super::*;

#[test]
fn empty_message_fails_without_touching_the_daemon() {
    let temp = tempdir().unwrap();
    let paths = RuntimePaths::resolve(temp.path());

    assert_eq!(run(&paths, ""), 1);
    assert_eq!(run(&paths, "   "), 1);
    // No daemon was started along the way.
    assert!(!paths.socket_path.exists());
    assert!(!paths.pid_path.exists());
}

#[test]
fn normalize_drops_the_pid_from_success() {
    assert_eq!(
        normalize(DaemonResponse::Ok { pid: Some(99) }),
        DaemonResponse::Ok { pid: None }
    );
    assert_eq!(
        normalize(DaemonResponse::Err {
            code: "SLACK_POST_FAILED".into()
        }),
        DaemonResponse::Err {
            code: "SLACK_POST_FAILED".into()
        }
    );
}

#[test]
fn send_notification_uses_a_running_daemon() {
    let temp = tempdir().unwrap();
    let paths = RuntimePaths::resolve(temp.path());

    let listener = UnixListener::bind(&paths.socket_path).unwrap();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = String::new();
        stream.read_to_string(&mut request).unwrap();
        stream.write_all(b"{\"ok\":true}\n").unwrap();
        request
    });

    let response = send_notification(&paths, "hello").unwrap();
    assert_eq!(response, DaemonResponse::Ok { pid: None });

    let received = server.join().unwrap();
    assert!(received.contains("\"message\":\"hello\""));
}

#[test]
fn error_responses_pass_through_unchanged() {
    let temp = tempdir().unwrap();
    let paths = RuntimePaths::resolve(temp.path());

    let listener = UnixListener::bind(&paths.socket_path).unwrap();
    let _server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = String::new();
        stream.read_to_string(&mut request).unwrap();
        stream
            .write_all(b"{\"ok\":false,\"error\":\"SLACK_POST_FAILED\"}\n")
            .unwrap();
    });

    let response = send_notification(&paths, "hello").unwrap();
    assert_eq!(
        response,
        DaemonResponse::Err {
            code: "SLACK_POST_FAILED".into()
        }
    );
}
