// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn msg() -> Command {
    cargo_bin_cmd!("msg")
}

/// A scratch runtime directory, resolved the way the CLI does it.
pub fn temp_runtime_dir() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".msg");
    (temp, dir)
}

/// Write a config pointing the daemon at a stub Slack endpoint.
pub fn write_config(dir: &Path, api_base_url: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        format!(
            "[slack]\nbot_token = \"xoxb-test\"\ndefault_channel = \"C123\"\napi_base_url = \"{api_base_url}\"\n"
        ),
    )
    .unwrap();
}

/// Stop the daemon for a runtime dir when the test ends, pass or fail.
pub struct StopGuard(pub PathBuf);

impl Drop for StopGuard {
    fn drop(&mut self) {
        let _ = msg()
            .args(["daemon", "stop", "--dir"])
            .arg(&self.0)
            .output();
    }
}

/// Minimal Slack Web API stub: answers every POST with `{"ok":true}`.
///
/// Good enough for auth.test and chat.postMessage; requests are read to
/// completion (headers plus content-length body) before replying.
pub fn spawn_slack_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            thread::spawn(move || {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    match stream.read(&mut chunk) {
                        Ok(0) => break,
                        Ok(n) => {
                            buf.extend_from_slice(&chunk[..n]);
                            if request_complete(&buf) {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }

                let body = br#"{"ok":true}"#;
                let _ = write!(
                    stream,
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(body);
            });
        }
    });

    url
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(headers_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };

    let headers = String::from_utf8_lossy(&buf[..headers_end]);
    let content_length = headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    buf.len() >= headers_end + 4 + content_length
}
