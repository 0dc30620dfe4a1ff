// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use clap::Parser;

use super::*;

#[test]
fn parses_noti_with_multiple_words() {
    let cli = Cli::try_parse_from(["msg", "noti", "deploy", "finished"]).unwrap();
    match cli.command {
        Command::Noti { message } => assert_eq!(message, vec!["deploy", "finished"]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_daemon_subcommands() {
    for (arg, expected) in [
        ("start", DaemonCommand::Start),
        ("stop", DaemonCommand::Stop),
        ("status", DaemonCommand::Status),
    ] {
        let cli = Cli::try_parse_from(["msg", "daemon", arg]).unwrap();
        match cli.command {
            Command::Daemon { command } => assert_eq!(command, expected),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

#[test]
fn dir_flag_is_global() {
    let cli = Cli::try_parse_from(["msg", "daemon", "status", "--dir", "/tmp/x"]).unwrap();
    assert_eq!(cli.dir, Some(std::path::PathBuf::from("/tmp/x")));
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["msg", "frobnicate"]).is_err());
}
