// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use tempfile::tempdir;
use yare::parameterized;

use super::*;
use crate::error::ErrorCode;
use crate::paths::ensure_runtime_dir;

const VALID: &str = r#"
[slack]
bot_token = "xoxb-abc"
default_channel = "C123"
"#;

#[test]
fn parses_valid_config() {
    let config = parse_config(VALID).unwrap();
    assert_eq!(config.slack.bot_token, "xoxb-abc");
    assert_eq!(config.slack.default_channel, "C123");
    assert_eq!(config.slack.app_token, None);
}

#[test]
fn parses_example_config() {
    let config = parse_config(EXAMPLE_CONFIG).unwrap();
    assert_eq!(config.slack.default_channel, "C12345678");
}

#[test]
fn trims_surrounding_whitespace() {
    let config = parse_config(
        r#"
[slack]
bot_token = "  xoxb-abc  "
default_channel = " C123 "
"#,
    )
    .unwrap();
    assert_eq!(config.slack.bot_token, "xoxb-abc");
    assert_eq!(config.slack.default_channel, "C123");
}

#[test]
fn accepts_optional_app_token() {
    let config = parse_config(
        r#"
[slack]
app_token = "xapp-abc"
bot_token = "xoxb-abc"
default_channel = "C123"
"#,
    )
    .unwrap();
    assert_eq!(config.slack.app_token.as_deref(), Some("xapp-abc"));
}

#[parameterized(
    not_toml = { "not [toml" },
    missing_section = { "bot_token = \"xoxb\"" },
    missing_channel = { "[slack]\nbot_token = \"xoxb-abc\"" },
    blank_token = { "[slack]\nbot_token = \"   \"\ndefault_channel = \"C123\"" },
    wrong_type = { "[slack]\nbot_token = 7\ndefault_channel = \"C123\"" },
)]
fn rejects_invalid_config(text: &str) {
    let err = parse_config(text).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigInvalid);
}

#[test]
fn load_reports_missing_file_distinctly() {
    let temp = tempdir().unwrap();
    let paths = RuntimePaths::resolve(temp.path().join(".msg"));

    let err = load_config(&paths).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigNotFound);
}

#[test]
fn load_reads_config_from_runtime_dir() {
    let temp = tempdir().unwrap();
    let paths = RuntimePaths::resolve(temp.path().join(".msg"));
    ensure_runtime_dir(&paths).unwrap();
    fs::write(&paths.config_path, VALID).unwrap();

    let config = load_config(&paths).unwrap();
    assert_eq!(config.slack.default_channel, "C123");
}
