// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config loading for the daemon's Slack connection.
//!
//! The config lives at `<runtime dir>/config.toml` and is read only by the
//! daemon at startup. A missing file and an unparseable/incomplete file are
//! distinct failures (`CONFIG_NOT_FOUND` vs `CONFIG_INVALID`) so the CLI
//! can tell the user which one they hit.

use std::fs;
use std::io;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::paths::RuntimePaths;

/// Validated daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MsgConfig {
    pub slack: SlackConfig,
}

/// The `[slack]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlackConfig {
    /// Bot token (`xoxb-...`) used for Web API calls.
    pub bot_token: String,
    /// Channel id messages are posted to.
    pub default_channel: String,
    /// App-level token (`xapp-...`). Accepted but currently unused; kept so
    /// configs written for socket-mode clients keep loading.
    #[serde(default)]
    pub app_token: Option<String>,
    /// Override for the Slack API base URL. Intended for tests.
    #[serde(default)]
    pub api_base_url: Option<String>,
}

/// Parse and validate config text.
pub fn parse_config(text: &str) -> Result<MsgConfig> {
    let mut config: MsgConfig =
        toml::from_str(text).map_err(|e| Error::ConfigInvalid(e.to_string()))?;

    config.slack.bot_token = required_field(&config.slack.bot_token, "slack.bot_token")?;
    config.slack.default_channel =
        required_field(&config.slack.default_channel, "slack.default_channel")?;

    Ok(config)
}

fn required_field(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::ConfigInvalid(format!(
            "missing or empty field: {field}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Load and validate the config file at `paths.config_path`.
pub fn load_config(paths: &RuntimePaths) -> Result<MsgConfig> {
    let text = match fs::read_to_string(&paths.config_path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::ConfigNotFound(format!(
                "config not found: {}",
                paths.config_path.display()
            )));
        }
        Err(e) => return Err(Error::Io(e)),
    };

    parse_config(&text)
}

/// Example config printed in documentation and error hints.
pub const EXAMPLE_CONFIG: &str = r#"# ~/.msg/config.toml
[slack]
bot_token = "xoxb-..."
default_channel = "C12345678"
"#;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
