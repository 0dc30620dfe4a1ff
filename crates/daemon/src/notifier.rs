// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Slack notifier owned by the daemon.
//!
//! Keeping one [`SlackNotifier`] alive for the daemon's lifetime is the
//! point of the whole system: its HTTP client holds a warm connection pool
//! to the Slack API, so individual `msg noti` invocations skip connection
//! setup entirely.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use msg_core::{Error, MsgConfig, Result};

/// Default Slack Web API endpoint.
const SLACK_API_BASE: &str = "https://slack.com/api";
/// Upper bound on a single API call. Kept below the CLI's request deadline
/// so the daemon answers before the client gives up.
const API_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers messages to the remote messaging backend.
///
/// `send_message` may be invoked concurrently from overlapping in-flight
/// requests; implementations must tolerate that. `start` and `stop` are
/// idempotent.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn start(&self) -> Result<()>;
    async fn stop(&self);
    async fn send_message(&self, message: &str) -> Result<()>;
}

/// Notifier backed by the Slack Web API.
pub struct SlackNotifier {
    client: reqwest::Client,
    bot_token: String,
    default_channel: String,
    base_url: String,
    started: AtomicBool,
}

/// The envelope every Slack Web API method replies with.
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackNotifier {
    pub fn new(config: &MsgConfig) -> Self {
        let base_url = config
            .slack
            .api_base_url
            .clone()
            .unwrap_or_else(|| SLACK_API_BASE.to_string());

        SlackNotifier {
            client: reqwest::Client::builder()
                .timeout(API_TIMEOUT)
                .build()
                .unwrap_or_default(),
            bot_token: config.slack.bot_token.clone(),
            default_channel: config.slack.default_channel.clone(),
            base_url,
            started: AtomicBool::new(false),
        }
    }

    async fn call(&self, method: &str, body: &serde_json::Value) -> reqwest::Result<ApiReply> {
        self.client
            .post(format!("{}/{}", self.base_url, method))
            .bearer_auth(&self.bot_token)
            .json(body)
            .send()
            .await?
            .json::<ApiReply>()
            .await
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    /// Validate the bot token with `auth.test` and mark the notifier live.
    async fn start(&self) -> Result<()> {
        if self.started.load(Ordering::Acquire) {
            return Ok(());
        }

        let reply = self
            .call("auth.test", &json!({}))
            .await
            .map_err(|e| Error::SlackConnect(e.to_string()))?;

        if !reply.ok {
            return Err(Error::SlackConnect(
                reply.error.unwrap_or_else(|| "slack returned ok=false".into()),
            ));
        }

        self.started.store(true, Ordering::Release);
        Ok(())
    }

    async fn stop(&self) {
        self.started.store(false, Ordering::Release);
    }

    /// Post one message to the configured default channel.
    async fn send_message(&self, message: &str) -> Result<()> {
        let body = json!({
            "channel": self.default_channel,
            "text": message,
        });

        let reply = self
            .call("chat.postMessage", &body)
            .await
            .map_err(|e| Error::SlackPost(e.to_string()))?;

        if !reply.ok {
            return Err(Error::SlackPost(
                reply.error.unwrap_or_else(|| "slack returned ok=false".into()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
