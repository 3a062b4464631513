//! Slack incoming-webhook client module
//!
//! Encapsulates the webhook post plus the fixed message templates the
//! digest uses.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::StatusCode;
use serde::Serialize;

use crate::clients::{HTTP_CLIENT, Notify};
use crate::errors::DigestError;

/// Message format for the Slack incoming webhook
#[derive(Debug, Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

/// Slack incoming-webhook client
pub struct SlackWebhookClient {
    webhook_url: String,
}

impl SlackWebhookClient {
    pub fn new(webhook_url: String) -> Self {
        Self { webhook_url }
    }
}

#[async_trait]
impl Notify for SlackWebhookClient {
    async fn notify(&self, message: &str) -> Result<(), DigestError> {
        let payload = SlackPayload { text: message };

        let response = HTTP_CLIENT
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DigestError::HttpError(format!("webhook request failed: {}", e)))?;

        if response.status() != StatusCode::OK {
            return Err(DigestError::SlackError(format!(
                "Slack responded with status: {}",
                response.status()
            )));
        }

        Ok(())
    }
}

/// Fixed template for one story: bolded title, summary as a quote block.
pub fn format_story_message(title: &str, summary: &str) -> String {
    format!("*Title:* {}\n> {}", title, summary)
}

/// Header message posted once per run, before any story.
pub fn format_date_header(date: &DateTime<Local>) -> String {
    date.format("🗓️ %B %-d, %Y").to_string()
}
