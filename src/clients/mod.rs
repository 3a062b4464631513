//! Client modules for external API interactions

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;

use crate::errors::DigestError;

pub mod slack_client;
pub mod summarizer;

pub use slack_client::SlackWebhookClient;
pub use summarizer::SummarizerClient;

/// Ceiling on any single outbound request, summarization and webhook alike.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(40);

pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("tldr-news/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Maps story text to a summary.
///
/// Implemented by [`SummarizerClient`]; the worker is generic over this so
/// tests can substitute their own doubles.
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, DigestError>;
}

/// Delivers one chat message. Implemented by [`SlackWebhookClient`].
#[async_trait]
pub trait Notify: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), DigestError>;
}
