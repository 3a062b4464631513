use std::env;

use url::Url;

use crate::errors::DigestError;

/// Feed the digest is built from: top r/news stories of the day.
pub const FEED_URL: &str = "https://www.reddit.com/r/news/top/.rss?t=day";

/// Summarization model endpoint on the Hugging Face inference API.
pub const SUMMARIZER_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// How many stories from the top of the feed make it into one digest.
pub const STORY_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_webhook_url: String,
    pub huggingface_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DigestError> {
        let slack_webhook_url = env::var("SLACK_WEBHOOK_URL")
            .map_err(|e| DigestError::ConfigError(format!("SLACK_WEBHOOK_URL: {}", e)))?;
        Url::parse(&slack_webhook_url)
            .map_err(|e| DigestError::ConfigError(format!("SLACK_WEBHOOK_URL: {}", e)))?;

        let huggingface_api_key = env::var("HUGGINGFACE_API_KEY")
            .map_err(|e| DigestError::ConfigError(format!("HUGGINGFACE_API_KEY: {}", e)))?;
        if huggingface_api_key.trim().is_empty() {
            return Err(DigestError::ConfigError(
                "HUGGINGFACE_API_KEY is empty".to_string(),
            ));
        }

        Ok(Self {
            slack_webhook_url,
            huggingface_api_key,
        })
    }
}
