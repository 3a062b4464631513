use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use tracing::{error, info};

use tldr_news::clients::slack_client::format_date_header;
use tldr_news::clients::{Notify, SlackWebhookClient, SummarizerClient};
use tldr_news::core::config::{AppConfig, FEED_URL, STORY_LIMIT, SUMMARIZER_URL};
use tldr_news::{feed, worker};

#[tokio::main]
async fn main() -> Result<()> {
    tldr_news::setup_logging();

    if dotenv::dotenv().is_err() {
        info!("No .env file found, assuming environment variables are already set");
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;

    let summarizer = Arc::new(SummarizerClient::new(
        config.huggingface_api_key.clone(),
        SUMMARIZER_URL.to_string(),
    ));
    let notifier = Arc::new(SlackWebhookClient::new(config.slack_webhook_url.clone()));

    // The date header opens the day's digest in the channel. A webhook that
    // cannot take this message cannot take any story either.
    notifier
        .notify(&format_date_header(&Local::now()))
        .await
        .map_err(|e| {
            error!("Error posting date to Slack: {}", e);
            e
        })?;

    let stories = feed::fetch_top_stories(FEED_URL, STORY_LIMIT)
        .await
        .map_err(|e| {
            error!("Failed to fetch stories: {}", e);
            e
        })?;
    info!("Fetched {} stories from the feed", stories.len());

    worker::run_digest(stories, summarizer, notifier).await;

    Ok(())
}
