//! tldr-news - a digest bot that posts summarized top news stories to Slack.
//!
//! Each run fetches the top stories of the day from a news RSS feed,
//! summarizes every story through the Hugging Face inference API, and posts
//! the summaries to a Slack channel via an incoming webhook. One task runs
//! per story; the process waits for all of them and exits, so the binary is
//! meant to be invoked from a scheduler.
//!
//! # Architecture
//!
//! The system uses:
//! - reqwest for the feed, summarization, and webhook HTTP calls
//! - feed-rs for feed parsing
//! - Tokio for async execution, one spawned task per story

// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod feed;
pub mod worker;

/// Configure structured logging for a digest run.
///
/// Sets up tracing-subscriber with a plain formatter. Call once at process
/// start, before any client is constructed.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
