//! Feed retrieval and parsing
//!
//! Pulls the news feed and reduces it to the (title, link) pairs the digest
//! works on. Parsing is split from the fetch so it can be exercised on
//! static documents.

use feed_rs::parser;
use tracing::warn;

use crate::clients::HTTP_CLIENT;
use crate::core::models::Story;
use crate::errors::DigestError;

/// Fetch the feed at `url` and return up to `limit` stories in document
/// order.
pub async fn fetch_top_stories(url: &str, limit: usize) -> Result<Vec<Story>, DigestError> {
    let response = HTTP_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| DigestError::FeedError(format!("feed request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DigestError::FeedError(format!(
            "feed fetch failed with status: {}",
            status
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| DigestError::FeedError(format!("failed to read feed body: {}", e)))?;

    parse_top_stories(&body, limit)
}

/// Parse a feed document and keep the first `limit` usable entries.
pub fn parse_top_stories(document: &[u8], limit: usize) -> Result<Vec<Story>, DigestError> {
    let feed = parser::parse(document)?;

    let stories = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.map(|t| t.content);
            let link = entry.links.into_iter().next().map(|l| l.href);
            match (title, link) {
                (Some(title), Some(link)) => Some(Story { title, link }),
                _ => {
                    warn!("Skipping feed entry {} without title or link", entry.id);
                    None
                }
            }
        })
        .take(limit)
        .collect();

    Ok(stories)
}
