//! Summarization API client module
//!
//! Encapsulates the Hugging Face inference API call that turns story text
//! into a short summary.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::json;

use crate::clients::{HTTP_CLIENT, Summarize};
use crate::errors::DigestError;

/// Posted in place of a summary when the model returns nothing usable.
pub const SUMMARY_PLACEHOLDER: &str = "Summary unavailable";

/// One row of the inference API response array.
#[derive(Debug, Deserialize)]
struct SummaryRow {
    #[serde(default)]
    summary_text: Option<String>,
}

/// Hugging Face inference API client for generating summaries
pub struct SummarizerClient {
    api_key: String,
    endpoint: String,
}

impl SummarizerClient {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self { api_key, endpoint }
    }
}

#[async_trait]
impl Summarize for SummarizerClient {
    async fn summarize(&self, text: &str) -> Result<String, DigestError> {
        let request_body = json!({ "inputs": text });

        let response = HTTP_CLIENT
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DigestError::HttpError(format!("summarization request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(DigestError::SummarizerError(format!(
                "inference API returned {}: {}",
                status, body
            )));
        }

        let rows: Vec<SummaryRow> = response.json().await.map_err(|e| {
            DigestError::SummarizerError(format!("failed to parse inference response: {}", e))
        })?;

        Ok(extract_summary(rows))
    }
}

/// The first non-empty `summary_text` wins; anything else degrades to the
/// placeholder so the story still gets posted.
fn extract_summary(rows: Vec<SummaryRow>) -> String {
    rows.into_iter()
        .next()
        .and_then(|row| row.summary_text)
        .filter(|summary| !summary.is_empty())
        .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string())
}
