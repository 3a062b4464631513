use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Missing or invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to fetch news feed: {0}")]
    FeedError(String),

    #[error("Failed to access summarization API: {0}")]
    SummarizerError(String),

    #[error("Failed to post to Slack: {0}")]
    SlackError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for DigestError {
    fn from(error: reqwest::Error) -> Self {
        DigestError::HttpError(error.to_string())
    }
}

impl From<std::env::VarError> for DigestError {
    fn from(error: std::env::VarError) -> Self {
        DigestError::ConfigError(error.to_string())
    }
}

impl From<url::ParseError> for DigestError {
    fn from(error: url::ParseError) -> Self {
        DigestError::ConfigError(error.to_string())
    }
}

impl From<feed_rs::parser::ParseFeedError> for DigestError {
    fn from(error: feed_rs::parser::ParseFeedError) -> Self {
        DigestError::FeedError(error.to_string())
    }
}
