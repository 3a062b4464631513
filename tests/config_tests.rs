use tldr_news::core::config::{AppConfig, FEED_URL, STORY_LIMIT, SUMMARIZER_URL};
use tldr_news::errors::DigestError;

/// Environment mutation is process-wide, so every scenario lives in one
/// test to keep them from interleaving.
#[test]
fn test_config_from_env() {
    unsafe {
        std::env::remove_var("SLACK_WEBHOOK_URL");
        std::env::remove_var("HUGGINGFACE_API_KEY");
    }
    match AppConfig::from_env() {
        Err(DigestError::ConfigError(msg)) => assert!(msg.contains("SLACK_WEBHOOK_URL")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }

    // Webhook URL must at least parse as a URL
    unsafe {
        std::env::set_var("SLACK_WEBHOOK_URL", "not a url");
        std::env::set_var("HUGGINGFACE_API_KEY", "hf_test_key");
    }
    assert!(matches!(
        AppConfig::from_env(),
        Err(DigestError::ConfigError(_))
    ));

    unsafe {
        std::env::set_var(
            "SLACK_WEBHOOK_URL",
            "https://hooks.slack.com/services/T000/B000/XXXX",
        );
    }
    let config = AppConfig::from_env().expect("config should load");
    assert_eq!(config.huggingface_api_key, "hf_test_key");
    assert_eq!(
        config.slack_webhook_url,
        "https://hooks.slack.com/services/T000/B000/XXXX"
    );

    // A blank API key is as unusable as a missing one
    unsafe {
        std::env::set_var("HUGGINGFACE_API_KEY", "   ");
    }
    assert!(matches!(
        AppConfig::from_env(),
        Err(DigestError::ConfigError(_))
    ));
}

#[test]
fn test_builtin_endpoints_are_well_formed() {
    assert!(url::Url::parse(FEED_URL).is_ok());
    assert!(url::Url::parse(SUMMARIZER_URL).is_ok());
    assert!(STORY_LIMIT > 0);
}
