//! The per-story pipeline and the coordinator that fans it out.
//!
//! Every story is handled by its own spawned task: build the summarization
//! input, call the summarizer, format the chat message, post it. A failure
//! in one task is logged and dies with that task; the other stories are
//! unaffected.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, warn};

use crate::clients::slack_client::format_story_message;
use crate::clients::{Notify, Summarize};
use crate::core::models::Story;

/// Run the full pipeline for one story.
///
/// Errors are recorded here and never propagated. At most one summarization
/// call and one chat post happen; a summarization failure means no post.
pub async fn process_story<S, N>(story: Story, summarizer: &S, notifier: &N)
where
    S: Summarize + ?Sized,
    N: Notify + ?Sized,
{
    let input = format!("{} - {}", story.title, story.link);

    let summary = match summarizer.summarize(&input).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Error summarizing '{}': {}", story.title, e);
            return;
        }
    };

    let message = format_story_message(&story.title, &summary);

    if let Err(e) = notifier.notify(&message).await {
        error!("Error posting '{}' to Slack: {}", story.title, e);
    }
}

/// Launch one task per story and wait for every one of them to finish.
///
/// All tasks are spawned before any is awaited and may post in any order.
/// The coordinator only aggregates completion, not results: per-story
/// failures are logged inside the tasks and never surface here, and an
/// empty story list returns immediately.
pub async fn run_digest<S, N>(stories: Vec<Story>, summarizer: Arc<S>, notifier: Arc<N>)
where
    S: Summarize + 'static,
    N: Notify + 'static,
{
    let handles: Vec<_> = stories
        .into_iter()
        .map(|story| {
            let summarizer = Arc::clone(&summarizer);
            let notifier = Arc::clone(&notifier);
            tokio::spawn(async move {
                process_story(story, summarizer.as_ref(), notifier.as_ref()).await;
            })
        })
        .collect();

    for result in join_all(handles).await {
        if let Err(e) = result {
            warn!("Story task did not run to completion: {}", e);
        }
    }
}
