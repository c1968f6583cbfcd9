//! Tests for the studio shell, end to end with the reveal session.

use aetheria::{
    ErrorCategory, GENERIC_FAILURE_MESSAGE, GenerationResult, RawResponse, RevealEvent,
    RevealSession, StoryDriver, StoryRequest, Studio, Tone,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Driver that plays back a queue of payloads.
#[derive(Debug, Default)]
struct ScriptedDriver {
    replies: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

impl ScriptedDriver {
    fn new(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryDriver for ScriptedDriver {
    async fn generate(&self, _request: &StoryRequest) -> GenerationResult<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted reply available");
        Ok(RawResponse::new(reply))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

const LIGHTHOUSE: &str = r#"{"title":"The Last Light","content":"Waves.","tone":"MYSTERIOUS"}"#;

#[tokio::test]
async fn test_blank_prompt_is_not_submitted() {
    let driver = ScriptedDriver::new(&[]);
    let mut studio = Studio::new(driver.clone());

    let result = studio.submit("   \n").await.expect("blank is not an error");
    assert!(result.is_none());
    assert_eq!(driver.calls(), 0);
    assert!(studio.story().is_none());
    assert!(studio.error().is_none());
}

#[tokio::test]
async fn test_success_stores_story() {
    let driver = ScriptedDriver::new(&[LIGHTHOUSE]);
    let mut studio = Studio::new(driver.clone());

    let story = studio
        .submit("A lighthouse at the end of time")
        .await
        .expect("story")
        .expect("not blank")
        .clone();

    assert_eq!(story.title(), "The Last Light");
    assert_eq!(studio.tone(), Some(Tone::Mysterious));
    assert_eq!(studio.reveal_text(), "Waves.");
    assert!(studio.error().is_none());
}

#[tokio::test]
async fn test_failure_replaces_story_with_generic_message() {
    let driver = ScriptedDriver::new(&[
        LIGHTHOUSE,
        r#"{"title":"x","content":"y","tone":"EXCITED"}"#,
    ]);
    let mut studio = Studio::new(driver.clone());

    studio.submit("first").await.expect("first story");
    let err = studio.submit("second").await.expect_err("bad tone");

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(studio.story().is_none());
    assert_eq!(studio.error(), Some(GENERIC_FAILURE_MESSAGE));
    assert_eq!(studio.reveal_text(), "");
}

#[tokio::test]
async fn test_next_success_clears_error() {
    let driver = ScriptedDriver::new(&["not json", LIGHTHOUSE]);
    let mut studio = Studio::new(driver.clone());

    let err = studio.submit("one").await.expect_err("not json");
    assert_eq!(err.category(), ErrorCategory::Format);
    assert!(studio.error().is_some());

    studio.submit("two").await.expect("story");
    assert!(studio.error().is_none());
    assert_eq!(driver.calls(), 2);
}

#[tokio::test]
async fn test_clear_discards_story() {
    let driver = ScriptedDriver::new(&[LIGHTHOUSE]);
    let mut studio = Studio::new(driver);

    studio.submit("prompt").await.expect("story");
    studio.clear();
    assert!(studio.story().is_none());
    assert!(studio.tone().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_story_content_flows_into_reveal() {
    let driver = ScriptedDriver::new(&[LIGHTHOUSE]);
    let mut studio = Studio::new(driver);
    let (session, mut events) = RevealSession::with_channel(Duration::from_millis(15));

    studio.submit("A lighthouse").await.expect("story");
    assert!(studio.reveal(&session));

    let mut frames = Vec::new();
    let completed = loop {
        match events.recv().await.expect("session alive") {
            RevealEvent::Frame(prefix) => frames.push(prefix),
            RevealEvent::Complete(source) => break source,
        }
    };

    assert_eq!(completed, "Waves.");
    assert_eq!(frames.len(), "Waves.".chars().count() + 1);
    session.shutdown().await;
}
