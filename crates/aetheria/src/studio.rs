//! Minimal presentation shell: one current story, one current error.

use aetheria_core::{Story, StoryPrompt, Tone};
use aetheria_error::GenerationResult;
use aetheria_interface::StoryDriver;
use aetheria_reveal::RevealSession;
use aetheria_story::StoryService;
use tracing::{debug, error, instrument};

/// Holds the story currently on display and the last failure message.
///
/// Submitting discards the previous story before the new request goes out,
/// and a failure leaves only the generic message behind.
#[derive(Debug)]
pub struct Studio<D> {
    service: StoryService<D>,
    story: Option<Story>,
    error: Option<&'static str>,
}

impl<D> Studio<D>
where
    D: StoryDriver,
{
    /// Create a studio around a driver.
    pub fn new(driver: D) -> Self {
        Self::with_service(StoryService::new(driver))
    }

    /// Create a studio around an existing service.
    pub fn with_service(service: StoryService<D>) -> Self {
        Self {
            service,
            story: None,
            error: None,
        }
    }

    /// Request a story for `prompt`.
    ///
    /// A blank prompt is ignored: nothing is sent and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns the generation error after recording the generic failure
    /// message.
    #[instrument(skip(self, prompt))]
    pub async fn submit(&mut self, prompt: &str) -> GenerationResult<Option<&Story>> {
        let Ok(prompt) = StoryPrompt::new(prompt) else {
            debug!("Ignoring blank prompt");
            return Ok(None);
        };

        self.story = None;
        self.error = None;

        match self.service.request_story(&prompt).await {
            Ok(story) => {
                self.story = Some(story);
                Ok(self.story.as_ref())
            }
            Err(e) => {
                error!(error = %e, category = %e.category(), "Story generation failed");
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Discard the current story and error.
    pub fn clear(&mut self) {
        self.story = None;
        self.error = None;
    }

    /// The story on display.
    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    /// Tone of the story on display.
    pub fn tone(&self) -> Option<Tone> {
        self.story.as_ref().map(|story| *story.tone())
    }

    /// Last failure message, if the most recent submit failed.
    pub fn error(&self) -> Option<&str> {
        self.error
    }

    /// Text to reveal: the current story's content, or empty.
    pub fn reveal_text(&self) -> &str {
        self.story
            .as_ref()
            .map(|story| story.content().as_str())
            .unwrap_or_default()
    }

    /// Hand the current story's content to a reveal session.
    ///
    /// Returns `false` if the session has ended.
    pub fn reveal(&self, session: &RevealSession) -> bool {
        session.set_source(self.reveal_text())
    }

    /// The underlying service.
    pub fn service(&self) -> &StoryService<D> {
        &self.service
    }
}
