//! Story request service.

use crate::parse_story;
use aetheria_core::{Story, StoryPrompt, StoryRequest};
use aetheria_error::GenerationResult;
use aetheria_interface::StoryDriver;
use tracing::{debug, info, instrument};

/// Requests stories from a [`StoryDriver`] and validates what comes back.
///
/// Holds nothing but the driver. Every call makes exactly one driver call;
/// there is no caching, retry or de-duplication. Two overlapping calls are
/// independent, and it is up to the caller to decide which result to keep.
#[derive(Debug, Clone)]
pub struct StoryService<D> {
    driver: D,
}

impl<D> StoryService<D>
where
    D: StoryDriver,
{
    /// Creates a service around the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Returns the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Request one story for `prompt` with default length guidance.
    ///
    /// # Errors
    ///
    /// Fails with a transport, format or validation
    /// [`GenerationError`](aetheria_error::GenerationError).
    #[instrument(
        skip(self, prompt),
        fields(provider = self.driver.provider_name(), model = %self.driver.model_name())
    )]
    pub async fn request_story(&self, prompt: &StoryPrompt) -> GenerationResult<Story> {
        self.request(&StoryRequest::for_prompt(prompt.clone())).await
    }

    /// Send a fully specified request and validate the response.
    ///
    /// # Errors
    ///
    /// Same as [`StoryService::request_story`].
    pub async fn request(&self, request: &StoryRequest) -> GenerationResult<Story> {
        let raw = self.driver.generate(request).await?;
        debug!(payload_chars = raw.text().len(), "Validating story payload");

        let story = parse_story(&raw)?;
        info!(
            title = %story.title(),
            tone = %story.tone(),
            content_chars = story.content().chars().count(),
            "Story generated"
        );
        Ok(story)
    }
}
