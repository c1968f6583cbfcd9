//! Trait definitions for the Aetheria story generation library.
//!
//! The story service never talks to a network directly. It is handed a
//! [`StoryDriver`], so parsing and validation can be exercised against canned
//! payloads and any provider can be slotted in behind the same seam.

use aetheria_core::{RawResponse, StoryRequest};
use aetheria_error::GenerationResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Sends one structured generation request and returns the raw payload.
///
/// Implementations perform exactly one outbound call per invocation and keep
/// no state between calls. They report transport failures and malformed
/// provider envelopes; interpreting the payload is left to the caller.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate a raw response for the request.
    async fn generate(&self, request: &StoryRequest) -> GenerationResult<RawResponse>;

    /// Name of the provider, for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for requests.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D> StoryDriver for Arc<D>
where
    D: StoryDriver + ?Sized,
{
    async fn generate(&self, request: &StoryRequest) -> GenerationResult<RawResponse> {
        (**self).generate(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
