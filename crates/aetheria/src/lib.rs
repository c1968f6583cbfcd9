//! Aetheria: short stories from a prompt, tagged with their emotional tone
//! and revealed one letter at a time.
//!
//! # Example
//!
//! ```no_run
//! use aetheria::{GeminiClient, RevealSession, Studio};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! aetheria::init_tracing(aetheria::LogFormat::Pretty);
//!
//! let mut studio = Studio::new(GeminiClient::from_env()?);
//! let (session, _events) = RevealSession::with_channel(Duration::from_millis(15));
//!
//! if let Some(story) = studio.submit("A lighthouse at the end of time").await? {
//!     println!("{} [{}]", story.title(), story.tone());
//! }
//! studio.reveal(&session);
//! # Ok(())
//! # }
//! ```

mod observability;
mod studio;

pub use observability::{LogFormat, init_tracing};
pub use studio::Studio;

pub use aetheria_core::{
    RawResponse, Story, StoryPrompt, StoryRequest, StoryRequestBuilder, Tone,
    story_response_schema,
};
pub use aetheria_error::{
    ConfigError, ConfigErrorKind, ErrorCategory, FormatError, GENERIC_FAILURE_MESSAGE,
    GenerationError, GenerationErrorKind, GenerationResult, TransportError, TransportErrorKind,
    ValidationError, ValidationErrorKind,
};
pub use aetheria_interface::StoryDriver;
pub use aetheria_models::{GeminiClient, GeminiConfig, GeminiConfigBuilder};
pub use aetheria_reveal::{
    ChannelObserver, DEFAULT_CHAR_DELAY, Directive, RevealEvent, RevealObserver, RevealPhase,
    RevealSession, RevealState, Revealer,
};
pub use aetheria_story::{StoryService, parse_story};
