//! Core data types for the Aetheria story generation library.
//!
//! This crate provides the data model shared by the story service, the
//! provider drivers and the presentation shell.

mod prompt;
mod request;
mod schema;
mod story;
mod tone;

pub use prompt::StoryPrompt;
pub use request::{
    DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, RawResponse, StoryRequest, StoryRequestBuilder,
};
pub use schema::story_response_schema;
pub use story::Story;
pub use tone::Tone;
