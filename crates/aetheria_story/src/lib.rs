//! Story request service for Aetheria.
//!
//! Turns a [`StoryPrompt`](aetheria_core::StoryPrompt) into a validated
//! [`Story`](aetheria_core::Story) through an injected
//! [`StoryDriver`](aetheria_interface::StoryDriver), or fails with a
//! [`GenerationError`](aetheria_error::GenerationError).

mod parse;
mod service;

pub use parse::parse_story;
pub use service::StoryService;
