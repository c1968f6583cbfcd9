//! Generated story.

use crate::Tone;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A titled short story with its emotional tone.
///
/// Produced only by a successful parse and validation of a generation
/// response; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Story {
    /// Story title
    title: String,
    /// Body text
    content: String,
    /// Emotional tone chosen by the generator
    tone: Tone,
}

impl Story {
    /// Assemble a story from already-validated parts.
    pub fn new(title: impl Into<String>, content: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tone,
        }
    }

    /// Consume the story, keeping only its body text.
    pub fn into_content(self) -> String {
        self.content
    }
}
