//! Structured-output schema for story responses.

use crate::Tone;
use serde_json::{Value, json};

/// Response schema in the OpenAPI subset accepted by Gemini's
/// `generationConfig.responseSchema`.
///
/// An object with exactly `title`, `content` and `tone`, all required, with
/// `tone` restricted to the seven [`Tone`] names.
pub fn story_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "The title of the story."
            },
            "content": {
                "type": "STRING",
                "description": "The body text of the story."
            },
            "tone": {
                "type": "STRING",
                "enum": Tone::names(),
                "description": "The emotional tone of the story."
            }
        },
        "required": ["title", "content", "tone"]
    })
}
