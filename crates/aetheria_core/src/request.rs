//! Structured generation request and raw response.

use crate::{StoryPrompt, Tone, story_response_schema};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::Serialize;
use serde_json::Value;

/// Lower bound of the suggested story length, in words.
pub const DEFAULT_MIN_WORDS: u32 = 150;

/// Upper bound of the suggested story length, in words.
pub const DEFAULT_MAX_WORDS: u32 = 300;

/// A provider-neutral request for one story.
///
/// Length bounds are guidance embedded in the instruction, not enforced on
/// the response.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct StoryRequest {
    /// The user's prompt
    prompt: StoryPrompt,
    /// Suggested minimum length in words
    #[builder(default = "DEFAULT_MIN_WORDS")]
    min_words: u32,
    /// Suggested maximum length in words
    #[builder(default = "DEFAULT_MAX_WORDS")]
    max_words: u32,
    /// Schema the response must conform to
    #[builder(default = "story_response_schema()")]
    response_schema: Value,
}

impl StoryRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        let min = self.min_words.unwrap_or(DEFAULT_MIN_WORDS);
        let max = self.max_words.unwrap_or(DEFAULT_MAX_WORDS);
        if min > max {
            return Err(format!("min_words ({}) exceeds max_words ({})", min, max));
        }
        Ok(())
    }
}

impl StoryRequest {
    /// Creates a new builder for StoryRequest.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }

    /// Request a story for `prompt` with default length guidance and schema.
    pub fn for_prompt(prompt: StoryPrompt) -> Self {
        Self {
            prompt,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            response_schema: story_response_schema(),
        }
    }

    /// Instruction text sent to the generator.
    ///
    /// Embeds the prompt verbatim, gives the length guidance and asks the
    /// generator to classify its own tone.
    pub fn instruction(&self) -> String {
        let tones = Tone::expressive()
            .map(|tone| tone.as_str())
            .collect::<Vec<_>>();
        let (last, rest) = tones.split_last().map_or(("", &[][..]), |(l, r)| (*l, r));
        format!(
            "Write an immersive, atmospheric short story based on this prompt: \"{}\". \n\
             The story should be roughly {}-{} words. \n\
             Analyze the emotional core of the story and categorize its tone as one of: {}, or {}.",
            self.prompt.as_str(),
            self.min_words,
            self.max_words,
            rest.join(", "),
            last
        )
    }
}

/// Textual payload of a generation response, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::From, derive_more::Display)]
#[display("{_0}")]
pub struct RawResponse(String);

impl RawResponse {
    /// Wrap a payload.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The payload text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawResponse {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(text: &str) -> StoryPrompt {
        StoryPrompt::new(text).unwrap()
    }

    #[test]
    fn test_instruction_embeds_prompt_and_guidance() {
        let request = StoryRequest::for_prompt(prompt("A lighthouse at the end of time"));
        let text = request.instruction();
        assert!(text.contains("\"A lighthouse at the end of time\""));
        assert!(text.contains("roughly 150-300 words"));
        assert!(text.ends_with("HAPPY, SAD, INTENSE, MYSTERIOUS, CALM, or HOPEFUL."));
    }

    #[test]
    fn test_builder_defaults_match_for_prompt() {
        let built = StoryRequest::builder()
            .prompt(prompt("rain"))
            .build()
            .unwrap();
        assert_eq!(built, StoryRequest::for_prompt(prompt("rain")));
    }

    #[test]
    fn test_builder_rejects_inverted_bounds() {
        let result = StoryRequest::builder()
            .prompt(prompt("rain"))
            .min_words(500u32)
            .max_words(100u32)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_length_guidance() {
        let request = StoryRequest::builder()
            .prompt(prompt("rain"))
            .min_words(50u32)
            .max_words(80u32)
            .build()
            .unwrap();
        assert!(request.instruction().contains("roughly 50-80 words"));
    }
}
