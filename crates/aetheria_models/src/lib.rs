//! LLM provider integrations for Aetheria.
//!
//! Each provider implements [`aetheria_interface::StoryDriver`]. Gemini is the
//! only provider today and is enabled by the default `gemini` feature.

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
    GeminiClient, GeminiConfig, GeminiConfigBuilder, GeminiContent, GeminiPart, GeminiRequest,
    GeminiResponse, GenerationConfig, PromptFeedback, UsageMetadata, extract_text,
};
