//! Google Gemini `generateContent` driver with structured output.

mod client;
mod config;
mod dto;

pub use client::GeminiClient;
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiConfig,
    GeminiConfigBuilder,
};
pub use dto::{
    Candidate, GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig,
    PromptFeedback, UsageMetadata, extract_text,
};
