//! Data transfer objects for the Gemini REST API.

use aetheria_core::{RawResponse, StoryRequest};
use aetheria_error::FormatError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A content block: one turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiContent {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A single part of a content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on thought-summary parts, which are not part of the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// Generation options, including the structured-output constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `application/json`
    pub response_mime_type: String,
    /// OpenAPI-subset schema the reply must follow
    pub response_schema: Value,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output token cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents
    pub contents: Vec<GeminiContent>,
    /// Generation options
    pub generation_config: GenerationConfig,
}

impl GeminiRequest {
    /// Build the wire request for a story.
    pub fn from_story_request(
        request: &StoryRequest,
        temperature: Option<f32>,
        max_output_tokens: Option<u32>,
    ) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(request.instruction()),
                    thought: None,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema().clone(),
                temperature,
                max_output_tokens,
            },
        }
    }
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<GeminiContent>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt itself, present when it was blocked.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Block reason, if any
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token accounting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    /// Tokens across candidates
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

/// Envelope returned by `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Prompt feedback
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    /// Token usage
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

/// Pull the answer text out of the first candidate.
///
/// Concatenates every non-thought text part and trims the result.
///
/// # Errors
///
/// Returns [`FormatError`] if there is no candidate or no text.
#[track_caller]
pub fn extract_text(response: &GeminiResponse) -> Result<RawResponse, FormatError> {
    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
            .unwrap_or("no candidates returned");
        return Err(FormatError::new(format!("empty response: {}", reason)));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter(|part| part.thought != Some(true))
        .filter_map(|part| part.text.as_deref())
        .collect();

    let text = text.trim();
    if text.is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(FormatError::new(format!(
            "candidate has no text (finish reason: {})",
            reason
        )));
    }

    Ok(RawResponse::new(text))
}
