//! Parsing and validation of story payloads.

use aetheria_core::{RawResponse, Story, Tone};
use aetheria_error::{FormatError, GenerationResult, ValidationError, ValidationErrorKind};
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::{error, warn};

const REQUIRED_FIELDS: [&str; 3] = ["title", "content", "tone"];

/// Parse a raw payload into a [`Story`].
///
/// The payload must be a JSON object carrying string `title`, `content` and
/// `tone` fields, with `tone` naming one of the seven [`Tone`] values exactly.
/// Unknown tones are rejected, never mapped to a default.
///
/// # Errors
///
/// - [`FormatError`] if the payload is not JSON.
/// - [`ValidationError`] if it is not an object, a field is missing or not a
///   string, or the tone is unknown.
///
/// # Examples
///
/// ```
/// use aetheria_core::{RawResponse, Tone};
/// use aetheria_story::parse_story;
///
/// let raw = RawResponse::new(r#"{"title":"T","content":"C","tone":"CALM"}"#);
/// let story = parse_story(&raw).unwrap();
/// assert_eq!(*story.tone(), Tone::Calm);
/// ```
pub fn parse_story(raw: &RawResponse) -> GenerationResult<Story> {
    let value: Value = serde_json::from_str(raw.text().trim()).map_err(|e| {
        error!(error = %e, "Failed to parse story payload");
        FormatError::from(e)
    })?;

    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            let found = json_type(&other);
            error!(found, "Story payload is not an object");
            return Err(
                ValidationError::new(ValidationErrorKind::NotAnObject(found.to_string())).into(),
            );
        }
    };

    let title = string_field(&fields, "title")?;
    let content = string_field(&fields, "content")?;
    let tone_name = string_field(&fields, "tone")?;

    let tone = Tone::from_str(tone_name).map_err(|_| {
        warn!(tone = tone_name, "Generator returned a tone outside the enumeration");
        ValidationError::new(ValidationErrorKind::UnknownTone(tone_name.to_string()))
    })?;

    let extra: Vec<&str> = fields
        .keys()
        .map(String::as_str)
        .filter(|key| !REQUIRED_FIELDS.contains(key))
        .collect();
    if !extra.is_empty() {
        warn!(?extra, "Ignoring unexpected fields in story payload");
    }

    Ok(Story::new(title, content, tone))
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    name: &str,
) -> Result<&'a str, ValidationError> {
    match fields.get(name) {
        None | Some(Value::Null) => {
            error!(field = name, "Story payload is missing a required field");
            Err(ValidationError::new(ValidationErrorKind::MissingField(
                name.to_string(),
            )))
        }
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(other) => {
            error!(field = name, found = json_type(other), "Story field has the wrong type");
            Err(ValidationError::new(ValidationErrorKind::InvalidFieldType {
                field: name.to_string(),
                expected: "string".to_string(),
            }))
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
