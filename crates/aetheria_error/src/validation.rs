//! Validation error types.

/// Ways a parsed response (or an outgoing prompt) can fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Prompt is empty or whitespace only
    #[display("Prompt is empty or contains only whitespace")]
    EmptyPrompt,
    /// Top-level value is not an object
    #[display("Expected a JSON object, found {_0}")]
    NotAnObject(String),
    /// A required field is absent
    #[display("Missing required field '{_0}'")]
    MissingField(String),
    /// A field is present with the wrong type
    #[display("Field '{field}' must be a {expected}")]
    InvalidFieldType {
        /// Field name
        field: String,
        /// Expected JSON type
        expected: String,
    },
    /// Tone outside the closed enumeration
    #[display("Unknown tone '{_0}'")]
    UnknownTone(String),
}

/// Validation error with source location.
///
/// # Examples
///
/// ```
/// use aetheria_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::UnknownTone("EXCITED".into()));
/// assert!(format!("{}", err).contains("EXCITED"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}
