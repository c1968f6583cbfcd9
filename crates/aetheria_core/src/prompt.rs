//! User-supplied story prompt.

use aetheria_error::{ValidationError, ValidationErrorKind};
use serde::Serialize;

/// A prompt that is known to contain something other than whitespace.
///
/// The text is kept exactly as the user typed it; only the emptiness check
/// looks at the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{_0}")]
pub struct StoryPrompt(String);

impl StoryPrompt {
    /// Create a prompt, rejecting empty or whitespace-only text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::EmptyPrompt`] when the trimmed text is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use aetheria_core::StoryPrompt;
    ///
    /// assert!(StoryPrompt::new("A lighthouse at the end of time").is_ok());
    /// assert!(StoryPrompt::new("   \n\t").is_err());
    /// ```
    #[track_caller]
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyPrompt));
        }
        Ok(Self(text))
    }

    /// The prompt text as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StoryPrompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StoryPrompt {
    type Error = ValidationError;

    #[track_caller]
    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl TryFrom<&str> for StoryPrompt {
    type Error = ValidationError;

    #[track_caller]
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_original_text() {
        let prompt = StoryPrompt::new("  a fox in the snow ").unwrap();
        assert_eq!(prompt.as_str(), "  a fox in the snow ");
    }

    #[test]
    fn test_rejects_blank() {
        for blank in ["", " ", "\n\t  \r\n"] {
            let err = StoryPrompt::new(blank).unwrap_err();
            assert_eq!(err.kind(), &ValidationErrorKind::EmptyPrompt);
        }
    }

    #[test]
    fn test_try_from() {
        assert!(StoryPrompt::try_from("dragons").is_ok());
        assert!(StoryPrompt::try_from(String::new()).is_err());
    }
}
