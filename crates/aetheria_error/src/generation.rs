//! Aggregate error for story generation.

use crate::{ConfigError, FormatError, TransportError, ValidationError};

/// The one message users see whenever a story could not be produced.
pub const GENERIC_FAILURE_MESSAGE: &str = "The cosmos failed to respond. Please try again later.";

/// Coarse failure category, for callers that branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorCategory {
    /// Network or call failure
    #[display("transport")]
    Transport,
    /// Response was not structured data
    #[display("format")]
    Format,
    /// Response had the wrong shape or an unknown tone
    #[display("validation")]
    Validation,
    /// Client could not be configured
    #[display("config")]
    Config,
}

/// Error variants gathered under [`GenerationError`].
#[derive(Debug, derive_more::From)]
pub enum GenerationErrorKind {
    /// Network or call failure
    Transport(TransportError),
    /// Response not parseable as structured data
    Format(FormatError),
    /// Missing field, wrong field type, or tone outside the enumeration
    Validation(ValidationError),
    /// Missing credentials or unreadable configuration
    Config(ConfigError),
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::Transport(e) => write!(f, "{}", e),
            GenerationErrorKind::Format(e) => write!(f, "{}", e),
            GenerationErrorKind::Validation(e) => write!(f, "{}", e),
            GenerationErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// The system failed to produce a story.
///
/// # Examples
///
/// ```
/// use aetheria_error::{ErrorCategory, FormatError, GenerationError};
///
/// let err: GenerationError = FormatError::new("trailing characters").into();
/// assert_eq!(err.category(), ErrorCategory::Format);
/// assert!(err.user_message().contains("try again"));
/// ```
#[derive(Debug)]
pub struct GenerationError(Box<GenerationErrorKind>);

impl GenerationError {
    /// Create a new error from a kind.
    pub fn new(kind: GenerationErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.0
    }

    /// Get the failure category.
    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            GenerationErrorKind::Transport(_) => ErrorCategory::Transport,
            GenerationErrorKind::Format(_) => ErrorCategory::Format,
            GenerationErrorKind::Validation(_) => ErrorCategory::Validation,
            GenerationErrorKind::Config(_) => ErrorCategory::Config,
        }
    }

    /// Message suitable for display to end users, whatever the cause.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generation Error: {}", self.0)
    }
}

impl std::error::Error for GenerationError {}

impl<T> From<T> for GenerationError
where
    T: Into<GenerationErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for story generation.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
