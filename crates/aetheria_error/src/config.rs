//! Configuration error types.

/// Reasons a client could not be configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Neither `GEMINI_API_KEY` nor `API_KEY` holds a usable key
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Settings file or `AETHERIA_*` variables could not be read
    #[display("Failed to load settings: {_0}")]
    Settings(String),
    /// HTTP client could not be built from the settings
    #[display("Failed to create HTTP client: {_0}")]
    HttpClient(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use aetheria_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingApiKey);
/// assert_eq!(err.kind(), &ConfigErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
