//! Response format error types.

/// A response body that could not be read as structured data.
#[derive(Debug, Clone)]
pub struct FormatError {
    /// What went wrong while parsing
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl FormatError {
    /// Create a new FormatError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use aetheria_error::FormatError;
    ///
    /// let err = FormatError::new("expected value at line 1 column 1");
    /// assert!(format!("{}", err).contains("Invalid response format"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Format Error: Invalid response format: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for FormatError {}

#[cfg(feature = "json")]
impl From<serde_json::Error> for FormatError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        FormatError::new(err.to_string())
    }
}
