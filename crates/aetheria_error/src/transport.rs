//! Transport error types.

/// Transport-level failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// The request never produced a response (DNS, TLS, timeout, reset)
    #[display("Request failed: {_0}")]
    Request(String),
    /// The server answered with a non-success status
    #[display("HTTP {status_code} error: {message}")]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
}

/// Network or call failure with source location.
///
/// # Examples
///
/// ```
/// use aetheria_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::Status {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    kind: TransportErrorKind,
    line: u32,
    file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TransportErrorKind {
        &self.kind
    }

    /// HTTP status code, when the server responded at all.
    pub fn status_code(&self) -> Option<u16> {
        match &self.kind {
            TransportErrorKind::Status { status_code, .. } => Some(*status_code),
            TransportErrorKind::Request(_) => None,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TransportError::new(TransportErrorKind::Status {
                status_code: status.as_u16(),
                message: err.to_string(),
            }),
            None => TransportError::new(TransportErrorKind::Request(err.to_string())),
        }
    }
}
