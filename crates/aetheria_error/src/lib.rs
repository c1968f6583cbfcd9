//! Error types for the Aetheria library.
//!
//! Every leaf error records the file and line where it was constructed. The
//! leaves are gathered into [`GenerationError`], the single failure type
//! surfaced by story generation.

mod config;
mod format;
mod generation;
mod transport;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use format::FormatError;
pub use generation::{
    ErrorCategory, GENERIC_FAILURE_MESSAGE, GenerationError, GenerationErrorKind,
    GenerationResult,
};
pub use transport::{TransportError, TransportErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
