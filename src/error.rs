//! Operational errors.
//!
//! Validation failures are not errors in this sense; they live on the form as
//! [`ValidationError`](crate::form::ValidationError) values. This type covers
//! the things that can actually go wrong around the form: terminal I/O,
//! opening the log file, and writing JSON output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactFormError {
    /// Terminal or stdout I/O failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Could not create or open the log file
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid `CONTACT_FORM_LOG` filter directive
    #[error("invalid log filter {directive:?}: {message}")]
    LogFilter { directive: String, message: String },

    /// A global tracing subscriber was already installed
    #[error("logging already initialised")]
    LoggingAlreadyInitialised,

    /// Serialising the submission failed
    #[error("failed to serialise submission: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type FormResult<T> = Result<T, ContactFormError>;
