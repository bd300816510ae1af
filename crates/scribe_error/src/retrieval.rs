//! Message retrieval error types.
//!
//! Failures of the page-fetch capability. Retrieval is fail-fast: the first
//! error aborts the whole operation and is propagated unmodified, so these
//! kinds carry everything the caller needs to diagnose the fetch.

use derive_getters::Getters;

/// Retrieval error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum RetrievalErrorKind {
    /// HTTP transport failure (connection, TLS, timeout).
    #[display("Transport error: {_0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[display("API error {status}: {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, verbatim.
        message: String,
    },

    /// The response body could not be decoded into the message model.
    #[display("Decode error: {_0}")]
    Decode(String),
}

/// Retrieval error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Retrieval Error: {} at line {} in {}", kind, line, file)]
pub struct RetrievalError {
    kind: RetrievalErrorKind,
    line: u32,
    file: &'static str,
}

impl RetrievalError {
    /// Create a new RetrievalError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use scribe_error::{RetrievalError, RetrievalErrorKind};
    ///
    /// let err = RetrievalError::new(RetrievalErrorKind::Transport(
    ///     "connection reset".to_string(),
    /// ));
    /// ```
    #[track_caller]
    pub fn new(kind: RetrievalErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
