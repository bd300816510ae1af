//! Top-level error wrapper types.

use crate::{ChannelError, ConfigError, HttpError, JsonError, RetrievalError};

/// This is the foundation error enum for the Scribe workspace.
///
/// # Examples
///
/// ```
/// use scribe_error::{ScribeError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ScribeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScribeErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Channel validation error
    #[from(ChannelError)]
    Channel(ChannelError),
    /// Message retrieval error
    #[from(RetrievalError)]
    Retrieval(RetrievalError),
}

/// Scribe error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scribe_error::{ScribeResult, ConfigError};
///
/// fn might_fail() -> ScribeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scribe Error: {}", _0)]
pub struct ScribeError(Box<ScribeErrorKind>);

impl ScribeError {
    /// Create a new error from a kind.
    pub fn new(kind: ScribeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScribeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScribeErrorKind
impl<T> From<T> for ScribeError
where
    T: Into<ScribeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scribe operations.
///
/// # Examples
///
/// ```
/// use scribe_error::{ScribeResult, HttpError};
///
/// fn fetch_data() -> ScribeResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type ScribeResult<T> = std::result::Result<T, ScribeError>;
