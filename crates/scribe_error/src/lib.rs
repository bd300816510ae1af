//! Error types for the Scribe library.
//!
//! This crate provides the foundation error types used throughout the Scribe
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scribe_error::{ScribeResult, HttpError};
//!
//! fn fetch_data() -> ScribeResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod config;
mod error;
mod http;
mod json;
mod retrieval;

pub use channel::{ChannelError, ChannelErrorKind};
pub use config::ConfigError;
pub use error::{ScribeError, ScribeErrorKind, ScribeResult};
pub use http::HttpError;
pub use json::JsonError;
pub use retrieval::{RetrievalError, RetrievalErrorKind};
