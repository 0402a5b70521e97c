//! Error types for the wordtally library.
//!
//! The frequency queries themselves are total and never fail. Errors only
//! arise at the edges: reading input text from files or stdin, serializing
//! results, and validating command-line input. All of them are represented by
//! the [`WordTallyError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordtally::error::{Result, WordTallyError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordTallyError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordtally operations.
#[derive(Error, Debug)]
pub enum WordTallyError {
    /// I/O errors (reading files, stdin, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with WordTallyError.
pub type Result<T> = std::result::Result<T, WordTallyError>;

impl WordTallyError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordTallyError::InvalidArgument(msg.into())
    }
}
