//! Error types for the chunklex library.
//!
//! All fallible operations return [`ChunklexError`] through the crate-wide
//! [`Result`] alias. Tokenization itself never fails: unmatched input is
//! reported as `_unknown_` tokens instead of errors. Errors only come from
//! building the rule table, validating configuration, or loading rule files.
//!
//! # Examples
//!
//! ```
//! use chunklex::error::{ChunklexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ChunklexError::invalid_config("step size must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for chunklex operations.
#[derive(Error, Debug)]
pub enum ChunklexError {
    /// A rule with the same pattern and ignored status already exists.
    #[error("Rule for {name} with value ({pattern}) already exists")]
    DuplicateRule {
        /// Name of the rejected rule.
        name: String,
        /// Pattern of the rejected rule.
        pattern: String,
    },

    /// The pattern could not be compiled.
    #[error("Invalid pattern ({pattern}): {reason}")]
    InvalidPattern {
        /// The offending pattern as supplied by the caller.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// Invalid tokenizer configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (rule files, input text)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ChunklexError.
pub type Result<T> = std::result::Result<T, ChunklexError>;

impl ChunklexError {
    /// Create a new duplicate rule error.
    pub fn duplicate_rule<N: Into<String>, P: Into<String>>(name: N, pattern: P) -> Self {
        ChunklexError::DuplicateRule {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Create a new invalid pattern error.
    pub fn invalid_pattern<P: Into<String>, R: ToString>(pattern: P, reason: R) -> Self {
        ChunklexError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ChunklexError::InvalidConfig(msg.into())
    }

    /// Returns true if this error was caused by a duplicate rule.
    pub fn is_duplicate_rule(&self) -> bool {
        matches!(self, ChunklexError::DuplicateRule { .. })
    }
}
