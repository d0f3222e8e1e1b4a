//! Core error types
//!
//! Lookups that find nothing are not errors: they resolve to `None`. The
//! variants below cover configuration problems and taggers that break the
//! one-tag-per-token contract.

use thiserror::Error;

/// Errors raised by the core library
#[derive(Error, Debug)]
pub enum IntentError {
    /// No embedded language configuration for this code
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The requested language code
        code: String,
    },

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A tag pattern is not a valid regular expression
    #[error("invalid tag pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// The tagging collaborator returned sequences of different lengths
    #[error("tagger returned {actual} {what} for {expected} tokens")]
    TaggerContract {
        /// Which sequence disagreed (`tokens` or `tags`)
        what: &'static str,
        /// Length of the original-case token sequence
        expected: usize,
        /// Length that was returned
        actual: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, IntentError>;
