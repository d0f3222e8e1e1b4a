//! Error handling for the CLI application

use std::path::PathBuf;
use thiserror::Error;

/// Failures specific to the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither sentences nor input files were given
    #[error("no input: pass sentences as arguments or files with --input")]
    NoInput,

    /// Glob pattern could not be parsed
    #[error("invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Patterns were valid but matched no files
    #[error("no files found matching: {}", .0.join(", "))]
    NoFilesFound(Vec<String>),

    /// Output format name not recognised
    #[error("unknown output format '{0}' (expected text, json or markdown)")]
    UnknownFormat(String),

    /// Language configuration failed to load
    #[error("invalid language configuration {}: {reason}", .path.display())]
    InvalidLanguageConfig { path: PathBuf, reason: String },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
