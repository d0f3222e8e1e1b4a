//! Intent CLI library
//!
//! Command-line front end for the `intent-core` classifier: argument
//! parsing, input collection, language selection and output formatting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;

pub use commands::{Cli, Commands};
pub use error::{CliError, CliResult};
