//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;

use crate::error::CliError;

/// Sentences from arguments first, then from each matched file in order
pub fn collect_sentences(texts: &[String], patterns: &[String]) -> Result<Vec<String>> {
    if texts.is_empty() && patterns.is_empty() {
        return Err(CliError::NoInput.into());
    }

    let mut sentences: Vec<String> = texts
        .iter()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    if !patterns.is_empty() {
        for path in resolve_patterns(patterns)? {
            sentences.extend(FileReader::read_sentences(&path)?);
        }
    }

    Ok(sentences)
}
