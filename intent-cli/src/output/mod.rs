//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use intent_core::IntentClassifier;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::CliError;

/// One classified sentence as written by the formatters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// The sentence as given
    pub text: String,
    pub intent: Option<String>,
    pub context: Option<String>,
    /// Text after the context word
    pub payload: Option<String>,
    /// Name of the cascade rule that picked the intent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl ClassificationRecord {
    /// Collect everything the formatters need from a classifier
    pub fn from_classifier(classifier: &IntentClassifier, include_rule: bool) -> Self {
        let result = classifier.get();
        Self {
            text: classifier.sentence().text().to_string(),
            intent: result.intent,
            context: result.context,
            payload: classifier.payload(),
            rule: include_rule
                .then(|| classifier.matched_rule().map(|rule| rule.name().to_string()))
                .flatten(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single classification
    fn format_record(&mut self, record: &ClassificationRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab separated: sentence, intent, context, payload
    Text,
    /// JSON array of classification records
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn parse(name: &str) -> Result<Self, CliError> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::UnknownFormat(name.to_string()))
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Tab separated sentence, intent, context and payload",
            OutputFormat::Json => "JSON array of classification records",
            OutputFormat::Markdown => "Markdown table with a summary line",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Create the formatter for a format
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
