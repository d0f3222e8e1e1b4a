//! Plain text output formatter

use super::{ClassificationRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Placeholder for absent values
const ABSENT: &str = "-";

/// Plain text formatter - one tab separated line per sentence
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &ClassificationRecord) -> Result<()> {
        write!(
            self.writer,
            "{}\t{}\t{}\t{}",
            record.text,
            record.intent.as_deref().unwrap_or(ABSENT),
            record.context.as_deref().unwrap_or(ABSENT),
            record.payload.as_deref().unwrap_or(ABSENT),
        )?;
        if let Some(rule) = &record.rule {
            write!(self.writer, "\t{rule}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
