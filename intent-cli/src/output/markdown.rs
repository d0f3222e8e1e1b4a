//! Markdown output formatter

use super::{ClassificationRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs records as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
    classified: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
            classified: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| # | Sentence | Intent | Context | Payload |")?;
        writeln!(self.writer, "|---|----------|--------|---------|---------|")?;
        Ok(())
    }
}

fn cell(value: Option<&str>) -> String {
    match value {
        Some(value) => escape(value),
        None => "*none*".to_string(),
    }
}

fn escape(value: &str) -> String {
    value.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &ClassificationRecord) -> Result<()> {
        if self.record_count == 0 {
            self.write_header()?;
        }
        self.record_count += 1;
        if record.intent.is_some() {
            self.classified += 1;
        }

        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} |",
            self.record_count,
            escape(&record.text),
            cell(record.intent.as_deref()),
            cell(record.context.as_deref()),
            cell(record.payload.as_deref()),
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total sentences: {} ({} with an intent)*",
            self.record_count, self.classified
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
