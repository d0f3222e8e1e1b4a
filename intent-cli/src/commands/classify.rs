//! Classify command implementation

use anyhow::{Context, Result};
use clap::Args;
use intent_core::{observer_for, IntentClassifier};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::input::collect_sentences;
use crate::language_source::LanguageSource;
use crate::output::{create_formatter, ClassificationRecord, OutputFormat};

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Sentences to classify
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob), one sentence per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Embedded language code [default: en]
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// External language configuration file
    #[arg(short = 'c', long, value_name = "FILE", conflicts_with = "language")]
    pub language_config: Option<PathBuf>,

    /// CLI configuration file
    #[arg(long, value_name = "FILE", env = "INTENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Include the matched rule name in the output
    #[arg(long)]
    pub show_rule: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log which rule decided each intent and context
    #[arg(long)]
    pub debug: bool,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let debug = self.debug || config.classification.debug;
        self.init_logging(debug);

        log::info!("Starting classification");
        log::debug!("Arguments: {:?}", self);

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&config.output.default_format)?,
        };

        let language_config = self
            .language_config
            .as_deref()
            .or(config.classification.language_config.as_deref());
        let code = self
            .language
            .as_deref()
            .unwrap_or(&config.classification.default_language);
        let tagger = LanguageSource::from_args(language_config, code).load()?;

        let sentences = collect_sentences(&self.text, &self.input)?;
        log::info!("Classifying {} sentences", sentences.len());

        let include_rule = self.show_rule || config.output.include_rule;
        let records = sentences
            .par_iter()
            .map(|text| -> intent_core::Result<ClassificationRecord> {
                let classifier =
                    IntentClassifier::with_tagger(text, tagger.as_ref(), observer_for(debug))?;
                Ok(ClassificationRecord::from_classifier(&classifier, include_rule))
            })
            .collect::<intent_core::Result<Vec<_>>>()
            .context("Failed to classify input")?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        for record in &records {
            formatter.format_record(record)?;
        }
        formatter.finish()?;

        log::info!("Classification complete");
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self, debug: bool) {
        if self.quiet {
            return;
        }

        let log_level = match (self.verbose, debug) {
            (0, false) => "warn",
            (0, true) | (1, true) => "warn,intent_core=debug",
            (1, false) => "info",
            (2, _) => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running under tests.
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
