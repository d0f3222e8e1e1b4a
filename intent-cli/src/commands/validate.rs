//! Validate command implementation

use anyhow::Result;
use clap::Args;
use intent_core::{IntentClassifier, LexiconTagger, NoopObserver, Tagger};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,

    /// Sentence to classify with the configuration as a smoke test
    #[arg(short, long, value_name = "TEXT")]
    pub sample: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        let tagger = match LexiconTagger::from_file(&self.language_config) {
            Ok(tagger) => tagger,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                return Err(CliError::InvalidLanguageConfig {
                    path: self.language_config.clone(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        let (context_rules, suffix_rules) = tagger.rule_counts();
        println!("✓ Configuration is valid!");
        println!("  Language code: {}", tagger.language_code());
        println!("  Language name: {}", tagger.language_name());
        println!("  Lexicon entries: {}", tagger.lexicon_len());
        println!("  Context rules: {context_rules}");
        println!("  Suffix rules: {suffix_rules}");

        if let Some(sample) = &self.sample {
            let classifier =
                IntentClassifier::with_tagger(sample, &tagger, Arc::new(NoopObserver))?;
            let result = classifier.get();
            println!("  Sample: {sample}");
            println!("    intent: {}", result.intent.as_deref().unwrap_or("-"));
            println!("    context: {}", result.context.as_deref().unwrap_or("-"));
        }

        Ok(())
    }
}
