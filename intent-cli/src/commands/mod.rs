//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use intent_core::language::EMBEDDED_LANGUAGES;

use crate::output::OutputFormat;

pub mod classify;
pub mod generate_config;
pub mod validate;

/// Extract intent and context words from command sentences
#[derive(Debug, Parser)]
#[command(name = "intent", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify sentences into intent and context
    Classify(classify::ClassifyArgs),

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List embedded languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Classify(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Listing text, one entry per line
    pub fn render(&self) -> String {
        match self {
            ListCommands::Languages => EMBEDDED_LANGUAGES
                .iter()
                .map(|(code, name)| format!("{code}\t{name}\n"))
                .collect(),
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .map(|format| format!("{}\t{}\n", format.as_str(), format.description()))
                .collect(),
        }
    }
}
