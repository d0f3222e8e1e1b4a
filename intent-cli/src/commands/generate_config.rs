//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Fill the lexicon with the words of your commands");
        println!("2. Validate your configuration:");
        println!(
            "   intent validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for classification:");
        println!(
            "   intent classify \"turn on the light\" --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language configuration for {code}
#
# Tags use the Penn Treebank codes the intent rules understand:
#   VB  base form verb        VBP present tense verb
#   NN  noun (NNS, NNP ...)   JJ  adjective
#   IN  preposition           DT  determiner
#   PRP personal pronoun      TO  the word "to"
#   WP, WDT, WRB  wh-words

[metadata]
code = "{code}"
name = "Custom Language"

# Tags for words the lexicon does not know
[tags]
default = "NN"
number = "CD"
symbol = "SYM"

# Word -> tags. The first tag is the one used; the rest are alternatives.
[lexicon]
"." = ["."]
"?" = ["."]
"," = [","]
the = ["DT"]
a = ["DT"]
my = ["PRP$"]
you = ["PRP"]
to = ["TO"]
on = ["IN"]
in = ["IN"]
what = ["WP"]
can = ["MD"]
turn = ["VB", "NN"]
play = ["VB", "NN"]
next = ["JJ"]

# Context rules rewrite a tag given the previous token. Use exactly one of
# previous_tag or previous_word. Selectors ending in "*" match by prefix.
[[context_rules]]
previous_tag = "DT"
from = ["VB", "VBP"]
to = "NN"

# Suffix rules retag words missing from the lexicon.
[[suffix_rules]]
suffix = "ing"
from = ["NN*"]
to = "VBG"

[[suffix_rules]]
suffix = "s"
from = ["NN"]
to = "NNS"
"#,
            code = self.language_code
        )
    }
}
