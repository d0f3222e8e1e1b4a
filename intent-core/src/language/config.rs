//! Configuration structures and validation
//!
//! This module defines the TOML schema for language configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub tags: TagDefaults,
    #[serde(default)]
    pub lexicon: Lexicon,
    #[serde(default)]
    pub context_rules: Vec<ContextRuleConfig>,
    #[serde(default)]
    pub suffix_rules: Vec<SuffixRuleConfig>,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Tags assigned to words the lexicon does not know
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDefaults {
    /// Unknown words
    #[serde(default = "default_word_tag")]
    pub default: String,
    /// Plain numbers
    #[serde(default = "default_number_tag")]
    pub number: String,
    /// Punctuation and symbols
    #[serde(default = "default_symbol_tag")]
    pub symbol: String,
}

impl Default for TagDefaults {
    fn default() -> Self {
        Self {
            default: default_word_tag(),
            number: default_number_tag(),
            symbol: default_symbol_tag(),
        }
    }
}

/// Word to tags table; the first tag is the word's default reading
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(flatten)]
    pub entries: HashMap<String, Vec<String>>,
}

/// Rewrite a tag based on the token before it
///
/// Tag selectors in `from` are exact codes, or prefixes when they end in
/// `*`. An empty `from` list matches any tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextRuleConfig {
    /// Trigger on the previous token's (already rewritten) tag
    pub previous_tag: Option<String>,
    /// Trigger on the previous token's lower-case text
    pub previous_word: Option<String>,
    #[serde(default)]
    pub from: Vec<String>,
    pub to: String,
}

/// Rewrite the tag of an unknown word based on its ending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRuleConfig {
    pub suffix: String,
    #[serde(default)]
    pub from: Vec<String>,
    pub to: String,
}

fn default_word_tag() -> String {
    "NN".to_string()
}

fn default_number_tag() -> String {
    "CD".to_string()
}

fn default_symbol_tag() -> String {
    "SYM".to_string()
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        for (name, value) in [
            ("default", &self.tags.default),
            ("number", &self.tags.number),
            ("symbol", &self.tags.symbol),
        ] {
            if value.trim().is_empty() {
                return Err(format!("Tag '{name}' must not be empty"));
            }
        }

        if let Some((word, _)) = self.lexicon.entries.iter().find(|(_, tags)| tags.is_empty()) {
            return Err(format!("Lexicon entry '{word}' has no tags"));
        }

        for (index, rule) in self.context_rules.iter().enumerate() {
            match (&rule.previous_tag, &rule.previous_word) {
                (Some(_), None) | (None, Some(_)) => {}
                _ => {
                    return Err(format!(
                        "Context rule {index} needs exactly one of previous_tag or previous_word"
                    ))
                }
            }
            if rule.to.trim().is_empty() {
                return Err(format!("Context rule {index} has an empty target tag"));
            }
        }

        for (index, rule) in self.suffix_rules.iter().enumerate() {
            if rule.suffix.is_empty() {
                return Err(format!("Suffix rule {index} has an empty suffix"));
            }
            if rule.to.trim().is_empty() {
                return Err(format!("Suffix rule {index} has an empty target tag"));
            }
        }

        Ok(())
    }
}
