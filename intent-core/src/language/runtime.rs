//! Lexicon tagger
//!
//! Concrete [`Tagger`] built from a [`LanguageConfig`]. Tagging runs in two
//! passes, in the manner of a transformation based tagger:
//!
//! 1. every token gets its default reading from the lexicon, or a fallback
//!    tag (number, symbol or default word tag) when the lexicon lacks it;
//! 2. left to right, context rules rewrite a tag given the previous token,
//!    then suffix rules guess better tags for words the lexicon lacks.
//!
//! Context rules see the previous token's tag after it was rewritten.

use std::path::Path;

use crate::error::{IntentError, Result};
use crate::language::config::LanguageConfig;
use crate::language::interface::Tagger;
use crate::language::tables::{ContextRule, LexiconTable, SuffixRule};
use crate::lexer::Lexer;
use crate::tag::Tag;

/// Configurable lexicon tagger
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    code: String,
    name: String,

    lexer: Lexer,
    lexicon: LexiconTable,
    context_rules: Vec<ContextRule>,
    suffix_rules: Vec<SuffixRule>,

    default_tag: String,
    number_tag: String,
    symbol_tag: String,
}

impl LexiconTagger {
    /// Create from configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate().map_err(IntentError::InvalidConfig)?;

        let context_rules = config
            .context_rules
            .iter()
            .filter_map(ContextRule::from_config)
            .collect();
        let suffix_rules = config
            .suffix_rules
            .iter()
            .map(SuffixRule::from_config)
            .collect();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            lexer: Lexer::new(),
            lexicon: LexiconTable::new(config.lexicon.entries.clone()),
            context_rules,
            suffix_rules,
            default_tag: config.tags.default.clone(),
            number_tag: config.tags.number.clone(),
            symbol_tag: config.tags.symbol.clone(),
        })
    }

    /// Parse and build from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load an external configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("loading language configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Language name from the configuration metadata
    pub fn language_name(&self) -> &str {
        &self.name
    }

    /// Number of lexicon entries
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Number of context and suffix rules
    pub fn rule_counts(&self) -> (usize, usize) {
        (self.context_rules.len(), self.suffix_rules.len())
    }

    /// Every reading the lexicon lists for a word
    pub fn readings(&self, word: &str) -> Option<&[String]> {
        self.lexicon.readings(word)
    }

    /// Initial reading and whether it came from the lexicon
    fn initial_tag<'a>(&'a self, token: &str) -> Option<(&'a str, bool)> {
        if token.is_empty() {
            return None;
        }
        if let Some(tag) = self.lexicon.lookup(token) {
            return Some((tag, true));
        }
        let fallback = if Lexer::is_number(token) {
            &self.number_tag
        } else if Lexer::is_symbol(token) {
            &self.symbol_tag
        } else {
            &self.default_tag
        };
        Some((fallback.as_str(), false))
    }
}

impl Tagger for LexiconTagger {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.lexer.lex(text)
    }

    fn tag(&self, tokens: &[String]) -> Vec<Option<Tag>> {
        let mut tags: Vec<Option<Tag>> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let Some((initial, known)) = self.initial_tag(token) else {
                tags.push(None);
                continue;
            };
            let mut current = initial.to_string();

            if i > 0 {
                let previous_tag = tags[i - 1].as_ref().map(Tag::as_str).unwrap_or("");
                for rule in &self.context_rules {
                    if let Some(rewritten) = rule.apply(&tokens[i - 1], previous_tag, &current) {
                        current = rewritten.to_string();
                    }
                }
            }

            if !known {
                for rule in &self.suffix_rules {
                    if let Some(rewritten) = rule.apply(token, &current) {
                        current = rewritten.to_string();
                    }
                }
            }

            tags.push(Some(Tag::new(current)));
        }

        tags
    }

    fn language_code(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[metadata]
code = "test"
name = "Test Language"

[lexicon]
the = ["DT"]
turn = ["VB", "NN"]
light = ["NN"]
would = ["MD"]
"?" = ["."]

[[context_rules]]
previous_tag = "DT"
from = ["VB", "VBD", "VBP"]
to = "NN"

[[context_rules]]
previous_word = "would"
from = ["NN*"]
to = "VB"

[[suffix_rules]]
suffix = "ing"
from = ["NN*"]
to = "VBG"

[[suffix_rules]]
suffix = "s"
from = ["NN"]
to = "NNS"
"#;

    fn tagger() -> LexiconTagger {
        LexiconTagger::from_toml_str(CONFIG).unwrap()
    }

    fn codes(tagger: &LexiconTagger, text: &str) -> Vec<String> {
        let tokens = tagger.tokenize(text);
        tagger
            .tag(&tokens)
            .into_iter()
            .map(|t| t.map(|t| t.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_lexicon_readings() {
        assert_eq!(codes(&tagger(), "turn the light"), vec!["VB", "DT", "NN"]);
    }

    #[test]
    fn test_fallback_tags() {
        assert_eq!(codes(&tagger(), "zork 42 ~"), vec!["NN", "CD", "SYM"]);
        assert_eq!(codes(&tagger(), "light ?"), vec!["NN", "."]);
    }

    #[test]
    fn test_context_rule_after_determiner() {
        assert_eq!(codes(&tagger(), "the turn"), vec!["DT", "NN"]);
    }

    #[test]
    fn test_context_rule_after_word() {
        assert_eq!(codes(&tagger(), "would blorp"), vec!["MD", "VB"]);
    }

    #[test]
    fn test_suffix_rules_only_touch_unknown_words() {
        assert_eq!(codes(&tagger(), "streaming widgets"), vec!["VBG", "NNS"]);
        assert_eq!(codes(&tagger(), "the"), vec!["DT"]);
    }

    #[test]
    fn test_empty_token_is_untagged() {
        let tags = tagger().tag(&["".to_string(), "light".to_string()]);
        assert_eq!(tags[0], None);
        assert_eq!(tags[1], Some(Tag::from("NN")));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = LexiconTagger::from_toml_str(
            r#"
[metadata]
code = ""
name = "Broken"
"#,
        );
        assert!(matches!(result, Err(IntentError::InvalidConfig(_))));
    }

    #[test]
    fn test_metadata_accessors() {
        let tagger = tagger();
        assert_eq!(tagger.language_code(), "test");
        assert_eq!(tagger.language_name(), "Test Language");
        assert_eq!(tagger.lexicon_len(), 5);
        assert_eq!(tagger.readings("turn").unwrap(), ["VB", "NN"]);
        assert_eq!(tagger.rule_counts(), (2, 2));
    }
}
