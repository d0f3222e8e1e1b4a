//! Runtime rule tables built from configuration

use std::collections::HashMap;

use crate::language::config::{ContextRuleConfig, SuffixRuleConfig};

/// Matches a tag exactly or by prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSelector {
    Exact(String),
    Prefix(String),
}

impl TagSelector {
    /// Parse `NN*` as a prefix selector and anything else as exact
    pub fn parse(selector: &str) -> Self {
        match selector.strip_suffix('*') {
            Some(prefix) => TagSelector::Prefix(prefix.to_string()),
            None => TagSelector::Exact(selector.to_string()),
        }
    }

    #[inline]
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            TagSelector::Exact(code) => tag == code,
            TagSelector::Prefix(prefix) => tag.starts_with(prefix.as_str()),
        }
    }
}

/// A list of selectors; empty means "any tag"
#[derive(Debug, Clone, Default)]
pub struct SelectorSet(Vec<TagSelector>);

impl SelectorSet {
    pub fn new(selectors: &[String]) -> Self {
        Self(selectors.iter().map(|s| TagSelector::parse(s)).collect())
    }

    #[inline]
    pub fn matches(&self, tag: &str) -> bool {
        self.0.is_empty() || self.0.iter().any(|s| s.matches(tag))
    }
}

/// What a context rule looks at on the previous token
#[derive(Debug, Clone)]
pub enum Trigger {
    PreviousTag(TagSelector),
    PreviousWord(String),
}

/// Contextual rewrite: `previous` + `from` → `to`
#[derive(Debug, Clone)]
pub struct ContextRule {
    trigger: Trigger,
    from: SelectorSet,
    to: String,
}

impl ContextRule {
    pub fn from_config(config: &ContextRuleConfig) -> Option<Self> {
        let trigger = match (&config.previous_tag, &config.previous_word) {
            (Some(tag), None) => Trigger::PreviousTag(TagSelector::parse(tag)),
            (None, Some(word)) => Trigger::PreviousWord(word.to_lowercase()),
            _ => return None,
        };
        Some(Self {
            trigger,
            from: SelectorSet::new(&config.from),
            to: config.to.clone(),
        })
    }

    /// Rewritten tag, if the rule applies
    pub fn apply(&self, previous_word: &str, previous_tag: &str, tag: &str) -> Option<&str> {
        let triggered = match &self.trigger {
            Trigger::PreviousTag(selector) => selector.matches(previous_tag),
            Trigger::PreviousWord(word) => previous_word.eq_ignore_ascii_case(word),
        };
        (triggered && self.from.matches(tag)).then_some(self.to.as_str())
    }
}

/// Suffix rewrite for words missing from the lexicon
#[derive(Debug, Clone)]
pub struct SuffixRule {
    suffix: String,
    from: SelectorSet,
    to: String,
}

impl SuffixRule {
    pub fn from_config(config: &SuffixRuleConfig) -> Self {
        Self {
            suffix: config.suffix.to_lowercase(),
            from: SelectorSet::new(&config.from),
            to: config.to.clone(),
        }
    }

    pub fn apply(&self, word: &str, tag: &str) -> Option<&str> {
        (word.len() > self.suffix.len()
            && word.to_lowercase().ends_with(&self.suffix)
            && self.from.matches(tag))
        .then_some(self.to.as_str())
    }
}

/// Word lookup table
#[derive(Debug, Clone, Default)]
pub struct LexiconTable {
    entries: HashMap<String, Vec<String>>,
}

impl LexiconTable {
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// All readings of a word, trying the exact form before the lower-case one
    pub fn readings(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .map(Vec::as_slice)
            .filter(|tags| !tags.is_empty())
    }

    /// Default reading of a word
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.readings(word).map(|tags| tags[0].as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
