//! Part-of-speech tags
//!
//! Tags are short Penn-Treebank style codes. The classifier only ever needs
//! to compare them: exact equality, prefix tests (`VBP` is a kind of `VB`)
//! and pattern matches anywhere inside the code (`PRP$` matches `PRP`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IntentError, Result};

/// Noun, singular or mass
pub const NOUN: &str = "NN";
/// Verb, base form
pub const BASE_VERB: &str = "VB";
/// Verb, non-3rd person singular present
pub const PRESENT_TENSE_VERB: &str = "VBP";
/// Preposition or subordinating conjunction
pub const PREPOSITION: &str = "IN";
/// Adjective
pub const ADJECTIVE: &str = "JJ";
/// Determiner
pub const DETERMINER: &str = "DT";
/// Personal pronoun (also matches possessive `PRP$`)
pub const PERSONAL_PRONOUN: &str = "PRP";
/// The word "to"
pub const TO: &str = "TO";
/// Prefix shared by `WDT`, `WP`, `WP$` and `WRB`
pub const WH_PREFIX: &str = "W";

/// A part-of-speech code attached to one token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Create a tag from its code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The tag code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact comparison against a code
    #[inline]
    pub fn is(&self, code: &str) -> bool {
        self.0 == code
    }

    /// Prefix comparison (`VBP` has prefix `VB`)
    #[inline]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Strict or prefix comparison, as used by type filtered lookups
    #[inline]
    pub fn matches_type(&self, code: &str, strict: bool) -> bool {
        if strict {
            self.is(code)
        } else {
            self.has_prefix(code)
        }
    }

    /// Literal pattern match anywhere in the code (`PRP$` contains `PRP`)
    #[inline]
    pub fn contains(&self, pattern: &str) -> bool {
        self.0.contains(pattern)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Tag {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Pattern searched for anywhere inside a tag code
#[derive(Debug, Clone)]
pub enum TagPattern {
    /// Plain substring
    Literal(String),
    /// Regular expression, unanchored
    Regex(Regex),
}

impl TagPattern {
    /// Substring pattern; `NN` matches `NN`, `NNS` and `NNP`
    pub fn literal(code: impl Into<String>) -> Self {
        TagPattern::Literal(code.into())
    }

    /// Regular expression pattern such as `^VB[DP]?$`
    pub fn regex(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(TagPattern::Regex)
            .map_err(|e| IntentError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    /// Whether the tag matches
    pub fn is_match(&self, tag: &Tag) -> bool {
        match self {
            TagPattern::Literal(code) => tag.contains(code),
            TagPattern::Regex(re) => re.is_match(tag.as_str()),
        }
    }

    /// The pattern source
    pub fn as_str(&self) -> &str {
        match self {
            TagPattern::Literal(code) => code,
            TagPattern::Regex(re) => re.as_str(),
        }
    }
}

impl fmt::Display for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
