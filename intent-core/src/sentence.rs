//! Tagged sentence
//!
//! Holds the original-case tokens, the lower-case tokens and one tag per
//! lower-case token, and answers pattern questions about them. Everything is
//! computed once in the constructor; afterwards the sentence is read-only.

use std::fmt;
use std::sync::Arc;

use crate::error::{IntentError, Result};
use crate::language::Tagger;
use crate::observer::{RuleEvent, RuleObserver};
use crate::tag::{self, Tag, TagPattern};

/// A sentence split into tokens and tagged with parts of speech
pub struct TaggedSentence {
    text: String,
    tokens: Vec<String>,
    lower_tokens: Vec<String>,
    tags: Vec<Option<Tag>>,
    observer: Arc<dyn RuleObserver>,
}

impl fmt::Debug for TaggedSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedSentence")
            .field("text", &self.text)
            .field("tokens", &self.tokens)
            .field("tags", &self.tags)
            .finish()
    }
}

impl TaggedSentence {
    /// Tokenize and tag a sentence
    ///
    /// The tagger tokenizes the original text and its lower-case form, and
    /// tags the lower-case tokens. A lone `s` is upper-cased before tagging
    /// so taggers do not read it as a contraction fragment.
    pub fn new(text: &str, tagger: &dyn Tagger, observer: Arc<dyn RuleObserver>) -> Result<Self> {
        let tokens = tagger.tokenize(text);
        let mut lower_tokens = tagger.tokenize(&text.to_lowercase());
        // Some capitals grow when lower-cased (`İ` gains a combining dot),
        // which can split differently; fall back to per-token lowering.
        if lower_tokens.len() != tokens.len() {
            log::debug!(
                "lower-case tokenization of {text:?} gave {} tokens, expected {}",
                lower_tokens.len(),
                tokens.len()
            );
            lower_tokens = tokens.iter().map(|token| token.to_lowercase()).collect();
        }

        let tag_input: Vec<String> = lower_tokens
            .iter()
            .map(|token| {
                if token.eq_ignore_ascii_case("s") {
                    "S".to_string()
                } else {
                    token.clone()
                }
            })
            .collect();
        let tags = tagger.tag(&tag_input);
        if tags.len() != tokens.len() {
            return Err(IntentError::TaggerContract {
                what: "tags",
                expected: tokens.len(),
                actual: tags.len(),
            });
        }

        if observer.enabled() {
            observer.observe(RuleEvent::Tagged {
                tokens: lower_tokens.clone(),
                tags: tags.clone(),
            });
        }

        Ok(Self {
            text: text.to_string(),
            tokens,
            lower_tokens,
            tags,
            observer,
        })
    }

    /// The sentence as given
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Original-case tokens
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Lower-case tokens
    pub fn lower_tokens(&self) -> &[String] {
        &self.lower_tokens
    }

    /// Tags, parallel to the lower-case tokens
    pub fn tags(&self) -> &[Option<Tag>] {
        &self.tags
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.lower_tokens.len()
    }

    /// True for a sentence with no tokens
    pub fn is_empty(&self) -> bool {
        self.lower_tokens.is_empty()
    }

    /// Lower-case token at a position
    pub fn word(&self, index: usize) -> Option<&str> {
        self.lower_tokens.get(index).map(String::as_str)
    }

    /// Tag at a position; `None` past the end or for untagged tokens
    pub fn tag(&self, index: usize) -> Option<&Tag> {
        self.tags.get(index).and_then(Option::as_ref)
    }

    /// Position of the first case-insensitive occurrence of a word
    pub fn position_of(&self, word: &str) -> Option<usize> {
        let word = word.to_lowercase();
        self.lower_tokens.iter().position(|token| *token == word)
    }

    pub(crate) fn observer(&self) -> &dyn RuleObserver {
        self.observer.as_ref()
    }

    fn trace(&self, line: impl FnOnce() -> String) {
        if self.observer.enabled() {
            self.observer.observe(RuleEvent::Trace(line()));
        }
    }

    fn tag_is(&self, index: usize, code: &str) -> bool {
        self.tag(index).is_some_and(|tag| tag.is(code))
    }

    fn tag_contains(&self, index: usize, pattern: &str) -> bool {
        self.tag(index).is_some_and(|tag| tag.contains(pattern))
    }

    fn has_type(&self, code: &str, strict: bool) -> bool {
        self.tags
            .iter()
            .flatten()
            .any(|tag| tag.matches_type(code, strict))
    }

    // Predicates

    pub fn is_one_word_statement(&self) -> bool {
        self.len() < 2
    }

    /// "can you ..." / "will you ..."
    pub fn starts_with_can_or_will(&self) -> bool {
        self.len() > 2 && matches!(self.word(0), Some("can" | "will"))
    }

    pub fn first_word_is_a_verb(&self) -> bool {
        self.tag_is(0, tag::BASE_VERB)
    }

    pub fn first_word_is_a_noun_then_determiner(&self) -> bool {
        self.len() > 2 && self.tag_is(0, tag::NOUN) && self.tag_contains(1, tag::DETERMINER)
    }

    pub fn first_word_is_a_noun_then_personal_pronoun(&self) -> bool {
        self.len() > 2
            && self.tag_is(0, tag::NOUN)
            && self.tag_contains(1, tag::PERSONAL_PRONOUN)
    }

    pub fn first_two_words_are_nouns(&self) -> bool {
        self.len() > 1 && self.tag_is(0, tag::NOUN) && self.tag_contains(1, tag::NOUN)
    }

    pub fn first_word_is_a_noun_then_to(&self) -> bool {
        self.len() > 2 && self.tag_is(0, tag::NOUN) && self.tag_contains(1, tag::TO)
    }

    pub fn has_a_verb(&self) -> bool {
        self.has_type(tag::BASE_VERB, true)
    }

    pub fn has_a_present_tense_verb(&self) -> bool {
        self.has_type(tag::PRESENT_TENSE_VERB, true)
    }

    pub fn has_preposition_and_noun(&self) -> bool {
        self.has_type(tag::NOUN, false) && self.has_type(tag::PREPOSITION, false)
    }

    /// `WDT`, `WP`, `WP$` or `WRB`
    pub fn has_a_wh_word(&self) -> bool {
        self.has_type(tag::WH_PREFIX, false)
    }

    pub fn has_an_adjective(&self) -> bool {
        self.has_type(tag::ADJECTIVE, false)
    }

    // Lookups

    /// Lower-case words whose tag equals `code` (strict) or starts with it
    pub fn words_by_type(&self, code: &str, strict: bool) -> Vec<&str> {
        self.lower_tokens
            .iter()
            .zip(&self.tags)
            .filter_map(|(word, tag)| match tag {
                Some(tag) if tag.matches_type(code, strict) => Some(word.as_str()),
                _ => None,
            })
            .collect()
    }

    /// First word of a type strictly after the first occurrence of `start`
    pub fn next_word_of_type_after_word(&self, start: &str, pattern: &TagPattern) -> Option<&str> {
        self.trace(|| {
            format!("next_word_of_type_after_word: after '{start}' looking for {pattern}")
        });

        let found = self.position_of(start).and_then(|start_index| {
            (start_index + 1..self.len())
                .find(|&i| self.tag(i).is_some_and(|tag| pattern.is_match(tag)))
        });

        match found {
            Some(index) => {
                let word = self.lower_tokens[index].as_str();
                self.trace(|| format!("next_word_of_type_after_word: found '{word}'"));
                Some(word)
            }
            None => {
                self.trace(|| "next_word_of_type_after_word: found nothing".to_string());
                None
            }
        }
    }

    /// Original-case text strictly after the first occurrence of `start`
    ///
    /// Tokens are re-joined with single spaces and a free-standing apostrophe
    /// is glued back onto its neighbours (`I ' m` becomes `I'm`).
    pub fn everything_after_word(&self, start: Option<&str>) -> Option<String> {
        let start_index = self.position_of(start?)?;
        let rest = self.tokens[start_index + 1..].join(" ");
        if rest.is_empty() {
            return None;
        }
        Some(rest.replace(" ' ", "'"))
    }
}
