//! Tagging collaborator interface
//!
//! The classifier never looks inside a tagger. It only needs a tokenizer and
//! one tag (or none) per token, and it compares tags by equality, prefix and
//! pattern.

use crate::tag::Tag;

/// Tokenizer and part-of-speech tagger used to build a tagged sentence
pub trait Tagger: Send + Sync {
    /// Split text into tokens in reading order
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Tag a token sequence in context
    ///
    /// Must return exactly one entry per token. `None` marks a token the
    /// tagger could not tag.
    fn tag(&self, tokens: &[String]) -> Vec<Option<Tag>>;

    /// Short code of the language the tagger handles
    fn language_code(&self) -> &str {
        "und"
    }
}

impl<T: Tagger + ?Sized> Tagger for std::sync::Arc<T> {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }

    fn tag(&self, tokens: &[String]) -> Vec<Option<Tag>> {
        (**self).tag(tokens)
    }

    fn language_code(&self) -> &str {
        (**self).language_code()
    }
}
