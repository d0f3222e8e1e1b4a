//! Intent and context extraction for short command sentences
//!
//! Given a voice-assistant style command such as "turn on the kitchen light",
//! the crate picks one *intent* word (what should be done, `turn`) and one
//! *context* word (what it should be done to, `kitchen`).
//!
//! # Architecture
//!
//! - [`language`]: tokenization and part-of-speech tagging behind the
//!   [`Tagger`] trait, with a TOML-configured lexicon tagger and an embedded
//!   English configuration
//! - [`TaggedSentence`]: tokens, lower-case tokens and tags, plus the pattern
//!   predicates and lookups the rules are written in
//! - [`IntentRule`]: the ordered intent cascade, first match wins
//! - [`IntentClassifier`]: memoized intent and context for one sentence
//! - [`observer`]: diagnostics side channel reporting which rule fired
//!
//! # Example
//!
//! ```rust
//! use intent_core::IntentClassifier;
//!
//! let classifier = IntentClassifier::new("Can you turn up the music", false).unwrap();
//! let result = classifier.get();
//!
//! assert_eq!(result.intent.as_deref(), Some("turn"));
//! assert_eq!(result.context.as_deref(), Some("music"));
//! ```

pub mod batch;
pub mod classifier;
pub mod error;
pub mod language;
pub mod lexer;
pub mod observer;
pub mod rules;
pub mod sentence;
pub mod tag;

pub use batch::{classify_batch, classify_batch_with_observer};
pub use classifier::{Classification, IntentClassifier};
pub use error::{IntentError, Result};
pub use language::{get_tagger, LanguageConfig, LexiconTagger, Tagger};
pub use observer::{
    observer_for, LogObserver, NoopObserver, RecordingObserver, RuleEvent, RuleObserver, Stage,
};
pub use rules::IntentRule;
pub use sentence::TaggedSentence;
pub use tag::{Tag, TagPattern};

/// Classify one sentence with the embedded English tagger
pub fn classify(text: &str) -> Result<Classification> {
    IntentClassifier::new(text, false).map(|classifier| classifier.get())
}
