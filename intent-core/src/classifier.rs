//! Intent and context classification
//!
//! An [`IntentClassifier`] wraps a [`TaggedSentence`] and answers two
//! questions about it: what the speaker wants done (the intent) and what it
//! should be done to (the context). Both answers are computed on first use
//! and cached for the lifetime of the classifier.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::language::{default_tagger, Tagger};
use crate::observer::{observer_for, RuleEvent, RuleObserver, Stage};
use crate::rules::IntentRule;
use crate::sentence::TaggedSentence;
use crate::tag::{self, TagPattern};

/// Rule name reported when no intent rule fires
pub const NO_INTENT_MATCH: &str = "no_intent_match";
/// Rule name reported when the context is found
pub const NOUN_AFTER_INTENT: &str = "noun_after_intent";
/// Rule name reported when no context is found
pub const NO_CONTEXT_MATCH: &str = "no_context_match";

/// The pair returned by [`IntentClassifier::get`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: Option<String>,
    pub context: Option<String>,
}

impl Classification {
    pub fn new(intent: Option<&str>, context: Option<&str>) -> Self {
        Self {
            intent: intent.map(str::to_string),
            context: context.map(str::to_string),
        }
    }

    /// True when neither an intent nor a context was found
    pub fn is_empty(&self) -> bool {
        self.intent.is_none() && self.context.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
struct IntentMatch {
    rule: IntentRule,
    index: usize,
}

/// Classifies a single sentence
#[derive(Debug)]
pub struct IntentClassifier {
    sentence: TaggedSentence,
    intent: OnceLock<Option<IntentMatch>>,
    context: OnceLock<Option<String>>,
}

impl IntentClassifier {
    /// Classify with the embedded English tagger
    ///
    /// With `debug` set, rule decisions are reported through the `log`
    /// facade at debug level.
    pub fn new(text: &str, debug: bool) -> Result<Self> {
        let tagger = default_tagger()?;
        Self::with_tagger(text, tagger.as_ref(), observer_for(debug))
    }

    /// Classify with a caller-supplied tagger and observer
    pub fn with_tagger(
        text: &str,
        tagger: &dyn Tagger,
        observer: Arc<dyn RuleObserver>,
    ) -> Result<Self> {
        TaggedSentence::new(text, tagger, observer).map(Self::from_sentence)
    }

    pub fn from_sentence(sentence: TaggedSentence) -> Self {
        Self {
            sentence,
            intent: OnceLock::new(),
            context: OnceLock::new(),
        }
    }

    /// The underlying tagged sentence
    pub fn sentence(&self) -> &TaggedSentence {
        &self.sentence
    }

    fn intent_match(&self) -> Option<IntentMatch> {
        *self.intent.get_or_init(|| {
            let found = IntentRule::first_match(&self.sentence).and_then(|(rule, word)| {
                self.sentence
                    .position_of(word)
                    .map(|index| IntentMatch { rule, index })
            });

            let observer = self.sentence.observer();
            if observer.enabled() {
                let (rule, value) = match found {
                    Some(m) => (m.rule.name(), self.sentence.word(m.index)),
                    None => (NO_INTENT_MATCH, None),
                };
                observer.observe(RuleEvent::Matched {
                    stage: Stage::Intent,
                    rule,
                    value: value.map(str::to_string),
                });
            }
            found
        })
    }

    /// The intent word, lower-case
    pub fn intent(&self) -> Option<&str> {
        self.intent_match().and_then(|m| self.sentence.word(m.index))
    }

    /// The cascade rule that produced the intent
    pub fn matched_rule(&self) -> Option<IntentRule> {
        self.intent_match().map(|m| m.rule)
    }

    /// The first noun after the first occurrence of the intent word
    pub fn context(&self) -> Option<&str> {
        self.context
            .get_or_init(|| {
                let found = self.intent().and_then(|intent| {
                    self.sentence
                        .next_word_of_type_after_word(intent, &TagPattern::literal(tag::NOUN))
                        .map(str::to_string)
                });

                let observer = self.sentence.observer();
                if observer.enabled() {
                    let rule = if found.is_some() {
                        NOUN_AFTER_INTENT
                    } else {
                        NO_CONTEXT_MATCH
                    };
                    observer.observe(RuleEvent::Matched {
                        stage: Stage::Context,
                        rule,
                        value: found.clone(),
                    });
                }
                found
            })
            .as_deref()
    }

    /// Intent and context together
    pub fn get(&self) -> Classification {
        Classification::new(self.intent(), self.context())
    }

    /// Original-case text following the context word, or the intent word
    /// when there is no context
    pub fn payload(&self) -> Option<String> {
        self.sentence
            .everything_after_word(self.context().or_else(|| self.intent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::observer::{NoopObserver, RecordingObserver};
    use crate::tag::Tag;

    struct TableTagger(Vec<(&'static str, &'static str)>);

    impl Tagger for TableTagger {
        fn tokenize(&self, text: &str) -> Vec<String> {
            Lexer::new().lex(text)
        }

        fn tag(&self, tokens: &[String]) -> Vec<Option<Tag>> {
            tokens
                .iter()
                .map(|token| {
                    self.0
                        .iter()
                        .find(|(word, _)| word == token)
                        .map(|(_, code)| Tag::from(*code))
                        .or_else(|| Some(Tag::from("NN")))
                })
                .collect()
        }
    }

    fn tagger() -> TableTagger {
        TableTagger(vec![
            ("turn", "VB"),
            ("up", "RP"),
            ("the", "DT"),
            ("text", "VB"),
            ("to", "TO"),
            ("next", "JJ"),
            ("please", "VB"),
        ])
    }

    fn classify(text: &str) -> IntentClassifier {
        IntentClassifier::with_tagger(text, &tagger(), Arc::new(NoopObserver)).unwrap()
    }

    #[test]
    fn test_intent_and_context() {
        let classifier = classify("Turn up the Music");
        assert_eq!(classifier.intent(), Some("turn"));
        assert_eq!(classifier.context(), Some("music"));
        assert_eq!(classifier.matched_rule(), Some(IntentRule::FirstWordIsAVerb));
        assert_eq!(
            classifier.get(),
            Classification::new(Some("turn"), Some("music"))
        );
    }

    #[test]
    fn test_single_word_has_no_intent() {
        let classifier = classify("music");
        assert_eq!(classifier.get(), Classification::default());
        assert!(classifier.get().is_empty());
        assert_eq!(classifier.matched_rule(), None);
    }

    #[test]
    fn test_empty_sentence() {
        let classifier = classify("");
        assert_eq!(classifier.get(), Classification::default());
        assert_eq!(classifier.payload(), None);
    }

    #[test]
    fn test_no_context_when_nothing_follows() {
        let classifier = classify("the turn");
        assert_eq!(classifier.intent(), Some("turn"));
        assert_eq!(classifier.context(), None);
    }

    #[test]
    fn test_payload_follows_context() {
        let classifier = classify("text Nate pick up milk");
        assert_eq!(classifier.intent(), Some("text"));
        assert_eq!(classifier.context(), Some("nate"));
        assert_eq!(classifier.payload(), Some("pick up milk".to_string()));
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let observer = Arc::new(RecordingObserver::new());
        let classifier =
            IntentClassifier::with_tagger("turn up the music", &tagger(), observer.clone())
                .unwrap();

        let first = classifier.get();
        let second = classifier.get();
        assert_eq!(first, second);

        // Each stage is decided exactly once.
        assert_eq!(
            observer.matched_rules(),
            vec![
                (Stage::Intent, "first_word_is_a_verb"),
                (Stage::Context, NOUN_AFTER_INTENT),
            ]
        );
    }

    #[test]
    fn test_fallbacks_are_reported() {
        let observer = Arc::new(RecordingObserver::new());
        let classifier =
            IntentClassifier::with_tagger("music", &tagger(), observer.clone()).unwrap();
        classifier.get();

        assert_eq!(
            observer.matched_rules(),
            vec![
                (Stage::Intent, NO_INTENT_MATCH),
                (Stage::Context, NO_CONTEXT_MATCH),
            ]
        );
    }

    #[test]
    fn test_classification_serializes_nulls() {
        let json = serde_json::to_string(&Classification::new(Some("turn"), None)).unwrap();
        assert_eq!(json, r#"{"intent":"turn","context":null}"#);
    }
}
