//! Intent rule cascade
//!
//! [`IntentRule::CASCADE`] lists the rules in priority order. Each rule is a
//! guard over the tagged sentence plus an extractor that picks the intent
//! word. The first rule whose guard holds and whose extractor yields a word
//! decides the intent; later rules are never consulted.

use crate::sentence::TaggedSentence;
use crate::tag;

/// Politeness marker that is never an intent
const POLITENESS_MARKER: &str = "please";

/// One step of the intent cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentRule {
    /// "can/will you X ..." → X
    StartsWithCanOrWill,
    /// Base-form verb first → that verb
    FirstWordIsAVerb,
    /// Noun then determiner → the noun
    FirstWordIsANounThenDeterminer,
    /// Noun then personal pronoun → the noun
    FirstWordIsANounThenPersonalPronoun,
    /// Noun then noun → the first noun
    FirstTwoWordsAreNouns,
    /// Noun then "to" → the noun
    FirstWordIsANounThenTo,
    /// First wh-word anywhere
    HasAWhWord,
    /// First present tense verb anywhere
    HasAPresentTenseVerb,
    /// First base-form verb anywhere, unless it is "please"
    HasAVerb,
    /// First noun, when a preposition is also present
    HasPrepositionAndNoun,
    /// First adjective anywhere
    HasAnAdjective,
}

impl IntentRule {
    /// All rules, highest priority first
    pub const CASCADE: [IntentRule; 11] = [
        IntentRule::StartsWithCanOrWill,
        IntentRule::FirstWordIsAVerb,
        IntentRule::FirstWordIsANounThenDeterminer,
        IntentRule::FirstWordIsANounThenPersonalPronoun,
        IntentRule::FirstTwoWordsAreNouns,
        IntentRule::FirstWordIsANounThenTo,
        IntentRule::HasAWhWord,
        IntentRule::HasAPresentTenseVerb,
        IntentRule::HasAVerb,
        IntentRule::HasPrepositionAndNoun,
        IntentRule::HasAnAdjective,
    ];

    /// Stable name used in diagnostics and output
    pub fn name(self) -> &'static str {
        match self {
            IntentRule::StartsWithCanOrWill => "starts_with_can_or_will",
            IntentRule::FirstWordIsAVerb => "first_word_is_a_verb",
            IntentRule::FirstWordIsANounThenDeterminer => "first_word_is_a_noun_then_determiner",
            IntentRule::FirstWordIsANounThenPersonalPronoun => {
                "first_word_is_a_noun_then_personal_pronoun"
            }
            IntentRule::FirstTwoWordsAreNouns => "first_two_words_are_nouns",
            IntentRule::FirstWordIsANounThenTo => "first_word_is_a_noun_then_to",
            IntentRule::HasAWhWord => "has_a_wh_word",
            IntentRule::HasAPresentTenseVerb => "has_a_present_tense_verb",
            IntentRule::HasAVerb => "has_a_verb",
            IntentRule::HasPrepositionAndNoun => "has_preposition_and_noun",
            IntentRule::HasAnAdjective => "has_an_adjective",
        }
    }

    /// Whether the rule's condition holds
    pub fn guard(self, sentence: &TaggedSentence) -> bool {
        match self {
            IntentRule::StartsWithCanOrWill => sentence.starts_with_can_or_will(),
            IntentRule::FirstWordIsAVerb => sentence.first_word_is_a_verb(),
            IntentRule::FirstWordIsANounThenDeterminer => {
                sentence.first_word_is_a_noun_then_determiner()
            }
            IntentRule::FirstWordIsANounThenPersonalPronoun => {
                sentence.first_word_is_a_noun_then_personal_pronoun()
            }
            IntentRule::FirstTwoWordsAreNouns => sentence.first_two_words_are_nouns(),
            IntentRule::FirstWordIsANounThenTo => sentence.first_word_is_a_noun_then_to(),
            IntentRule::HasAWhWord => sentence.has_a_wh_word(),
            IntentRule::HasAPresentTenseVerb => sentence.has_a_present_tense_verb(),
            IntentRule::HasAVerb => sentence.has_a_verb(),
            IntentRule::HasPrepositionAndNoun => sentence.has_preposition_and_noun(),
            IntentRule::HasAnAdjective => sentence.has_an_adjective(),
        }
    }

    /// The intent word this rule picks, assuming the guard holds
    pub fn extract(self, sentence: &TaggedSentence) -> Option<&str> {
        let first_of =
            |code: &str, strict: bool| sentence.words_by_type(code, strict).first().copied();

        match self {
            IntentRule::StartsWithCanOrWill => sentence.word(2),
            IntentRule::FirstWordIsAVerb
            | IntentRule::FirstWordIsANounThenDeterminer
            | IntentRule::FirstWordIsANounThenPersonalPronoun
            | IntentRule::FirstTwoWordsAreNouns
            | IntentRule::FirstWordIsANounThenTo => sentence.word(0),
            IntentRule::HasAWhWord => first_of(tag::WH_PREFIX, false),
            IntentRule::HasAPresentTenseVerb => first_of(tag::PRESENT_TENSE_VERB, false),
            // Only the first verb is considered; a leading "please" makes the
            // rule fall through rather than search for a second verb.
            IntentRule::HasAVerb => {
                first_of(tag::BASE_VERB, true).filter(|verb| *verb != POLITENESS_MARKER)
            }
            IntentRule::HasPrepositionAndNoun => first_of(tag::NOUN, false),
            IntentRule::HasAnAdjective => first_of(tag::ADJECTIVE, false),
        }
    }

    /// Guard and extractor together; `Some` means the rule fires
    pub fn apply(self, sentence: &TaggedSentence) -> Option<&str> {
        if self.guard(sentence) {
            self.extract(sentence)
        } else {
            None
        }
    }

    /// Run the cascade; first rule to fire wins
    pub fn first_match(sentence: &TaggedSentence) -> Option<(IntentRule, &str)> {
        Self::CASCADE
            .iter()
            .find_map(|rule| rule.apply(sentence).map(|word| (*rule, word)))
    }
}

impl std::fmt::Display for IntentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cascade_lists_every_rule_once() {
        let names: HashSet<&str> = IntentRule::CASCADE.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), IntentRule::CASCADE.len());
    }

    #[test]
    fn test_cascade_order() {
        assert_eq!(IntentRule::CASCADE[0], IntentRule::StartsWithCanOrWill);
        assert_eq!(IntentRule::CASCADE[1], IntentRule::FirstWordIsAVerb);
        assert_eq!(IntentRule::CASCADE[6], IntentRule::HasAWhWord);
        assert_eq!(IntentRule::CASCADE[8], IntentRule::HasAVerb);
        assert_eq!(IntentRule::CASCADE[10], IntentRule::HasAnAdjective);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(IntentRule::HasAVerb.to_string(), "has_a_verb");
    }
}
