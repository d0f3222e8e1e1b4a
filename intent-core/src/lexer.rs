//! Sentence lexer
//!
//! Splits raw text into word, number and symbol tokens. Every symbol is a
//! token of its own, so a contraction such as `I'm` lexes to `I`, `'`, `m`.

use regex::Regex;
use std::sync::OnceLock;

/// URLs, then free-standing decimal numbers, then hyphenated words, then
/// any other single non-space character.
const TOKEN_PATTERN: &str = r"[A-Za-z][A-Za-z0-9+.-]*://\S+|\d+(?:\.\d+)?\b|[\p{L}\p{N}_]+(?:-[\p{L}\p{N}_]+)*|\S";

const NUMBER_PATTERN: &str = r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$";

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("number pattern is valid"))
}

/// Regex based tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexer;

impl Lexer {
    /// Create a lexer
    pub fn new() -> Self {
        Self
    }

    /// Split text into tokens in reading order
    pub fn lex(&self, text: &str) -> Vec<String> {
        token_re()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Whether a token is a plain number
    pub fn is_number(token: &str) -> bool {
        number_re().is_match(token)
    }

    /// Whether a token consists of punctuation or symbols only
    pub fn is_symbol(token: &str) -> bool {
        !token.is_empty() && !token.chars().any(char::is_alphanumeric)
    }
}
