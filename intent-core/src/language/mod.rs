//! Tokenization and part-of-speech tagging
//!
//! The classifier talks to a [`Tagger`]. This module provides the interface
//! and a data-driven implementation whose lexicon and transformation rules
//! come from a TOML language configuration.

pub mod interface;

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod runtime;
pub(crate) mod tables;

pub use config::{
    ContextRuleConfig, LanguageConfig, Lexicon, Metadata, SuffixRuleConfig, TagDefaults,
};
pub use interface::Tagger;
pub use loader::{default_tagger, get_tagger, EMBEDDED_LANGUAGES};
pub use runtime::LexiconTagger;
