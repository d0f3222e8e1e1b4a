//! Language configuration loader
//!
//! Manages embedded language taggers with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{IntentError, Result};
use crate::language::runtime::LexiconTagger;

/// Embedded language configurations
static EMBEDDED: OnceLock<HashMap<String, Arc<LexiconTagger>>> = OnceLock::new();

/// Codes and names of the embedded languages
pub const EMBEDDED_LANGUAGES: &[(&str, &str)] = &[("en", "English")];

fn embedded() -> &'static HashMap<String, Arc<LexiconTagger>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        // Load English
        match LexiconTagger::from_toml_str(include_str!("../../configs/languages/english.toml")) {
            Ok(tagger) => {
                let tagger = Arc::new(tagger);
                map.insert("en".to_string(), tagger.clone());
                map.insert("english".to_string(), tagger);
            }
            Err(e) => {
                log::warn!("Failed to load English config: {e}");
            }
        }

        map
    })
}

/// Load an embedded tagger by language code or name
pub fn get_tagger(code: &str) -> Result<Arc<LexiconTagger>> {
    embedded()
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| IntentError::UnsupportedLanguage {
            code: code.to_string(),
        })
}

/// The embedded English tagger
pub fn default_tagger() -> Result<Arc<LexiconTagger>> {
    get_tagger("en")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Tagger;

    #[test]
    fn test_english_is_embedded() {
        let tagger = get_tagger("en").unwrap();
        assert_eq!(tagger.language_code(), "en");
        assert!(tagger.lexicon_len() > 100);
    }

    #[test]
    fn test_lookup_by_name_is_case_insensitive() {
        let by_code = get_tagger("en").unwrap();
        let by_name = get_tagger("English").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_name));
    }

    #[test]
    fn test_unknown_language() {
        let error = get_tagger("tlh").unwrap_err();
        assert!(matches!(error, IntentError::UnsupportedLanguage { .. }));
    }
}
