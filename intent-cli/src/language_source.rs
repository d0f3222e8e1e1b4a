//! Language source management for CLI

use anyhow::Result;
use intent_core::{get_tagger, LexiconTagger, Tagger};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::CliError;

/// Where the tagger's lexicon comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Configuration compiled into the core library
    Embedded(String),
    /// External configuration file
    External(PathBuf),
}

impl LanguageSource {
    /// An external file wins over a language code
    pub fn from_args(language_config: Option<&Path>, code: &str) -> Self {
        match language_config {
            Some(path) => LanguageSource::External(path.to_path_buf()),
            None => LanguageSource::Embedded(code.to_string()),
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::Embedded(code) => format!("Embedded: {code}"),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Build the tagger
    pub fn load(&self) -> Result<Arc<LexiconTagger>> {
        let tagger = match self {
            LanguageSource::Embedded(code) => get_tagger(code)?,
            LanguageSource::External(path) => {
                let tagger = LexiconTagger::from_file(path).map_err(|e| {
                    CliError::InvalidLanguageConfig {
                        path: path.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Arc::new(tagger)
            }
        };

        log::info!(
            "Using {} ({}, {} lexicon entries)",
            self.display_name(),
            tagger.language_code(),
            tagger.lexicon_len()
        );
        Ok(tagger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_takes_precedence() {
        let source = LanguageSource::from_args(Some(Path::new("custom.toml")), "en");
        assert_eq!(source, LanguageSource::External(PathBuf::from("custom.toml")));
        assert_eq!(source.display_name(), "External: custom.toml");
    }

    #[test]
    fn test_embedded_english() {
        let source = LanguageSource::from_args(None, "english");
        let tagger = source.load().unwrap();
        assert_eq!(tagger.language_code(), "en");
    }

    #[test]
    fn test_unknown_language() {
        let error = LanguageSource::Embedded("xx".to_string()).load().unwrap_err();
        assert!(error.to_string().contains("'xx'"));
    }

    #[test]
    fn test_missing_external_file() {
        let error = LanguageSource::External(PathBuf::from("/nonexistent/lang.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidLanguageConfig { .. })
        ));
    }
}
