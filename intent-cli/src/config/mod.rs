//! Configuration module
//!
//! Optional TOML file supplying defaults for `intent classify`. Command-line
//! flags always take precedence.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Classification configuration
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Classification-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Embedded language used when neither `-l` nor `-c` is given
    pub default_language: String,

    /// External language configuration, used instead of the embedded one
    pub language_config: Option<PathBuf>,

    /// Report rule decisions through the logger
    pub debug: bool,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            language_config: None,
            debug: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include the matched rule in output
    pub include_rule: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_rule: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from a file when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.classification.default_language, "en");
        assert!(config.classification.language_config.is_none());
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("intent.toml");
        std::fs::write(&path, "[output]\ndefault_format = \"json\"\n").unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
        assert_eq!(config.classification.default_language, "en");
    }

    #[test]
    fn test_missing_file() {
        let error = CliConfig::from_file(Path::new("/nonexistent/intent.toml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "[output\n").unwrap();

        let error = CliConfig::from_file(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_without_path() {
        let config = CliConfig::load(None).unwrap();
        assert!(!config.classification.debug);
    }
}
