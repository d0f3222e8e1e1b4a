//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads command files, one sentence per line
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Sentences in a file
    pub fn read_sentences(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        let sentences = Self::sentences(&content);
        log::debug!("{}: {} sentences", path.display(), sentences.len());
        Ok(sentences)
    }

    /// One sentence per non-blank line; lines starting with `#` are comments
    pub fn sentences(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sentences_skip_blanks_and_comments() {
        let content = "# smart home\nturn on the lights\n\n   pause music  \n#skip me\n";
        assert_eq!(
            FileReader::sentences(content),
            vec!["turn on the lights", "pause music"]
        );
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            FileReader::sentences("stop the music\r\nresume song\r\n"),
            vec!["stop the music", "resume song"]
        );
    }

    #[test]
    fn test_read_sentences_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("commands.txt");
        fs::write(&file_path, "Can you turn up the music\nnext song please\n").unwrap();

        let sentences = FileReader::read_sentences(&file_path).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "next song please");
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        assert!(FileReader::read_sentences(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.txt"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }
}
