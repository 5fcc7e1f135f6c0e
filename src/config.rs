//! Configuration structures for text-sample construction.
//!
//! This module provides strongly-typed configuration management using TOML files.
//! Every field carries a default, so a partial (or empty) file is accepted.
//! A terminator that is not exactly one character fails to parse.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Main configuration structure loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Config {
    /// Sentence splitting policy for raw sample text
    #[serde(default)]
    pub sentences: SentencePolicy,
}

/// How a single unsplit string is broken into sentence units.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SentencePolicy {
    /// Sentence terminator (e.g. ".")
    #[serde(default = "default_terminator")]
    pub terminator: char,
    /// Strip surrounding whitespace from every fragment
    #[serde(default = "default_true")]
    pub trim: bool,
    /// Discard fragments that are empty (after trimming, if enabled)
    #[serde(default = "default_true")]
    pub drop_empty: bool,
}

fn default_terminator() -> char {
    '.'
}

fn default_true() -> bool {
    true
}

impl Default for SentencePolicy {
    fn default() -> Self {
        SentencePolicy {
            terminator: default_terminator(),
            trim: true,
            drop_empty: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// Returns `Ok(Config)` if successful, or an error if the file cannot be read
    /// or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PsyError;
    use std::io::Write;

    #[test]
    fn test_default_policy() {
        let policy = SentencePolicy::default();
        assert_eq!(policy.terminator, '.');
        assert!(policy.trim);
        assert!(policy.drop_empty);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sentences_table() {
        let config = Config::from_toml_str("[sentences]\ndrop_empty = false\n").unwrap();
        assert_eq!(config.sentences.terminator, '.');
        assert!(config.sentences.trim);
        assert!(!config.sentences.drop_empty);
    }

    #[test]
    fn test_rejects_multichar_terminator() {
        let err = Config::from_toml_str("[sentences]\nterminator = \"!!\"\n").unwrap_err();
        assert!(matches!(err, PsyError::Toml(_)));
    }

    #[test]
    fn test_rejects_empty_terminator() {
        let err = Config::from_toml_str("[sentences]\nterminator = \"\"\n").unwrap_err();
        assert!(matches!(err, PsyError::Toml(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Config::from_toml_str("[sentences\n").unwrap_err();
        assert!(matches!(err, PsyError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sentences]\nterminator = \"!\"\ntrim = false").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.sentences.terminator, '!');
        assert!(!config.sentences.trim);
        assert!(config.sentences.drop_empty);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, PsyError::Io(_)));
    }
}
