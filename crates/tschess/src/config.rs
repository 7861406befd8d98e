//! Configuration file loading for the REPL.
//!
//! Settings come from an optional TOML file; every field has a default, so
//! a missing file or an empty one gives the stock behaviour.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// REPL settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text shown before each line of input.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Lines that end the session.
    #[serde(default = "default_quit_words")]
    pub quit_words: Vec<String>,
    /// Whether to print the capture lists after each legal move.
    #[serde(default = "default_show_captures")]
    pub show_captures: bool,
    /// Maximum log level when no `-v` flag is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_prompt() -> String {
    "Your move: ".to_string()
}

fn default_quit_words() -> Vec<String> {
    vec!["exit".to_string(), "quit".to_string(), "q".to_string()]
}

fn default_show_captures() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: default_prompt(),
            quit_words: default_quit_words(),
            show_captures: default_show_captures(),
            log_level: default_log_level(),
        }
    }
}

impl ReplConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the configuration file.
    ///
    /// Currently returns `tschess.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("tschess.toml")
    }

    /// Returns true if `line` is one of the quit words.
    pub fn is_quit(&self, line: &str) -> bool {
        self.quit_words.iter().any(|w| w == line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_defaults() {
        let config: ReplConfig = toml::from_str("").unwrap();
        assert_eq!(config, ReplConfig::default());
        assert_eq!(config.prompt, "Your move: ");
        assert_eq!(config.quit_words, vec!["exit", "quit", "q"]);
        assert!(config.show_captures);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_valid_toml_config() {
        let toml_content = r#"
prompt = "> "
quit_words = ["bye"]
show_captures = false
log_level = "debug"
"#;

        let config: ReplConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.prompt, "> ");
        assert_eq!(config.quit_words, vec!["bye"]);
        assert!(!config.show_captures);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_quit_words_are_exact() {
        let config = ReplConfig::default();
        assert!(config.is_quit("q"));
        assert!(config.is_quit("exit"));
        assert!(config.is_quit("quit"));
        assert!(!config.is_quit("Q"));
        assert!(!config.is_quit(" quit"));
        assert!(!config.is_quit("e2 e4"));
    }

    #[test]
    fn test_config_path_returns_expected_path() {
        assert_eq!(ReplConfig::config_path(), PathBuf::from("tschess.toml"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReplConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ReplConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prompt = \"move? \"").unwrap();
        let config = ReplConfig::load(file.path()).unwrap();
        assert_eq!(config.prompt, "move? ");
        assert_eq!(config.quit_words, vec!["exit", "quit", "q"]);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_captures = \"sometimes\"").unwrap();
        let result = ReplConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = ReplConfig {
            prompt: "? ".to_string(),
            quit_words: vec!["stop".to_string()],
            show_captures: false,
            log_level: "trace".to_string(),
        };
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: ReplConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }
}
