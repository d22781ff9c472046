//! TOML configuration for the terminal client.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use ttt_engine::ThemeMode;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "ttt_duel.toml";

/// Terminal client configuration.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// Theme the session starts in.
    theme: ThemeMode,

    /// File receiving tracing output (the terminal belongs to the UI).
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            log_file: PathBuf::from("ttt_duel.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(theme = %config.theme, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] if present, else
    /// defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"").unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.theme(), ThemeMode::Dark);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_file(), &PathBuf::from("ttt_duel.log"));
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "theme = \"light\"\nlog_file = \"/tmp/game.log\"\nlog_filter = \"debug,ttt_engine=trace\""
        )
        .unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.theme(), ThemeMode::Light);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
        assert_eq!(config.log_filter(), "debug,ttt_engine=trace");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"sepia\"").unwrap();

        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = TuiConfig::load(Some(&missing)).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_setters_override() {
        let config = TuiConfig::default()
            .with_theme(ThemeMode::Dark)
            .with_log_file(PathBuf::from("other.log"));
        assert_eq!(*config.theme(), ThemeMode::Dark);
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
    }
}
