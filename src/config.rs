//! User configuration loaded from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::calculator::DisplayOptions;

const APP_DIR: &str = "zcalc";
const CONFIG_FILE: &str = "config.toml";

/// Display and history settings. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of history entries kept per session.
    pub history_limit: usize,
    /// Maximum number of fractional digits shown.
    pub decimal_places: usize,
    /// Whether integer digits are grouped by thousands.
    pub grouping: bool,
    /// Separator used when grouping is enabled.
    pub group_separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: 10,
            decimal_places: 10,
            grouping: true,
            group_separator: ",".to_string(),
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/zcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let Some(path) = Self::default_path() else {
            warn!("No config directory found, using default configuration");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            decimal_places: self.decimal_places,
            group_separator: self.grouping.then(|| self.group_separator.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("history_limit = 3\ngroup_separator = \" \"\n").unwrap();
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.group_separator, " ");
        assert_eq!(config.decimal_places, 10);
        assert!(config.grouping);
    }

    #[test]
    fn test_invalid_file() {
        assert!(Config::parse("history_limit = \"many\"").is_err());
    }

    #[test]
    fn test_display_options() {
        let config = Config {
            grouping: false,
            decimal_places: 4,
            ..Config::default()
        };
        let options = config.display_options();
        assert_eq!(options.decimal_places, 4);
        assert_eq!(options.group_separator, None);

        assert_eq!(
            Config::default().display_options(),
            DisplayOptions::default()
        );
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/zcalc/config.toml")));
        assert!(result.is_err());
    }
}
