//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use super::locale::Locale;

/// Store file used when neither the CLI nor the config names one.
pub const DEFAULT_STORE_FILE: &str = "notes.json";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default note store file
    pub file: Option<PathBuf>,

    /// Menu and prompt language
    pub lang: Option<Locale>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notebook/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notebook")
            .join("config.toml")
    }

    /// Resolve the note store path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `FILE` argument
    /// 2. Config file `file` setting
    /// 3. `notes.json` in the current working directory
    pub fn store_path(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }

    /// Resolve the language: CLI `--lang`, then config `lang`, then English.
    pub fn locale(&self, cli_lang: Option<Locale>) -> Locale {
        cli_lang.or(self.lang).unwrap_or_default()
    }
}
