//! Configuration module for the loxc driver.
//!
//! This module handles loading, saving, and managing the optional
//! `loxc.toml` settings file. Command-line flags override what it says.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "loxc.toml";

/// How scanned tokens are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND lexeme literal` line per token
    #[default]
    Text,
    /// One JSON object per line per token
    Json,
}

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Colorize diagnostics and log output.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Token output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Interactive prompt settings.
    #[serde(default)]
    pub repl: ReplConfig,
}

/// Interactive prompt options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt shown before each line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// History file. Relative paths live under the user data directory.
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    /// Maximum number of history entries kept.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_history_file() -> PathBuf {
    PathBuf::from(".loxc_history")
}

fn default_max_history() -> usize {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            format: OutputFormat::default(),
            repl: ReplConfig::default(),
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            history_file: default_history_file(),
            max_history: default_max_history(),
        }
    }
}

impl ReplConfig {
    /// Where history is read from and written to.
    pub fn history_path(&self) -> PathBuf {
        if self.history_file.is_absolute() {
            return self.history_file.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("loxc")
            .join(&self.history_file)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Arguments
    /// * `path` - Path where the configuration should be saved
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DriverError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("loxc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("loxc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
