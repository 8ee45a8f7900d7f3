//! Chlorophyll configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. User-level (~/.config/chlorophyll/config.toml)
//! 3. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chlorophyll::util::config::{load_user_config, UserConfig};
//!
//! // missing file means defaults
//! let config = load_user_config().unwrap_or_default();
//! assert!(!config.repl.prompt.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserConfig {
    /// REPL settings
    #[serde(default)]
    pub repl: ReplConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// What the shell prints for each input line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplMode {
    /// One line per token
    #[default]
    Tokens,
    /// The parsed program and its diagnostics
    Parse,
}

/// REPL configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Startup mode
    #[serde(default)]
    pub mode: ReplMode,
    /// History file path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,
    /// History size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// Colorize diagnostics
    #[serde(default = "default_colors")]
    pub colors: bool,
}

fn default_prompt() -> String {
    ">> ".to_string()
}

fn default_history_size() -> usize {
    1000
}

fn default_colors() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            mode: ReplMode::default(),
            history_file: None,
            history_size: default_history_size(),
            colors: default_colors(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Level name (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("chlorophyll"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("chlorophyll"));
    }

    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("chlorophyll"));
    }

    None
}

/// Get the user config file path (~/.config/chlorophyll/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load configuration from an explicit file
///
/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(UserConfig::default()),
    }
}

/// Write configuration to an explicit file, creating parent directories
pub fn save_config_to(
    path: &Path,
    config: &UserConfig,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
