//! Per-install configuration for the portfolio assistant.
//!
//! Stored as TOML under the workspace root:
//!   $FOLIO_HOME/config/config.toml when the variable is set
//!   <OS data dir>/Folio/config/config.toml otherwise
//!
//! The locale preference lives next to it in `preferences.toml` and is
//! managed by [`crate::locale::FileLocaleStore`].

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Chat front-end behaviour.
    #[serde(default)]
    pub chat: ChatSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatSettings {
    /// Simulated typing pause before a reply is shown, in milliseconds.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    /// Whether quick-reply questions are offered on a fresh transcript.
    #[serde(default = "default_show_suggestions")]
    pub show_suggestions: bool,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            show_suggestions: default_show_suggestions(),
        }
    }
}

const fn default_typing_delay_ms() -> u64 {
    1_000
}

const fn default_show_suggestions() -> bool {
    true
}

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

/// Returns the root directory where Folio keeps its files.
///
/// Order of precedence:
/// 1. `FOLIO_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("FOLIO_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("Folio"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Path of the persisted locale preference.
pub fn preferences_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(PREFERENCES_FILE_NAME))
}

/// Loads the configuration from the default location or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    load_from(&config_file_path()?)
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(AppConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: AppConfig = toml::from_str(&data)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}

/// Persists the configuration to the default location.
pub fn save(config: &AppConfig) -> Result<()> {
    save_to(&config_file_path()?, config)
}

pub fn save_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    }
    let data = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, data)
        .with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}
