use super::{Locale, LocaleStore, COOKIE_MAX_AGE_SECS};
use crate::config;
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk form of the locale preference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalePreference {
    pub locale: String,
    pub saved_at: DateTime<Utc>,
}

impl LocalePreference {
    /// Preferences expire after the same one-year max-age as the cookie.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.saved_at > Duration::seconds(COOKIE_MAX_AGE_SECS as i64)
    }
}

/// TOML file store, used outside the browser.
#[derive(Debug, Clone)]
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `preferences.toml` in the workspace config directory.
    pub fn in_workspace() -> Result<Self> {
        Ok(Self::new(config::preferences_file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_preference(&self) -> Result<Option<LocalePreference>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences file {:?}", self.path))?;
        let preference: LocalePreference = toml::from_str(&data)
            .with_context(|| format!("Failed to parse preferences file {:?}", self.path))?;
        Ok(Some(preference))
    }
}

impl LocaleStore for FileLocaleStore {
    fn load(&self) -> Result<Option<String>> {
        let Some(preference) = self.read_preference()? else {
            return Ok(None);
        };
        if preference.is_expired(Utc::now()) {
            tracing::debug!(saved_at = %preference.saved_at, "locale preference expired");
            return Ok(None);
        }
        Ok(Some(preference.locale))
    }

    fn save(&mut self, locale: Locale) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create preferences directory {:?}", dir))?;
        }
        let preference = LocalePreference {
            locale: locale.as_str().to_string(),
            saved_at: Utc::now(),
        };
        let data = toml::to_string_pretty(&preference)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write preferences file {:?}", self.path))?;
        Ok(())
    }
}
