//! Visitor display-language preference.
//!
//! [`LocaleContext`] owns the current value and writes every change through an
//! injected [`LocaleStore`]. The store is read once, when the context is
//! loaded; anything unreadable falls back to [`Locale::En`].

mod cookie;
mod file;

pub use cookie::{CookieLocaleStore, COOKIE_MAX_AGE_SECS, LOCALE_COOKIE};
pub use file::{FileLocaleStore, LocalePreference};

use anyhow::Result;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ko];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale '{0}' (expected 'en' or 'ko')")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

/// Durable backing for the locale preference.
pub trait LocaleStore {
    /// Raw persisted value, or `None` when nothing is stored.
    fn load(&self) -> Result<Option<String>>;

    fn save(&mut self, locale: Locale) -> Result<()>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocaleStore {
    value: Option<String>,
}

impl MemoryLocaleStore {
    pub fn with_raw(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, locale: Locale) -> Result<()> {
        self.value = Some(locale.as_str().to_string());
        Ok(())
    }
}

pub struct LocaleContext<S: LocaleStore> {
    locale: Locale,
    store: S,
}

impl<S: LocaleStore> LocaleContext<S> {
    /// Reads the persisted preference once. Absent, invalid or unreadable
    /// values resolve to the default locale.
    pub fn load(store: S) -> Self {
        let locale = match store.load() {
            Ok(Some(raw)) => match raw.parse::<Locale>() {
                Ok(locale) => locale,
                Err(err) => {
                    tracing::warn!(%err, "ignoring stored locale");
                    Locale::default()
                }
            },
            Ok(None) => Locale::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read locale preference");
                Locale::default()
            }
        };
        Self { locale, store }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switches the locale, then persists it. The in-memory value is updated
    /// even when persisting fails.
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        self.locale = locale;
        self.store.save(locale)?;
        tracing::info!(%locale, "locale preference saved");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
