use super::{Locale, LocaleStore};
use anyhow::Result;

pub const LOCALE_COOKIE: &str = "locale";
/// One year.
pub const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Browser cookie jar as seen through `document.cookie`: `name=value` pairs
/// separated by `"; "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieLocaleStore {
    segments: Vec<String>,
    last_set_cookie: Option<String>,
}

impl CookieLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_header(header: &str) -> Self {
        Self {
            segments: header
                .split(';')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
            last_set_cookie: None,
        }
    }

    /// Current jar contents in `document.cookie` form.
    pub fn header(&self) -> String {
        self.segments.join("; ")
    }

    /// Cookie line written by the most recent save.
    pub fn last_set_cookie(&self) -> Option<&str> {
        self.last_set_cookie.as_deref()
    }

    /// Value of cookie `name`. A name present more than once is treated as
    /// absent.
    pub fn get(&self, name: &str) -> Option<String> {
        let jar = format!("; {}", self.header());
        let needle = format!("; {name}=");
        let parts: Vec<&str> = jar.split(needle.as_str()).collect();
        if parts.len() != 2 {
            return None;
        }
        parts[1].split(';').next().map(str::to_string)
    }
}

pub fn set_cookie_line(locale: Locale) -> String {
    format!("{LOCALE_COOKIE}={locale}; path=/; max-age={COOKIE_MAX_AGE_SECS}")
}

impl LocaleStore for CookieLocaleStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.get(LOCALE_COOKIE))
    }

    fn save(&mut self, locale: Locale) -> Result<()> {
        let prefix = format!("{LOCALE_COOKIE}=");
        self.segments.retain(|segment| !segment.starts_with(&prefix));
        self.segments.push(format!("{LOCALE_COOKIE}={locale}"));
        self.last_set_cookie = Some(set_cookie_line(locale));
        Ok(())
    }
}
