//! Locales, locale-sensitive casing and per-locale word tables
//!
//! A [`LocaleTag`] keeps whatever tag the caller supplied so the casing
//! primitives can honour it, while word-list lookups resolve it to one of
//! the bundled [`Locale`]s (falling back to English).

pub mod accents;
pub mod casing;
pub(crate) mod config;
pub(crate) mod loader;

use std::fmt;
use std::str::FromStr;

pub use accents::{accent_replacement, strip_accents};
pub use casing::{capitalize_first, to_lower, to_upper, upper_first};
pub use loader::{small_words, SmallWordSet};

/// Locales with bundled small-word tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Portuguese
    Pt,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
    /// Italian
    It,
}

impl Locale {
    /// Every bundled locale
    pub const ALL: [Locale; 6] = [
        Locale::En,
        Locale::Pt,
        Locale::Es,
        Locale::Fr,
        Locale::De,
        Locale::It,
    ];

    /// Resolve a primary language subtag, if bundled
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "pt" => Some(Locale::Pt),
            "es" => Some(Locale::Es),
            "fr" => Some(Locale::Fr),
            "de" => Some(Locale::De),
            "it" => Some(Locale::It),
            _ => None,
        }
    }

    /// Two-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
            Locale::It => "it",
        }
    }

    /// Native name
    pub fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Pt => "Português",
            Locale::Es => "Español",
            Locale::Fr => "Français",
            Locale::De => "Deutsch",
            Locale::It => "Italiano",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Caller-supplied locale tag
///
/// `pt-BR`, `PT` and `pt_br` all resolve to [`Locale::Pt`]; unknown tags
/// such as `tr` resolve to [`Locale::En`] for word lists but stay available
/// to the casing primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    raw: String,
    primary: String,
    locale: Locale,
}

impl LocaleTag {
    /// Parse a tag. Never fails: unrecognized tags fall back to English.
    pub fn new(tag: &str) -> Self {
        let raw = tag.trim();
        let primary = raw
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let locale = Locale::from_code(&primary).unwrap_or_default();

        Self {
            raw: raw.to_string(),
            primary,
            locale,
        }
    }

    /// The tag as supplied (trimmed)
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased primary language subtag
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Bundled locale used for word lists
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether the tag named a bundled locale rather than falling back
    pub fn is_supported(&self) -> bool {
        Locale::from_code(&self.primary).is_some()
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::from(Locale::En)
    }
}

impl From<Locale> for LocaleTag {
    fn from(locale: Locale) -> Self {
        Self::new(locale.code())
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl FromStr for LocaleTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
