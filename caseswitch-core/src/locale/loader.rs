//! Locale table loader
//!
//! Small-word tables are embedded at compile time and parsed once, on first
//! use. A table that fails to parse or validate is reported on every lookup
//! instead of aborting the process.

use super::config::LocaleConfig;
use super::Locale;
use crate::error::{Result, TransformError};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

static SMALL_WORDS: OnceLock<Result<HashMap<Locale, SmallWordSet>>> = OnceLock::new();

macro_rules! embed_locale_config {
    ($locale:expr, $path:expr) => {
        ($locale, include_str!($path))
    };
}

/// Closed-class words that title case keeps lowercase mid-title
#[derive(Debug, Clone, Default)]
pub struct SmallWordSet {
    /// Lowercase words for O(1) lookup
    words: HashSet<String>,
    /// Minimum word length in bytes (optimization)
    min_length: usize,
    /// Maximum word length in bytes (optimization)
    max_length: usize,
}

impl SmallWordSet {
    /// Create from categorized word lists
    pub fn from_categories(categories: HashMap<String, Vec<String>>) -> Self {
        let mut words = HashSet::new();
        let mut min_length = usize::MAX;
        let mut max_length = 0;

        // Flatten all categories into a single set
        for (_category, list) in categories {
            for word in list {
                let word = word.trim().to_lowercase();
                min_length = min_length.min(word.len());
                max_length = max_length.max(word.len());
                words.insert(word);
            }
        }

        if words.is_empty() {
            min_length = 0;
        }

        Self {
            words,
            min_length,
            max_length,
        }
    }

    /// Check whether an already-lowercased word is a small word
    pub fn contains(&self, word: &str) -> bool {
        if word.len() < self.min_length || word.len() > self.max_length {
            return false;
        }
        self.words.contains(word)
    }

    /// Number of distinct small words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn load_embedded_tables() -> Result<HashMap<Locale, SmallWordSet>> {
    let embedded = [
        embed_locale_config!(Locale::En, "../../configs/locales/en.toml"),
        embed_locale_config!(Locale::Pt, "../../configs/locales/pt.toml"),
        embed_locale_config!(Locale::Es, "../../configs/locales/es.toml"),
        embed_locale_config!(Locale::Fr, "../../configs/locales/fr.toml"),
        embed_locale_config!(Locale::De, "../../configs/locales/de.toml"),
        embed_locale_config!(Locale::It, "../../configs/locales/it.toml"),
    ];

    let mut tables = HashMap::with_capacity(embedded.len());
    for (locale, toml_content) in embedded {
        let config = parse_locale_config(locale.code(), toml_content)?;
        tables.insert(locale, SmallWordSet::from_categories(config.small_words.categories));
    }

    tracing::debug!(locales = tables.len(), "loaded small-word tables");
    Ok(tables)
}

/// Parse and validate one locale table
pub(crate) fn parse_locale_config(code: &str, toml_content: &str) -> Result<LocaleConfig> {
    let locale_error = |reason: String| TransformError::LocaleData {
        code: code.to_string(),
        reason,
    };

    let config: LocaleConfig =
        toml::from_str(toml_content).map_err(|e| locale_error(format!("Failed to parse: {e}")))?;

    // Validate that the config code matches
    if config.metadata.code != code {
        return Err(locale_error(format!(
            "Config code mismatch: expected {}, got {}",
            code, config.metadata.code
        )));
    }

    config.validate().map_err(locale_error)?;
    Ok(config)
}

/// Small-word table for `locale`
pub fn small_words(locale: Locale) -> Result<&'static SmallWordSet> {
    let tables = SMALL_WORDS
        .get_or_init(load_embedded_tables)
        .as_ref()
        .map_err(Clone::clone)?;

    tables.get(&locale).ok_or_else(|| TransformError::LocaleData {
        code: locale.code().to_string(),
        reason: "No table embedded".to_string(),
    })
}
