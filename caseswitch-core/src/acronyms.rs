//! Acronym preservation
//!
//! Acronyms are supplied per request; nothing here is global. Membership is
//! case-insensitive and matched tokens are always emitted in uppercase.

use crate::tokenizer::is_separator;
use std::collections::HashSet;

/// Case-insensitive set of words that every mode emits uppercased verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcronymSet {
    /// Uppercase forms
    entries: HashSet<String>,
    /// Shortest and longest entry in bytes, for quick rejection
    min_len: usize,
    max_len: usize,
}

impl AcronymSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an acronym. Surrounding whitespace is ignored and blank entries
    /// are skipped. Returns whether the set changed.
    pub fn insert(&mut self, acronym: &str) -> bool {
        let trimmed = acronym.trim();
        if trimmed.is_empty() {
            return false;
        }

        let upper = trimmed.to_uppercase();
        let len = upper.len();
        if !self.entries.insert(upper) {
            return false;
        }

        if self.entries.len() == 1 {
            self.min_len = len;
            self.max_len = len;
        } else {
            self.min_len = self.min_len.min(len);
            self.max_len = self.max_len.max(len);
        }
        true
    }

    /// Is `word` an acronym, ignoring case?
    pub fn contains(&self, word: &str) -> bool {
        if self.entries.is_empty() {
            return false;
        }

        let upper = word.to_uppercase();
        if upper.len() < self.min_len || upper.len() > self.max_len {
            return false;
        }
        self.entries.contains(&upper)
    }

    /// Number of acronyms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no acronyms
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the stored uppercase forms
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for AcronymSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = AcronymSet::new();
        for acronym in iter {
            set.insert(acronym.as_ref());
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for AcronymSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for acronym in iter {
            self.insert(acronym.as_ref());
        }
    }
}

/// Run `strategy` on `token` unless the acronym set claims it.
///
/// Separator-only tokens come back unchanged, acronyms come back as their
/// uppercase literal, everything else goes through `strategy`. The check
/// happens on the raw token, before any case folding.
pub fn with_acronyms<F>(token: &str, acronyms: &AcronymSet, strategy: F) -> String
where
    F: FnOnce(&str) -> String,
{
    if is_separator(token) {
        return token.to_string();
    }
    if acronyms.contains(token) {
        return token.to_uppercase();
    }
    strategy(token)
}
