//! Configuration structures and validation
//!
//! This module defines the TOML schema for locale tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root locale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub metadata: Metadata,
    pub small_words: SmallWords,
}

/// Locale metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Small words grouped by grammatical category (articles, prepositions...)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmallWords {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

impl LocaleConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Missing locale code".to_string());
        }

        if self.small_words.categories.values().all(Vec::is_empty) {
            return Err("No small words defined".to_string());
        }

        for words in self.small_words.categories.values() {
            if let Some(word) = words.iter().find(|w| w.trim().is_empty()) {
                return Err(format!("Blank small word entry: {word:?}"));
            }
        }

        Ok(())
    }
}
