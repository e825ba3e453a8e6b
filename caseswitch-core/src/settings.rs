//! User settings consumed by the engine
//!
//! Mirrors what a settings store hands to the transformer: interface
//! language, acronym list, per-mode enable switches and shortcut digits.
//! Every field is optional when deserializing; a missing field keeps its
//! default and a missing map entry means "use the mode's default".

use crate::acronyms::AcronymSet;
use crate::engine::transform_mode;
use crate::error::TransformError;
use crate::locale::LocaleTag;
use crate::mode::Mode;
use crate::types::TransformResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted user preferences
///
/// Map keys are mode identifiers (`"titleCase"`), not enum values, so a
/// settings file written by a newer version with extra modes still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Locale tag used for casing and title-case word lists
    #[serde(alias = "language")]
    pub locale: String,
    /// Words to keep uppercase
    pub acronyms: Vec<String>,
    /// Per-mode switches; absent modes are enabled
    pub enabled_modes: BTreeMap<String, bool>,
    /// Per-mode shortcut key overrides
    pub shortcuts: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            acronyms: Vec::new(),
            enabled_modes: Mode::ALL
                .iter()
                .map(|mode| (mode.id().to_string(), true))
                .collect(),
            shortcuts: Mode::ALL
                .iter()
                .map(|mode| (mode.id().to_string(), mode.default_shortcut().to_string()))
                .collect(),
        }
    }
}

impl Settings {
    /// Whether `mode` may be used
    pub fn is_enabled(&self, mode: Mode) -> bool {
        self.enabled_modes.get(mode.id()).copied().unwrap_or(true)
    }

    /// Enable or disable `mode`
    pub fn set_enabled(&mut self, mode: Mode, enabled: bool) {
        self.enabled_modes.insert(mode.id().to_string(), enabled);
    }

    /// Modes that are currently enabled, in menu order
    pub fn enabled(&self) -> impl Iterator<Item = Mode> + '_ {
        Mode::ALL.into_iter().filter(|mode| self.is_enabled(*mode))
    }

    /// Shortcut key for `mode`, falling back to its default digit
    pub fn shortcut(&self, mode: Mode) -> String {
        self.shortcuts
            .get(mode.id())
            .filter(|key| !key.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| mode.default_shortcut().to_string())
    }

    /// Mode bound to shortcut `key`, if any enabled mode uses it
    pub fn mode_for_shortcut(&self, key: &str) -> Option<Mode> {
        self.enabled().find(|mode| self.shortcut(*mode) == key)
    }

    /// Acronym set built from the configured list
    pub fn acronym_set(&self) -> AcronymSet {
        self.acronyms.iter().collect()
    }

    /// Parsed locale tag
    pub fn locale_tag(&self) -> LocaleTag {
        LocaleTag::new(&self.locale)
    }

    /// Map keys that do not name a known mode
    pub fn unknown_mode_ids(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .enabled_modes
            .keys()
            .chain(self.shortcuts.keys())
            .map(String::as_str)
            .filter(|id| id.parse::<Mode>().is_err())
            .collect();
        unknown.sort_unstable();
        unknown.dedup();
        unknown
    }

    /// Transform `text` with these settings, refusing disabled modes.
    ///
    /// A disabled mode returns the input unchanged with
    /// [`TransformError::ModeDisabled`].
    pub fn transform(&self, text: &str, mode: Mode) -> TransformResult {
        if !self.is_enabled(mode) {
            tracing::warn!(mode = mode.id(), "mode disabled in settings");
            return TransformResult::failed(text, false, TransformError::ModeDisabled(mode));
        }
        transform_mode(text, mode, &self.locale_tag(), &self.acronym_set())
    }
}
