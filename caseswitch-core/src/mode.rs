//! Transformation modes

use crate::error::TransformError;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The ten transformations the engine knows
///
/// Identifiers are the camelCase names used by settings and requests
/// (`"titleCase"`, `"removeAccents"`...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// `uppercase`
    Uppercase,
    /// `lowercase`
    Lowercase,
    /// `capitalize` (sentence case)
    Capitalize,
    /// `titleCase`
    TitleCase,
    /// `camelCase`
    CamelCase,
    /// `kebabCase`
    KebabCase,
    /// `snakeCase`
    SnakeCase,
    /// `trimSpaces`
    TrimSpaces,
    /// `removeAccents`
    RemoveAccents,
    /// `slug`
    Slug,
}

impl Mode {
    /// All modes in menu order
    pub const ALL: [Mode; 10] = [
        Mode::Uppercase,
        Mode::Lowercase,
        Mode::Capitalize,
        Mode::TitleCase,
        Mode::CamelCase,
        Mode::KebabCase,
        Mode::SnakeCase,
        Mode::TrimSpaces,
        Mode::RemoveAccents,
        Mode::Slug,
    ];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Mode::Uppercase => "uppercase",
            Mode::Lowercase => "lowercase",
            Mode::Capitalize => "capitalize",
            Mode::TitleCase => "titleCase",
            Mode::CamelCase => "camelCase",
            Mode::KebabCase => "kebabCase",
            Mode::SnakeCase => "snakeCase",
            Mode::TrimSpaces => "trimSpaces",
            Mode::RemoveAccents => "removeAccents",
            Mode::Slug => "slug",
        }
    }

    /// Short description of what the mode does.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Uppercase => "Convert all letters to uppercase",
            Mode::Lowercase => "Convert all letters to lowercase",
            Mode::Capitalize => "Capitalize the first word of each sentence",
            Mode::TitleCase => "Capitalize words, keeping small words lowercase",
            Mode::CamelCase => "Join words as camelCase",
            Mode::KebabCase => "Join lowercase words with hyphens",
            Mode::SnakeCase => "Join lowercase words with underscores",
            Mode::TrimSpaces => "Collapse repeated whitespace and trim the ends",
            Mode::RemoveAccents => "Replace accented letters with plain ASCII",
            Mode::Slug => "Build a lowercase, hyphenated URL slug",
        }
    }

    /// Menu label in the given interface language
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Mode::CamelCase, _) => "camelCase",
            (Mode::KebabCase, _) => "kebab-case",
            (Mode::SnakeCase, _) => "snake_case",
            (Mode::Slug, _) => "URL Slug",

            (Mode::Uppercase, Locale::En) => "UPPERCASE",
            (Mode::Uppercase, Locale::Pt) => "MAIÚSCULAS",
            (Mode::Uppercase, Locale::Es) => "MAYÚSCULAS",
            (Mode::Uppercase, Locale::Fr) => "MAJUSCULES",
            (Mode::Uppercase, Locale::De) => "GROSSBUCHSTABEN",
            (Mode::Uppercase, Locale::It) => "MAIUSCOLO",

            (Mode::Lowercase, Locale::En) => "lowercase",
            (Mode::Lowercase, Locale::Pt | Locale::Es) => "minúsculas",
            (Mode::Lowercase, Locale::Fr) => "minuscules",
            (Mode::Lowercase, Locale::De) => "kleinbuchstaben",
            (Mode::Lowercase, Locale::It) => "minuscolo",

            (Mode::Capitalize, Locale::En) => "Sentence Case",
            (Mode::Capitalize, Locale::Pt | Locale::Es) => "Primeira Letra",
            (Mode::Capitalize, Locale::Fr) => "Première Lettre",
            (Mode::Capitalize, Locale::De) => "Erster Buchstabe",
            (Mode::Capitalize, Locale::It) => "Prima Lettera",

            (Mode::TitleCase, Locale::En) => "Title Case",
            (Mode::TitleCase, Locale::Pt | Locale::Es) => "Título",
            (Mode::TitleCase, Locale::Fr) => "Titre",
            (Mode::TitleCase, Locale::De) => "Titel",
            (Mode::TitleCase, Locale::It) => "Titolo",

            (Mode::TrimSpaces, Locale::En) => "Trim Spaces",
            (Mode::TrimSpaces, Locale::Pt) => "Ajustar Espaços",
            (Mode::TrimSpaces, Locale::Es) => "Ajustar Espacios",
            (Mode::TrimSpaces, Locale::Fr) => "Ajuster Espaces",
            (Mode::TrimSpaces, Locale::De) => "Leerzeichen Anpassen",
            (Mode::TrimSpaces, Locale::It) => "Regola Spazi",

            (Mode::RemoveAccents, Locale::En) => "Remove Accents",
            (Mode::RemoveAccents, Locale::Pt) => "Remover Acentos",
            (Mode::RemoveAccents, Locale::Es) => "Quitar Acentos",
            (Mode::RemoveAccents, Locale::Fr) => "Supprimer Accents",
            (Mode::RemoveAccents, Locale::De) => "Akzente Entfernen",
            (Mode::RemoveAccents, Locale::It) => "Rimuovi Accenti",
        }
    }

    /// Default Alt+Shift shortcut digit
    pub fn default_shortcut(&self) -> char {
        match self {
            Mode::Uppercase => '1',
            Mode::Lowercase => '2',
            Mode::Capitalize => '3',
            Mode::TitleCase => '4',
            Mode::CamelCase => '5',
            Mode::KebabCase => '6',
            Mode::SnakeCase => '7',
            Mode::TrimSpaces => '8',
            Mode::RemoveAccents => '9',
            Mode::Slug => '0',
        }
    }
}

impl FromStr for Mode {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.id() == s)
            .ok_or_else(|| TransformError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
