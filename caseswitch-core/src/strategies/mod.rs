//! Mode strategies
//!
//! Each strategy is a plain function from guarded text to transformed text.
//! They share the tokenizer, the normalizer and the acronym filter, and
//! never see input longer than the guard allows.

mod case;
mod cleanup;
mod convention;

use crate::acronyms::AcronymSet;
use crate::error::Result;
use crate::locale::LocaleTag;
use crate::mode::Mode;

pub use case::{capitalize, lowercase, title_case, uppercase};
pub use cleanup::{remove_accents, slug, trim_spaces};
pub use convention::{camel_case, kebab_case, snake_case};

/// Per-call inputs every strategy can read
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Target locale for casing and word lists
    pub locale: &'a LocaleTag,
    /// Words to preserve in uppercase
    pub acronyms: &'a AcronymSet,
}

impl<'a> Context<'a> {
    /// Bundle a locale and an acronym set
    pub fn new(locale: &'a LocaleTag, acronyms: &'a AcronymSet) -> Self {
        Self { locale, acronyms }
    }
}

/// Signature shared by all strategies
pub type Strategy = fn(&str, &Context<'_>) -> Result<String>;

impl Mode {
    /// Strategy implementing this mode
    pub fn strategy(self) -> Strategy {
        match self {
            Mode::Uppercase => uppercase,
            Mode::Lowercase => lowercase,
            Mode::Capitalize => capitalize,
            Mode::TitleCase => title_case,
            Mode::CamelCase => camel_case,
            Mode::KebabCase => kebab_case,
            Mode::SnakeCase => snake_case,
            Mode::TrimSpaces => trim_spaces,
            Mode::RemoveAccents => remove_accents,
            Mode::Slug => slug,
        }
    }
}
