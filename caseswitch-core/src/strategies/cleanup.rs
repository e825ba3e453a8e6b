//! Whitespace and accent cleanup, URL slugs

use super::Context;
use crate::acronyms::with_acronyms;
use crate::error::Result;
use crate::locale::{strip_accents, to_lower};
use crate::normalize::collapse_spaces;
use crate::tokenizer::{split_words, word_runs, Token};

/// Collapse line breaks and repeated spaces, trim both ends.
///
/// Acronyms and locale are irrelevant here; letters are never touched.
pub fn trim_spaces(text: &str, _ctx: &Context<'_>) -> Result<String> {
    Ok(collapse_spaces(text))
}

/// Fold accented letters to ASCII, leaving punctuation and spacing alone.
pub fn remove_accents(text: &str, ctx: &Context<'_>) -> Result<String> {
    Ok(split_words(text)
        .into_iter()
        .map(|token| match token {
            Token::Word(word) => with_acronyms(word, ctx.acronyms, strip_accents),
            Token::Separator(sep) => sep.to_string(),
        })
        .collect())
}

/// Lowercase ASCII-folded words joined by single hyphens.
///
/// Acronyms stay uppercase. Accents are folded again after lowercasing
/// since some capitals only lowercase into a foldable letter (`ẞ` -> `ß`).
pub fn slug(text: &str, ctx: &Context<'_>) -> Result<String> {
    Ok(word_runs(text)
        .into_iter()
        .map(|word| {
            if ctx.acronyms.contains(word) {
                word.to_uppercase()
            } else {
                strip_accents(&to_lower(&strip_accents(word), ctx.locale))
            }
        })
        .collect::<Vec<_>>()
        .join("-"))
}
