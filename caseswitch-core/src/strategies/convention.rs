//! Identifier conventions: camelCase, kebab-case, snake_case

use super::Context;
use crate::error::Result;
use crate::locale::{to_lower, upper_first};
use crate::tokenizer::{camel_word_runs, word_runs};

/// Lowercase a word unless it is an acronym.
fn lower_word(word: &str, ctx: &Context<'_>) -> String {
    if ctx.acronyms.contains(word) {
        word.to_uppercase()
    } else {
        to_lower(word, ctx.locale)
    }
}

/// First word lowercase, every later word capitalized, no separators.
///
/// Existing camel humps are not split, so `fooBar baz` becomes
/// `foobarBaz`. For the same reason the mode is not idempotent:
/// `helloWorld` comes back as `helloworld`.
pub fn camel_case(text: &str, ctx: &Context<'_>) -> Result<String> {
    let mut out = String::with_capacity(text.len());

    for (i, word) in word_runs(text).into_iter().enumerate() {
        if ctx.acronyms.contains(word) {
            out.push_str(&word.to_uppercase());
        } else if i == 0 {
            out.push_str(&to_lower(word, ctx.locale));
        } else {
            out.push_str(&upper_first(&to_lower(word, ctx.locale), ctx.locale));
        }
    }

    Ok(out)
}

fn join_words(text: &str, ctx: &Context<'_>, separator: &str) -> String {
    camel_word_runs(text)
        .into_iter()
        .map(|word| lower_word(word, ctx))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Lowercase words joined with `-`
pub fn kebab_case(text: &str, ctx: &Context<'_>) -> Result<String> {
    Ok(join_words(text, ctx, "-"))
}

/// Lowercase words joined with `_`
pub fn snake_case(text: &str, ctx: &Context<'_>) -> Result<String> {
    Ok(join_words(text, ctx, "_"))
}
