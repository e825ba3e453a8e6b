//! Letter-case strategies: uppercase, lowercase, sentence case, title case
//!
//! All four run the separator normalizer first, so `-` and `_` read as
//! spaces.

use super::Context;
use crate::acronyms::{with_acronyms, AcronymSet};
use crate::error::Result;
use crate::locale::{capitalize_first, small_words, to_lower, to_upper, upper_first, LocaleTag};
use crate::locale::SmallWordSet;
use crate::normalize::normalize_separators;
use crate::tokenizer::{split_sentences, split_whitespace_tokens, split_words, Segment, Token};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Letters with optional non-letter affixes, e.g. `"(hello),"`
static AFFIXED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\P{L}*)(\p{L}+)(\P{L}*)$").expect("valid word pattern"));

type CaseFn = fn(&str, &LocaleTag) -> String;

/// Apply `case` to every token, letting acronyms through uppercased.
fn recase(text: &str, ctx: &Context<'_>, case: CaseFn) -> String {
    if ctx.acronyms.is_empty() {
        return case(text, ctx.locale);
    }

    split_words(text)
        .into_iter()
        .map(|token| match token {
            Token::Word(word) => with_acronyms(word, ctx.acronyms, |w| case(w, ctx.locale)),
            Token::Separator(sep) => case(sep, ctx.locale),
        })
        .collect()
}

/// UPPERCASE
pub fn uppercase(text: &str, ctx: &Context<'_>) -> Result<String> {
    Ok(recase(&normalize_separators(text), ctx, to_upper))
}

/// lowercase
pub fn lowercase(text: &str, ctx: &Context<'_>) -> Result<String> {
    Ok(recase(&normalize_separators(text), ctx, to_lower))
}

/// Sentence case: the first word of every sentence gets a capital, the rest
/// of the sentence is lowercased.
pub fn capitalize(text: &str, ctx: &Context<'_>) -> Result<String> {
    let normalized = normalize_separators(text);
    let mut out = String::with_capacity(normalized.len());

    for segment in split_sentences(&normalized) {
        match segment {
            Segment::Boundary(boundary) => out.push_str(boundary),
            Segment::Text(sentence) => out.push_str(&capitalize_sentence(sentence, ctx)),
        }
    }

    Ok(out)
}

fn capitalize_sentence(sentence: &str, ctx: &Context<'_>) -> String {
    let mut out = String::with_capacity(sentence.len());
    let mut leading = true;

    for token in split_words(sentence) {
        match token {
            Token::Word(word) if leading => {
                out.push_str(&with_acronyms(word, ctx.acronyms, |w| {
                    capitalize_first(w, ctx.locale)
                }));
                leading = false;
            }
            Token::Word(word) => {
                out.push_str(&with_acronyms(word, ctx.acronyms, |w| to_lower(w, ctx.locale)));
            }
            Token::Separator(sep) => out.push_str(&to_lower(sep, ctx.locale)),
        }
    }

    out
}

/// Position of the title-case scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TitleState {
    is_first_word: bool,
    after_colon: bool,
}

impl Default for TitleState {
    fn default() -> Self {
        Self {
            is_first_word: true,
            after_colon: false,
        }
    }
}

impl TitleState {
    /// Case one whitespace-delimited chunk and advance the scan.
    fn step<'t>(
        self,
        chunk: &'t str,
        ctx: &Context<'_>,
        small: &SmallWordSet,
    ) -> (Cow<'t, str>, TitleState) {
        if chunk.chars().all(char::is_whitespace) {
            return (Cow::Borrowed(chunk), self);
        }

        if let Some((cased, after_colon)) = uppercase_acronym_runs(chunk, ctx.acronyms) {
            let next = TitleState {
                is_first_word: false,
                after_colon,
            };
            return (Cow::Owned(cased), next);
        }

        let Some(caps) = AFFIXED_WORD.captures(chunk) else {
            let next = TitleState {
                after_colon: self.after_colon || chunk.contains(':'),
                ..self
            };
            return (Cow::Borrowed(chunk), next);
        };

        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let word = caps.get(2).map_or("", |m| m.as_str());
        let suffix = caps.get(3).map_or("", |m| m.as_str());

        let cased = if ctx.acronyms.contains(word) {
            word.to_uppercase()
        } else {
            let lower = to_lower(word, ctx.locale);
            if self.is_first_word || self.after_colon || !small.contains(&lower) {
                upper_first(&lower, ctx.locale)
            } else {
                lower
            }
        };

        let next = TitleState {
            is_first_word: false,
            after_colon: suffix.contains(':'),
        };
        (Cow::Owned(format!("{prefix}{cased}{suffix}")), next)
    }
}

/// Uppercase every acronym word run in `chunk` and keep the rest as is.
///
/// Returns `None` when the chunk holds no acronym; otherwise the rewritten
/// chunk and whether a colon follows its last word run.
fn uppercase_acronym_runs(chunk: &str, acronyms: &AcronymSet) -> Option<(String, bool)> {
    let tokens = split_words(chunk);
    if !tokens
        .iter()
        .any(|token| matches!(token, Token::Word(word) if acronyms.contains(word)))
    {
        return None;
    }

    let cased = tokens
        .iter()
        .map(|token| with_acronyms(token.as_str(), acronyms, str::to_string))
        .collect();
    let after_colon = matches!(tokens.last(), Some(Token::Separator(sep)) if sep.contains(':'));
    Some((cased, after_colon))
}

/// Title Case with locale small words kept lowercase, except at the start
/// of the text and right after a colon.
pub fn title_case(text: &str, ctx: &Context<'_>) -> Result<String> {
    let normalized = normalize_separators(text);
    let small = small_words(ctx.locale.locale())?;

    let (out, _) = split_whitespace_tokens(&normalized).into_iter().fold(
        (String::with_capacity(normalized.len()), TitleState::default()),
        |(mut out, state), chunk| {
            let (cased, next) = state.step(chunk, ctx, small);
            out.push_str(&cased);
            (out, next)
        },
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acronyms::AcronymSet;

    fn run(f: super::super::Strategy, text: &str, locale: &str, acronyms: &[&str]) -> String {
        let tag = LocaleTag::new(locale);
        let set: AcronymSet = acronyms.iter().collect();
        f(text, &Context::new(&tag, &set)).unwrap()
    }

    #[test]
    fn test_uppercase_normalizes_separators() {
        assert_eq!(run(uppercase, "hello_world-again", "en", &[]), "HELLO WORLD AGAIN");
        assert_eq!(run(uppercase, "straße", "de", &[]), "STRASSE");
    }

    #[test]
    fn test_lowercase_keeps_acronyms() {
        assert_eq!(
            run(lowercase, "Visit the NASA Website, nasa!", "en", &["nasa"]),
            "visit the NASA website, NASA!"
        );
    }

    #[test]
    fn test_lowercase_turkic() {
        assert_eq!(run(lowercase, "DİYARBAKIR", "tr", &[]), "diyarbakır");
    }

    #[test]
    fn test_capitalize_sentences() {
        assert_eq!(
            run(capitalize, "hello WORLD. how ARE you? fine!", "en", &[]),
            "Hello world. How are you? Fine!"
        );
    }

    #[test]
    fn test_capitalize_keeps_leading_space_and_punctuation() {
        assert_eq!(run(capitalize, "  \"quoted\" text", "en", &[]), " \"Quoted\" text");
        // NBSP is whitespace and collapses like any other
        assert_eq!(run(capitalize, "note:\u{00A0}read this", "en", &[]), "Note: Read this");
    }

    #[test]
    fn test_capitalize_acronym_first_word() {
        assert_eq!(run(capitalize, "nasa rocks", "en", &["NASA"]), "NASA rocks");
        assert_eq!(run(capitalize, "we love nasa. Nasa too", "en", &["NASA"]), "We love NASA. NASA too");
    }

    #[test]
    fn test_title_case_small_words() {
        assert_eq!(run(title_case, "the lord of the rings", "en", &[]), "The Lord of the Rings");
        assert_eq!(run(title_case, "A TALE OF TWO CITIES", "en", &[]), "A Tale of Two Cities");
    }

    #[test]
    fn test_title_case_after_colon() {
        assert_eq!(
            run(title_case, "star wars: the empire strikes back", "en", &[]),
            "Star Wars: The Empire Strikes Back"
        );
        // A bare colon chunk also forces the next word
        assert_eq!(run(title_case, "part one : a new hope", "en", &[]), "Part One : A New Hope");
    }

    #[test]
    fn test_title_case_affixes() {
        assert_eq!(run(title_case, "(hello) \"world\"", "en", &[]), "(Hello) \"World\"");
        // Chunks with interior non-letters are left alone
        assert_eq!(run(title_case, "rock'n'roll 3d", "en", &[]), "rock'n'roll 3D");
    }

    #[test]
    fn test_title_case_locales() {
        assert_eq!(run(title_case, "o senhor dos anéis", "pt", &[]), "O Senhor dos Anéis");
        assert_eq!(run(title_case, "la casa de papel", "es", &[]), "La Casa de Papel");
        assert_eq!(run(title_case, "der herr der ringe", "de", &[]), "Der Herr der Ringe");
        assert_eq!(run(title_case, "il nome della rosa", "it", &[]), "Il Nome della Rosa");
        assert_eq!(run(title_case, "le petit prince et la rose", "fr", &[]), "Le Petit Prince et la Rose");
    }

    #[test]
    fn test_title_case_unknown_locale_uses_english_words() {
        assert_eq!(run(title_case, "war of the worlds", "xx", &[]), "War of the Worlds");
    }

    #[test]
    fn test_title_case_acronym_with_digits() {
        assert_eq!(run(title_case, "buy mp3 files", "en", &["MP3"]), "Buy MP3 Files");
        assert_eq!(run(title_case, "(mp3): the end", "en", &["mp3"]), "(MP3): The End");
    }

    #[test]
    fn test_title_case_acronyms_joined_by_punctuation() {
        assert_eq!(
            run(title_case, "the nasa/esa mission", "en", &["NASA", "ESA"]),
            "The NASA/ESA Mission"
        );
        assert_eq!(
            run(title_case, "nasa/report: the end", "en", &["NASA"]),
            "NASA/report: The End"
        );
    }

    #[test]
    fn test_title_case_acronym_precedence() {
        assert_eq!(run(title_case, "the api of nasa", "en", &["API", "of"]), "The API OF Nasa");
    }
}
