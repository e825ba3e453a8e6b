//! Word, sentence and camel-case boundary detection
//!
//! Every splitter here borrows from the input; no token owns its text.
//! A "word character" is any Unicode alphabetic or numeric scalar, so
//! `café`, `東京` and `42` are all single words.

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?:;]\s*").expect("valid sentence boundary pattern"));

/// Is `c` part of a word (letter or number)?
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric()
}

/// Does `text` contain no word characters at all?
#[inline]
pub fn is_separator(text: &str) -> bool {
    !text.chars().any(is_word_char)
}

/// A slice of the input classified as word or separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Maximal run of letters/numbers
    Word(&'a str),
    /// Maximal run of anything else (spaces, punctuation, symbols)
    Separator(&'a str),
}

impl<'a> Token<'a> {
    /// The underlying text
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(s) | Token::Separator(s) => s,
        }
    }

    /// Whether this token is a word run
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Split into alternating word and separator runs.
///
/// Concatenating the tokens reproduces `text` exactly.
pub fn split_words(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_word: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let word = is_word_char(c);
        match in_word {
            Some(prev) if prev != word => {
                tokens.push(make_token(&text[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_word = Some(word);
    }

    if let Some(word) = in_word {
        tokens.push(make_token(&text[start..], word));
    }

    tokens
}

fn make_token(slice: &str, word: bool) -> Token<'_> {
    if word {
        Token::Word(slice)
    } else {
        Token::Separator(slice)
    }
}

/// Word runs only, separators discarded.
pub fn word_runs(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Word runs with an extra break wherever a lowercase letter is directly
/// followed by an uppercase one, so `fooBar` and `foo-bar` yield the same
/// words.
pub fn camel_word_runs(text: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for run in word_runs(text) {
        let mut start = 0;
        let mut prev_lower = false;

        for (i, c) in run.char_indices() {
            if prev_lower && c.is_uppercase() {
                words.push(&run[start..i]);
                start = i;
            }
            prev_lower = c.is_lowercase();
        }

        words.push(&run[start..]);
    }

    words
}

/// A piece of text produced by [`split_sentences`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Sentence text between boundaries
    Text(&'a str),
    /// Terminal punctuation plus any whitespace that follows it
    Boundary(&'a str),
}

/// Split on sentence punctuation (`.`, `!`, `?`, `:`, `;`) keeping each
/// delimiter together with its trailing whitespace as a [`Segment::Boundary`].
///
/// Empty text segments between consecutive boundaries are omitted.
pub fn split_sentences(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in SENTENCE_BOUNDARY.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Text(&text[last..m.start()]));
        }
        segments.push(Segment::Boundary(m.as_str()));
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }

    segments
}

/// Split into alternating whitespace and non-whitespace chunks.
pub fn split_whitespace_tokens(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        if matches!(in_space, Some(prev) if prev != space) {
            chunks.push(&text[start..i]);
            start = i;
        }
        in_space = Some(space);
    }

    if in_space.is_some() {
        chunks.push(&text[start..]);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_round_trips_input() {
        let text = "Hello, world! café 42x -- ok";
        let tokens = split_words(text);
        let rebuilt: String = tokens.iter().map(|t| t.as_str()).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_split_words_classification() {
        let tokens = split_words("it's 3pm");
        assert_eq!(
            tokens,
            vec![
                Token::Word("it"),
                Token::Separator("'"),
                Token::Word("s"),
                Token::Separator(" "),
                Token::Word("3pm"),
            ]
        );
    }

    #[test]
    fn test_split_words_empty() {
        assert!(split_words("").is_empty());
        assert_eq!(split_words("..."), vec![Token::Separator("...")]);
    }

    #[test]
    fn test_word_runs_discards_separators() {
        assert_eq!(word_runs("  foo--bar_baz  42 "), vec!["foo", "bar", "baz", "42"]);
        assert!(word_runs(" -_- ").is_empty());
    }

    #[test]
    fn test_camel_word_runs() {
        assert_eq!(camel_word_runs("fooBarBaz"), vec!["foo", "Bar", "Baz"]);
        assert_eq!(camel_word_runs("foo-bar"), vec!["foo", "bar"]);
        // Uppercase runs are not split internally
        assert_eq!(camel_word_runs("parseHTTPRequest"), vec!["parse", "HTTPRequest"]);
        assert_eq!(camel_word_runs("élanVital"), vec!["élan", "Vital"]);
    }

    #[test]
    fn test_split_sentences() {
        let segments = split_sentences("hello. world! ok");
        assert_eq!(
            segments,
            vec![
                Segment::Text("hello"),
                Segment::Boundary(". "),
                Segment::Text("world"),
                Segment::Boundary("! "),
                Segment::Text("ok"),
            ]
        );
    }

    #[test]
    fn test_split_sentences_nbsp_and_colon() {
        let segments = split_sentences("note:\u{00A0}read");
        assert_eq!(
            segments,
            vec![
                Segment::Text("note"),
                Segment::Boundary(":\u{00A0}"),
                Segment::Text("read"),
            ]
        );
    }

    #[test]
    fn test_split_sentences_consecutive_boundaries() {
        let segments = split_sentences("wait...what");
        assert_eq!(
            segments,
            vec![
                Segment::Text("wait"),
                Segment::Boundary("."),
                Segment::Boundary("."),
                Segment::Boundary("."),
                Segment::Text("what"),
            ]
        );
    }

    #[test]
    fn test_split_whitespace_tokens() {
        assert_eq!(
            split_whitespace_tokens(" the  lord "),
            vec![" ", "the", "  ", "lord", " "]
        );
        assert!(split_whitespace_tokens("").is_empty());
    }
}
