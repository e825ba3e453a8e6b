//! Input guard
//!
//! Rejects empty input and caps everything else at [`MAX_TEXT_LENGTH`]
//! Unicode scalar values before any strategy sees it.

/// Hard ceiling on the number of `char`s a single transformation processes
pub const MAX_TEXT_LENGTH: usize = 102_400;

/// Outcome of guarding an input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guarded<'a> {
    /// Nothing to transform
    Empty,
    /// Text to transform, possibly cut down to the length cap
    Text {
        /// The (possibly truncated) text
        text: &'a str,
        /// Whether characters past the cap were dropped
        truncated: bool,
    },
}

/// Guard `text` against empty and oversized input.
///
/// Truncation keeps the first [`MAX_TEXT_LENGTH`] characters and always
/// ends on a `char` boundary.
pub fn guard(text: &str) -> Guarded<'_> {
    if text.is_empty() {
        return Guarded::Empty;
    }

    // Fast path: the byte length bounds the char count from above.
    if text.len() <= MAX_TEXT_LENGTH {
        return Guarded::Text {
            text,
            truncated: false,
        };
    }

    match text.char_indices().nth(MAX_TEXT_LENGTH) {
        Some((cut, _)) => Guarded::Text {
            text: &text[..cut],
            truncated: true,
        },
        None => Guarded::Text {
            text,
            truncated: false,
        },
    }
}
