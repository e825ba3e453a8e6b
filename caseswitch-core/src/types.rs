//! Request and result types exchanged with callers

use crate::error::TransformError;
use serde::{Deserialize, Serialize, Serializer};

fn default_locale() -> String {
    "en".to_string()
}

/// One transformation request, as sent by a client
///
/// ```json
/// { "text": "the lord of the rings", "mode": "titleCase", "language": "en" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    /// Text to transform
    pub text: String,
    /// Mode identifier, e.g. `"kebabCase"`
    pub mode: String,
    /// BCP-47 locale tag
    #[serde(default = "default_locale", alias = "language")]
    pub locale: String,
    /// Words to keep uppercase
    #[serde(default)]
    pub acronyms: Vec<String>,
}

impl TransformRequest {
    /// Create a request with the default locale and no acronyms
    pub fn new(text: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: mode.into(),
            locale: default_locale(),
            acronyms: Vec::new(),
        }
    }

    /// Set the locale tag
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the acronym list
    pub fn with_acronyms<I, S>(mut self, acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acronyms = acronyms.into_iter().map(Into::into).collect();
        self
    }
}

fn serialize_error<S: Serializer>(
    error: &Option<TransformError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.serialize_some(&error.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Outcome of a transformation
///
/// On failure `result` holds the caller's text (guarded or not, see
/// [`transform`](crate::transform)) and `error` says why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    /// Transformed text, or the fallback text on failure
    pub result: String,
    /// Whether the input was cut to the length cap
    pub truncated: bool,
    /// What went wrong, if anything
    #[serde(
        serialize_with = "serialize_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<TransformError>,
}

impl TransformResult {
    /// Successful result
    pub fn ok(result: String, truncated: bool) -> Self {
        Self {
            result,
            truncated,
            error: None,
        }
    }

    /// Result for empty input
    pub fn empty() -> Self {
        Self::ok(String::new(), false)
    }

    /// Failed result carrying the fallback text
    pub fn failed(fallback: impl Into<String>, truncated: bool, error: TransformError) -> Self {
        Self {
            result: fallback.into(),
            truncated,
            error: Some(error),
        }
    }

    /// Whether the transformation succeeded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
