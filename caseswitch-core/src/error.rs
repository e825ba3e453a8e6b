//! Error types for the transform engine
//!
//! None of these are fatal: the engine converts every one of them into a
//! [`TransformResult`](crate::TransformResult) that carries the untouched
//! input alongside the error.

use crate::mode::Mode;
use thiserror::Error;

/// Reasons a transformation was not performed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The mode identifier is not one of the recognized modes
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// The mode exists but is switched off in the caller's settings
    #[error("Mode disabled: {0}")]
    ModeDisabled(Mode),

    /// Embedded locale data could not be parsed or failed validation
    #[error("Locale data error for '{code}': {reason}")]
    LocaleData {
        /// Locale code whose table is broken
        code: String,
        /// What went wrong while loading it
        reason: String,
    },

    /// Unexpected fault raised while a strategy was running
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_display() {
        let error = TransformError::UnknownMode("pascalCase".to_string());
        assert_eq!(error.to_string(), "Unknown mode: pascalCase");
    }

    #[test]
    fn test_mode_disabled_display_uses_mode_id() {
        let error = TransformError::ModeDisabled(Mode::TitleCase);
        assert_eq!(error.to_string(), "Mode disabled: titleCase");
    }

    #[test]
    fn test_locale_data_display() {
        let error = TransformError::LocaleData {
            code: "fr".to_string(),
            reason: "no small words defined".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Locale data error for 'fr': no small words defined"
        );
    }
}
