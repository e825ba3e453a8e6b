//! Transformation dispatch
//!
//! Resolves the mode, guards the input, runs the mode's strategy and turns
//! every failure (including a panicking strategy) into a [`TransformResult`].
//! Callers never see an `Err` or an unwinding panic from here.

use crate::acronyms::AcronymSet;
use crate::error::TransformError;
use crate::guard::{guard, Guarded, MAX_TEXT_LENGTH};
use crate::locale::LocaleTag;
use crate::mode::Mode;
use crate::strategies::{Context, Strategy};
use crate::types::{TransformRequest, TransformResult};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Transform `text` with the mode named `mode`.
///
/// An unrecognized mode returns the input unchanged (and untruncated) with
/// an [`TransformError::UnknownMode`] error. Unknown or malformed locale
/// tags fall back to English tables with untailored casing.
pub fn transform(text: &str, mode: &str, locale: &str, acronyms: &AcronymSet) -> TransformResult {
    match mode.parse::<Mode>() {
        Ok(mode) => transform_mode(text, mode, &LocaleTag::new(locale), acronyms),
        Err(error) => {
            tracing::warn!(mode, "rejecting unknown mode");
            TransformResult::failed(text, false, error)
        }
    }
}

/// Transform `text` with an already-resolved mode.
pub fn transform_mode(
    text: &str,
    mode: Mode,
    locale: &LocaleTag,
    acronyms: &AcronymSet,
) -> TransformResult {
    let (text, truncated) = match guard(text) {
        Guarded::Empty => return TransformResult::empty(),
        Guarded::Text { text, truncated } => (text, truncated),
    };

    if truncated {
        tracing::info!(limit = MAX_TEXT_LENGTH, "input truncated to length cap");
    }

    tracing::debug!(
        mode = mode.id(),
        locale = locale.as_str(),
        bytes = text.len(),
        acronyms = acronyms.len(),
        "dispatching transformation"
    );

    run_strategy(mode.strategy(), text, truncated, &Context::new(locale, acronyms))
}

/// Run a [`TransformRequest`] as received from a client.
pub fn transform_request(request: &TransformRequest) -> TransformResult {
    let acronyms: AcronymSet = request.acronyms.iter().collect();
    transform(&request.text, &request.mode, &request.locale, &acronyms)
}

/// Run `strategy` on guarded text, catching errors and panics.
///
/// The process panic hook is left alone, so a caught panic is still
/// reported by it (the default hook prints `thread ... panicked at` to
/// stderr) before it turns into a [`TransformError::Internal`] result.
/// Callers that want the payload only in `tracing` output must install
/// their own hook.
fn run_strategy(
    strategy: Strategy,
    text: &str,
    truncated: bool,
    ctx: &Context<'_>,
) -> TransformResult {
    let error = match panic::catch_unwind(AssertUnwindSafe(|| strategy(text, ctx))) {
        Ok(Ok(result)) => return TransformResult::ok(result, truncated),
        Ok(Err(error)) => error,
        Err(payload) => TransformError::Internal(panic_message(&*payload)),
    };

    tracing::warn!(error = %error, "transformation failed, returning input");
    TransformResult::failed(text, truncated, error)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "strategy panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    fn exploding(_text: &str, _ctx: &Context<'_>) -> Result<String> {
        panic!("boom")
    }

    fn broken_table(_text: &str, _ctx: &Context<'_>) -> Result<String> {
        Err(TransformError::LocaleData {
            code: "en".to_string(),
            reason: "missing".to_string(),
        })
    }

    fn ctx_parts() -> (LocaleTag, AcronymSet) {
        (LocaleTag::default(), AcronymSet::new())
    }

    #[test]
    fn test_dispatch() {
        let result = transform("hello world", "uppercase", "en", &AcronymSet::new());
        assert_eq!(result, TransformResult::ok("HELLO WORLD".to_string(), false));
    }

    #[test]
    fn test_unknown_mode_returns_input() {
        let result = transform("Hello", "pascalCase", "en", &AcronymSet::new());
        assert_eq!(result.result, "Hello");
        assert!(!result.truncated);
        assert_eq!(
            result.error,
            Some(TransformError::UnknownMode("pascalCase".to_string()))
        );
    }

    #[test]
    fn test_unknown_mode_is_checked_before_empty_input() {
        let result = transform("", "nope", "en", &AcronymSet::new());
        assert!(!result.is_ok());
        assert_eq!(result.result, "");
    }

    #[test]
    fn test_empty_input() {
        let result = transform("", "titleCase", "en", &AcronymSet::new());
        assert_eq!(result, TransformResult::empty());
    }

    #[test]
    fn test_panic_becomes_internal_error() {
        let (locale, acronyms) = ctx_parts();
        let ctx = Context::new(&locale, &acronyms);
        let result = run_strategy(exploding, "keep me", true, &ctx);

        assert_eq!(result.result, "keep me");
        assert!(result.truncated);
        assert_eq!(result.error, Some(TransformError::Internal("boom".to_string())));
    }

    #[test]
    fn test_strategy_error_returns_guarded_text() {
        let (locale, acronyms) = ctx_parts();
        let ctx = Context::new(&locale, &acronyms);
        let result = run_strategy(broken_table, "keep me", false, &ctx);

        assert_eq!(result.result, "keep me");
        assert!(matches!(result.error, Some(TransformError::LocaleData { .. })));
    }

    #[test]
    fn test_request() {
        let request = TransformRequest::new("nasa rocks", "capitalize").with_acronyms(["NASA"]);
        assert_eq!(transform_request(&request).result, "NASA rocks");
    }

    #[test]
    fn test_oversized_input_is_truncated() {
        let text = "ab".repeat(MAX_TEXT_LENGTH);
        let result = transform(&text, "uppercase", "en", &AcronymSet::new());
        assert!(result.truncated);
        assert_eq!(result.result.chars().count(), MAX_TEXT_LENGTH);
        assert!(result.result.chars().all(|c| c == 'A' || c == 'B'));
    }
}
