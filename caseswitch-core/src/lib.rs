//! Locale-aware text transformation engine
//!
//! Converts a piece of text with one of ten modes (upper/lower case,
//! sentence and title case, camel/kebab/snake identifiers, whitespace
//! cleanup, accent removal and URL slugs), keeping caller-supplied acronyms
//! in uppercase. The engine is a pure function: it performs no I/O, never
//! panics across its public boundary, and reports every failure inside the
//! returned [`TransformResult`].
//!
//! # Pipeline
//!
//! - **guard**: empty input short-circuits; long input is cut to
//!   [`MAX_TEXT_LENGTH`] characters
//! - **normalize / tokenizer**: separator folding and word, sentence and
//!   camel-hump boundaries
//! - **strategies**: one function per [`Mode`], dispatched by the engine
//!
//! # Example
//!
//! ```rust
//! use caseswitch_core::{transform, AcronymSet};
//!
//! let acronyms: AcronymSet = ["NASA"].into_iter().collect();
//!
//! let result = transform("the history of nasa", "titleCase", "en", &acronyms);
//! assert_eq!(result.result, "The History of NASA");
//! assert!(!result.truncated);
//!
//! let result = transform("Café du Monde!", "slug", "fr", &AcronymSet::new());
//! assert_eq!(result.result, "cafe-du-monde");
//! ```

#![warn(missing_docs)]

pub mod acronyms;
pub mod engine;
pub mod error;
pub mod guard;
pub mod locale;
pub mod mode;
pub mod normalize;
pub mod settings;
pub mod strategies;
pub mod tokenizer;
pub mod types;

pub use acronyms::AcronymSet;
pub use engine::{transform, transform_mode, transform_request};
pub use error::{Result, TransformError};
pub use guard::MAX_TEXT_LENGTH;
pub use locale::{Locale, LocaleTag};
pub use mode::Mode;
pub use settings::Settings;
pub use types::{TransformRequest, TransformResult};
