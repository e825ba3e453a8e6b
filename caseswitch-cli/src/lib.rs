//! caseswitch CLI library
//!
//! This library provides the command-line interface for the caseswitch
//! text transformation engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
