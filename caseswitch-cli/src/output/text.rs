//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use caseswitch_core::TransformResult;
use std::io::{self, Write};

/// Plain text formatter - outputs each result on its own line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, _source: &str, result: &TransformResult) -> Result<()> {
        writeln!(self.writer, "{}", result.result)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
