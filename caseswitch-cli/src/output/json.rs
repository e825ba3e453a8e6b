//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use caseswitch_core::TransformResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<ResultRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultRecord {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    /// Transformed text, or the input when the transformation failed
    pub result: String,
    /// Whether the input was cut to the length cap
    pub truncated: bool,
    /// Error message, if the transformation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, result: &TransformResult) -> Result<()> {
        self.records.push(ResultRecord {
            source: source.to_string(),
            result: result.result.clone(),
            truncated: result.truncated,
            error: result.error.as_ref().map(ToString::to_string),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
