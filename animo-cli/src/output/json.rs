//! JSON output formatter

use super::{FormatOptions, OutputFormatter};
use animo_core::{AnalysisReport, Metadata, ReportEntry};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs an array of analyzed documents
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    documents: Vec<DocumentRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentRecord {
    /// Where the text came from (path, `-` for stdin, `text` for --text)
    pub source: String,
    /// Report entries in fragment order
    pub entries: Vec<ReportEntry>,
    /// Run metadata, present when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, report: &AnalysisReport) -> Result<()> {
        self.documents.push(DocumentRecord {
            source: source.to_string(),
            entries: report.entries.clone(),
            metadata: self
                .options
                .include_metadata
                .then(|| report.metadata.clone()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.options.pretty_json {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
