//! Output formatting module

use animo_core::AnalysisReport;
use anyhow::Result;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format one analyzed document
    fn format_report(&mut self, source: &str, report: &AnalysisReport) -> Result<()>;

    /// Finalize output (e.g. close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Options shared by all formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Print a source header before each document (multi-document runs)
    pub with_headers: bool,
    /// Append run metadata after each document
    pub include_metadata: bool,
    /// Pretty-print JSON
    pub pretty_json: bool,
}

/// Construct the formatter for a format name.
pub fn create_formatter(
    format: crate::commands::analyze::OutputFormat,
    writer: Box<dyn Write>,
    options: FormatOptions,
) -> Box<dyn OutputFormatter> {
    use crate::commands::analyze::OutputFormat;
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options)),
    }
}
