//! Plain text output formatter

use super::{FormatOptions, OutputFormatter};
use animo_core::AnalysisReport;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one `'<sentence>' → <label> (pol, subj)` line per
/// fragment, the canonical report rendering.
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            documents: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, report: &AnalysisReport) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        if self.options.with_headers {
            writeln!(self.writer, "# {source}")?;
        }
        for entry in &report.entries {
            writeln!(self.writer, "{}", entry.render())?;
        }
        if self.options.include_metadata {
            let m = &report.metadata;
            writeln!(
                self.writer,
                "# detected: {}, pivot: {}, translated: {}, fragments: {}",
                m.detected_language, m.pivot_language, m.translated, m.fragment_count
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
