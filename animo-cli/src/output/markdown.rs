//! Markdown output formatter

use super::{FormatOptions, OutputFormatter};
use animo_core::AnalysisReport;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one table of fragments per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    entry_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            entry_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, report: &AnalysisReport) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Sentence | Label | Polarity | Subjectivity |")?;
        writeln!(self.writer, "|----------|-------|----------|--------------|")?;
        for entry in &report.entries {
            self.entry_count += 1;
            writeln!(
                self.writer,
                "| {} | {} | {:.2} | {:.2} |",
                entry.sentence.replace('|', "\\|"),
                entry.label,
                entry.score.polarity,
                entry.score.subjectivity
            )?;
        }
        writeln!(self.writer)?;
        if self.options.include_metadata {
            let m = &report.metadata;
            writeln!(
                self.writer,
                "*Detected {} → pivot {}, translated: {}*",
                m.detected_language, m.pivot_language, m.translated
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total fragments: {}*", self.entry_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animo_core::{Emotion, Metadata, ReportEntry, SentimentScore};

    #[test]
    fn renders_table_and_total() {
        let report = AnalysisReport {
            entries: vec![ReportEntry {
                sentence: "Estoy triste".to_string(),
                fragment: "i am sad".to_string(),
                label: "Sadness".to_string(),
                emotion: Emotion::Sadness,
                score: SentimentScore {
                    polarity: -0.15,
                    subjectivity: 0.4,
                },
            }],
            metadata: Metadata {
                detected_language: "es".to_string(),
                pivot_language: "en".to_string(),
                translated: true,
                fragment_count: 1,
                processing_time_ms: 2,
            },
        };

        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer, FormatOptions::default());
            formatter.format_report("diary.txt", &report).unwrap();
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("## diary.txt"));
        assert!(output.contains("| Estoy triste | Sadness | -0.15 | 0.40 |"));
        assert!(output.contains("*Total fragments: 1*"));
    }
}
