//! Report data transfer objects

use crate::domain::emotion::Emotion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity and subjectivity for one fragment.
///
/// Polarity starts in [-1, 1] but lexicon adjustment can push the adjusted
/// value outside the range; report values are rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Signed valence, negative = unpleasant
    pub polarity: f64,
    /// Opinion vs. fact, in [0, 1]
    pub subjectivity: f64,
}

/// One line of the report: a displayed original-language sentence with the
/// label and score of the fragment it was aligned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Original-language sentence chosen by positional re-alignment
    pub sentence: String,
    /// The normalized fragment that was actually scored
    pub fragment: String,
    /// Rendered label, e.g. `"Joy"` or `"Anger + Frustración 😠"`
    pub label: String,
    /// Primary emotion
    pub emotion: Emotion,
    /// Score rounded to two decimals
    pub score: SentimentScore,
}

impl ReportEntry {
    /// Canonical single-line rendering.
    pub fn render(&self) -> String {
        format!(
            "'{}' → {} (pol: {:.2}, subj: {:.2})",
            self.sentence, self.label, self.score.polarity, self.score.subjectivity
        )
    }
}

/// Per-run statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Language detected on the raw input (or the configured fallback)
    pub detected_language: String,
    /// Pivot language fragments were normalized into
    pub pivot_language: String,
    /// Whether normalization actually translated the text
    pub translated: bool,
    /// Number of scored fragments
    pub fragment_count: usize,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Ordered analysis result; built fresh per invocation and immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Entries in fragment appearance order
    pub entries: Vec<ReportEntry>,
    /// Run statistics
    pub metadata: Metadata,
}

impl AnalysisReport {
    /// Whether the report carries no entries (e.g. empty input).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Multi-line report string: one rendered entry per line. Metadata is
    /// deliberately excluded so identical inputs render identically.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(ReportEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
