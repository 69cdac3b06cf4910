//! Pipeline coordination
//!
//! Orchestrates detect → normalize → segment → score → re-align → format.
//! Data flows one way; no stage holds state across invocations beyond the
//! read-only configuration.

use crate::api::config::{AnalyzerConfig, ScoreFailurePolicy};
use crate::api::error::Result;
use crate::api::output::{AnalysisReport, Metadata, ReportEntry, SentimentScore};
use crate::detect::LanguageDetect;
use crate::domain::TextFragment;
use crate::score::{round2, EmotionScorer, ScoredFragment};
use crate::segment::Segmenter;
use crate::translate::Translate;

/// The assembled pipeline. Construction wires the collaborator seams;
/// [`Pipeline::analyze`] is a pure function of its input given
/// deterministic collaborators.
pub struct Pipeline {
    config: AnalyzerConfig,
    detector: Box<dyn LanguageDetect>,
    translator: Box<dyn Translate>,
    segmenter: Segmenter,
    scorer: EmotionScorer,
}

impl Pipeline {
    /// Wire a pipeline from configuration and collaborators.
    pub fn new(
        config: AnalyzerConfig,
        detector: Box<dyn LanguageDetect>,
        translator: Box<dyn Translate>,
        scorer: EmotionScorer,
    ) -> Result<Self> {
        let segmenter = Segmenter::new(
            &config.connector_sets,
            config.max_sentence_words,
            config.min_fragment_words,
        )?;
        Ok(Self {
            config,
            detector,
            translator,
            segmenter,
            scorer,
        })
    }

    /// Run the full analysis over raw text.
    pub fn analyze(&self, raw: &str) -> Result<AnalysisReport> {
        if raw.trim().is_empty() {
            return Ok(self.empty_report());
        }

        let detected = self
            .detector
            .detect(raw)
            .unwrap_or_else(|| self.config.fallback_language.clone());

        let (normalized, translated) = self.normalize(raw, &detected);

        // Segmentation runs on the normalized text but keys its connector
        // set off the originally detected language.
        let fragments = self.fragments(&normalized, raw, &detected);

        let mut entries = Vec::with_capacity(fragments.len());
        for fragment in &fragments {
            let scored = match self.scorer.score(&fragment.normalized) {
                Ok(scored) => scored,
                Err(err) => match self.config.on_score_failure {
                    ScoreFailurePolicy::Abort => return Err(err),
                    ScoreFailurePolicy::Substitute => {
                        tracing::warn!(
                            fragment = %fragment.normalized,
                            "substituting neutral score: {err}"
                        );
                        EmotionScorer::neutral_placeholder()
                    }
                },
            };
            entries.push(entry_for(fragment, scored));
        }

        Ok(AnalysisReport {
            metadata: Metadata {
                detected_language: detected,
                pivot_language: self.config.pivot_language.clone(),
                translated,
                fragment_count: entries.len(),
                processing_time_ms: 0,
            },
            entries,
        })
    }

    /// Translate into the pivot language when needed, degrading to
    /// pass-through on backend failure.
    fn normalize(&self, raw: &str, detected: &str) -> (String, bool) {
        if !self.config.normalize || detected == self.config.pivot_language {
            return (raw.to_string(), false);
        }
        match self
            .translator
            .translate(raw, detected, &self.config.pivot_language)
        {
            Ok(translated) => (translated, true),
            Err(err) => {
                tracing::warn!(
                    source = detected,
                    target = %self.config.pivot_language,
                    "translation failed, analyzing untranslated text: {err}"
                );
                (raw.to_string(), false)
            }
        }
    }

    /// Segment the normalized text and re-align every fragment to an
    /// original-language sentence by position.
    ///
    /// The alignment is `index mod original_sentence_count` — a documented
    /// best-effort approximation that picks a plausible but possibly wrong
    /// sentence whenever segmentation produced a different fragment count
    /// than the original sentence split. When the raw text splits into zero
    /// sentences the fragment keeps its own normalized form.
    fn fragments(&self, normalized: &str, raw: &str, detected: &str) -> Vec<TextFragment> {
        let original_sentences = self.segmenter.split_sentences(raw);
        self.segmenter
            .segment(normalized, detected)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let mut fragment = TextFragment::new(text, index);
                if !original_sentences.is_empty() {
                    fragment.original =
                        original_sentences[index % original_sentences.len()].clone();
                }
                fragment
            })
            .collect()
    }

    fn empty_report(&self) -> AnalysisReport {
        AnalysisReport {
            entries: Vec::new(),
            metadata: Metadata {
                detected_language: self.config.fallback_language.clone(),
                pivot_language: self.config.pivot_language.clone(),
                translated: false,
                fragment_count: 0,
                processing_time_ms: 0,
            },
        }
    }

    /// The configuration this pipeline was wired with.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

fn entry_for(fragment: &TextFragment, scored: ScoredFragment) -> ReportEntry {
    ReportEntry {
        sentence: fragment.original.clone(),
        fragment: fragment.normalized.clone(),
        label: scored.rendered_label(),
        emotion: scored.primary,
        score: SentimentScore {
            polarity: round2(scored.polarity),
            subjectivity: round2(scored.subjectivity),
        },
    }
}
