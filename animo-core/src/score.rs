//! Per-fragment emotion scoring
//!
//! A base sentiment model supplies polarity and subjectivity; affect
//! lexicons then correct polarity by fixed magnitudes and may attach
//! auxiliary labels. The adjusted polarity is classified into a primary
//! emotion and is deliberately not re-clamped into [-1, 1] after
//! adjustment.

use crate::api::error::{CoreError, Result};
use crate::api::output::SentimentScore;
use crate::domain::emotion::{ClassifyThresholds, Emotion};
use crate::domain::lexicon::{ContextualLexicon, Lexicon};
use crate::sentiment::SentimentModel;

/// A fragment's scoring outcome before report formatting.
#[derive(Debug, Clone)]
pub struct ScoredFragment {
    /// Primary emotion from thresholding the adjusted polarity
    pub primary: Emotion,
    /// Auxiliary labels, one instance per matched contextual word
    pub auxiliary: Vec<String>,
    /// Adjusted polarity, unrounded and unclamped
    pub polarity: f64,
    /// Base-model subjectivity, unrounded
    pub subjectivity: f64,
}

impl ScoredFragment {
    /// Render the label: `"<primary>"`, or
    /// `"<primary> + <aux1>, <aux2>, …"` when auxiliaries exist.
    pub fn rendered_label(&self) -> String {
        if self.auxiliary.is_empty() {
            self.primary.to_string()
        } else {
            format!("{} + {}", self.primary, self.auxiliary.join(", "))
        }
    }
}

/// Scores one fragment at a time; holds no cross-invocation state beyond
/// its configuration.
pub struct EmotionScorer {
    model: Box<dyn SentimentModel>,
    negative: Lexicon,
    positive: Lexicon,
    contextual: Option<ContextualLexicon>,
    thresholds: ClassifyThresholds,
}

impl EmotionScorer {
    /// Create a scorer over the given base model and lexicons.
    pub fn new(
        model: Box<dyn SentimentModel>,
        negative: Lexicon,
        positive: Lexicon,
        contextual: Option<ContextualLexicon>,
        thresholds: ClassifyThresholds,
    ) -> Self {
        let contextual = contextual.map(|mut ctx| {
            for word in &mut ctx.words {
                *word = word.to_lowercase();
            }
            ctx
        });
        Self {
            model,
            negative,
            positive,
            contextual,
            thresholds,
        }
    }

    /// Score a single fragment.
    ///
    /// A base-model failure is recoverable: it surfaces as
    /// [`CoreError::ScoringFailed`] naming the fragment, and the
    /// coordinator's failure policy decides what happens next.
    pub fn score(&self, fragment: &str) -> Result<ScoredFragment> {
        let base = self
            .model
            .score(fragment)
            .map_err(|e| CoreError::ScoringFailed {
                fragment: fragment.to_string(),
                reason: e.to_string(),
            })?;

        let lowered = fragment.to_lowercase();
        let mut polarity = base.polarity;

        for _word in self.negative.matches(&lowered) {
            polarity -= self.negative.magnitude;
        }
        for _word in self.positive.matches(&lowered) {
            polarity += self.positive.magnitude;
        }

        let mut auxiliary = Vec::new();
        if let Some(ctx) = &self.contextual {
            for word in &ctx.words {
                if !word.is_empty() && lowered.contains(word.as_str()) {
                    polarity -= ctx.penalty;
                    auxiliary.push(ctx.label.clone());
                }
            }
        }

        Ok(ScoredFragment {
            primary: self.thresholds.classify(polarity),
            auxiliary,
            polarity,
            subjectivity: base.subjectivity,
        })
    }

    /// A neutral stand-in used when the failure policy substitutes instead
    /// of aborting.
    pub fn neutral_placeholder() -> ScoredFragment {
        ScoredFragment {
            primary: Emotion::Neutral,
            auxiliary: Vec::new(),
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

/// Round to two decimal places for reporting. Classification always uses
/// the unrounded value.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
