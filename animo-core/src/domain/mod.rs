//! Domain model: fragments, language profiles, lexicons, emotion labels

pub mod emotion;
pub mod language;
pub mod lexicon;

pub use emotion::{ClassifyThresholds, Emotion};
pub use lexicon::{ContextualLexicon, Lexicon};

/// A contiguous span of the input produced by segmentation.
///
/// The position index is stable: fragments can always be mapped back to the
/// original sentence ordering, and segmentation never reorders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    /// Original-language form (assigned by re-alignment; may equal `normalized`)
    pub original: String,
    /// Normalized (pivot-language) form that was segmented and scored
    pub normalized: String,
    /// Zero-based position in appearance order
    pub index: usize,
}

impl TextFragment {
    /// Create a fragment whose original form is not yet known.
    pub fn new(normalized: impl Into<String>, index: usize) -> Self {
        let normalized = normalized.into();
        Self {
            original: normalized.clone(),
            index,
            normalized,
        }
    }
}
