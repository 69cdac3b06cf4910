//! Affect lexicons for post-hoc polarity correction
//!
//! Matching is substring containment over the lowercased fragment, not
//! tokenized: "sad" also fires inside "sadness". Each lexicon word adjusts
//! polarity at most once per fragment regardless of repeats.

use serde::{Deserialize, Serialize};

/// A fixed-magnitude adjustment lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Lowercased words matched by substring containment
    pub words: Vec<String>,
    /// Magnitude applied once per matched word (sign chosen by the caller)
    pub magnitude: f64,
}

impl Lexicon {
    /// Build a lexicon, lowercasing all words.
    pub fn new<I, S>(words: I, magnitude: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            magnitude,
        }
    }

    /// Words of this lexicon contained in `lowered` (already lowercased).
    pub fn matches<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |word| !word.is_empty() && lowered.contains(*word))
    }
}

/// A contextual lexicon that both penalizes polarity and attaches an
/// auxiliary label, one label instance per matched word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextualLexicon {
    /// Lowercased words matched by substring containment
    pub words: Vec<String>,
    /// Penalty subtracted once per matched word
    pub penalty: f64,
    /// Auxiliary label appended once per matched word, never deduplicated
    pub label: String,
}

impl ContextualLexicon {
    /// The frustration/impatience lexicon carried by the original analyzer.
    pub fn frustration() -> Self {
        Self {
            words: [
                "frustrating",
                "frustrated",
                "waiting",
                "delay",
                "stuck",
                "slow",
                "again and again",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            penalty: 0.20,
            label: "Frustración 😠".to_string(),
        }
    }
}

/// Default negative-affect words.
pub fn default_negative_words() -> Vec<String> {
    [
        "sad", "angry", "terrible", "awful", "horrible", "bad", "hate", "worried", "cry",
        "lonely", "tired", "triste", "enojado", "mal", "odio",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Default positive-affect words.
pub fn default_positive_words() -> Vec<String> {
    [
        "happy", "great", "good", "love", "wonderful", "excellent", "hope", "joy", "calm",
        "feliz", "bien", "amor", "esperanza", "tranquilo",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
