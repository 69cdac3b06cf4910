//! Emotion labels and polarity thresholding

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary emotion label, ordered from most positive to most negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    /// Adjusted polarity >= joy threshold
    Joy,
    /// Between the calm threshold and the joy threshold
    Calm,
    /// Strictly inside the neutral band
    Neutral,
    /// Between the sadness floor and the neutral band
    Sadness,
    /// Below the sadness floor
    Anger,
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Emotion::Joy => "Joy",
            Emotion::Calm => "Calm",
            Emotion::Neutral => "Neutral",
            Emotion::Sadness => "Sadness",
            Emotion::Anger => "Anger",
        };
        f.write_str(name)
    }
}

/// Polarity thresholds for primary-label classification.
///
/// Classification runs on the *unrounded* adjusted polarity, in this exact
/// order: `>= joy` is Joy, `>= calm` is Calm, `> neutral_floor` is Neutral,
/// `>= sadness_floor` is Sadness, anything lower is Anger. The bands do not
/// overlap: a polarity of exactly `neutral_floor` classifies as Sadness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyThresholds {
    /// Lower bound for Joy
    pub joy: f64,
    /// Lower bound for Calm
    pub calm: f64,
    /// Exclusive lower bound of the Neutral band
    pub neutral_floor: f64,
    /// Lower bound for Sadness
    pub sadness_floor: f64,
}

impl Default for ClassifyThresholds {
    fn default() -> Self {
        Self {
            joy: 0.3,
            calm: 0.05,
            neutral_floor: -0.05,
            sadness_floor: -0.3,
        }
    }
}

impl ClassifyThresholds {
    /// Map an adjusted polarity to its primary label.
    pub fn classify(&self, polarity: f64) -> Emotion {
        if polarity >= self.joy {
            Emotion::Joy
        } else if polarity >= self.calm {
            Emotion::Calm
        } else if polarity > self.neutral_floor {
            Emotion::Neutral
        } else if polarity >= self.sadness_floor {
            Emotion::Sadness
        } else {
            Emotion::Anger
        }
    }

    /// Check that the bands are ordered and non-overlapping.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.joy > self.calm && self.calm > self.neutral_floor && self.neutral_floor > self.sadness_floor {
            Ok(())
        } else {
            Err(format!(
                "thresholds must satisfy joy > calm > neutral_floor > sadness_floor, got {} / {} / {} / {}",
                self.joy, self.calm, self.neutral_floor, self.sadness_floor
            ))
        }
    }
}
