//! Base sentiment model seam and the shipped valence-lexicon model

use crate::api::output::SentimentScore;
use std::collections::HashMap;
use thiserror::Error;

/// Failure reported by a sentiment model backend.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ModelError {
    /// Backend-reported reason
    pub message: String,
}

impl ModelError {
    /// Create a model error from any displayable reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Base polarity/subjectivity estimation for one fragment.
///
/// Polarity is a compound valence score in [-1, 1]; subjectivity is in
/// [0, 1] and may come from a different estimator than polarity.
pub trait SentimentModel: Send + Sync {
    /// Score a single fragment.
    fn score(&self, fragment: &str) -> std::result::Result<SentimentScore, ModelError>;
}

/// Weighted valence-lexicon model.
///
/// Token valences are summed and squashed into [-1, 1] with the usual
/// `sum / sqrt(sum^2 + alpha)` normalization; subjectivity is the share of
/// valence-bearing tokens. Infallible.
pub struct ValenceLexiconModel {
    valences: HashMap<&'static str, f64>,
    alpha: f64,
}

impl ValenceLexiconModel {
    /// Create the model with the built-in bilingual valence table.
    pub fn new() -> Self {
        Self {
            valences: build_valence_table(),
            alpha: 15.0,
        }
    }
}

impl Default for ValenceLexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for ValenceLexiconModel {
    fn score(&self, fragment: &str) -> std::result::Result<SentimentScore, ModelError> {
        let lowered = fragment.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Ok(SentimentScore {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let mut sum = 0.0;
        let mut hits = 0usize;
        for token in &tokens {
            if let Some(valence) = self.valences.get(token) {
                sum += valence;
                hits += 1;
            }
        }

        let polarity = sum / (sum * sum + self.alpha).sqrt();
        let subjectivity = (hits as f64 / tokens.len() as f64).min(1.0);
        Ok(SentimentScore {
            polarity,
            subjectivity,
        })
    }
}

fn build_valence_table() -> HashMap<&'static str, f64> {
    [
        // English
        ("happy", 1.9),
        ("joy", 2.1),
        ("love", 2.3),
        ("great", 1.8),
        ("good", 1.5),
        ("wonderful", 2.2),
        ("excellent", 2.4),
        ("hope", 1.7),
        ("calm", 1.0),
        ("fine", 0.8),
        ("okay", 0.5),
        ("sad", -1.8),
        ("sadness", -1.9),
        ("angry", -2.0),
        ("anger", -2.0),
        ("hate", -2.2),
        ("terrible", -2.1),
        ("awful", -2.0),
        ("horrible", -2.2),
        ("bad", -1.5),
        ("worried", -1.3),
        ("tired", -1.0),
        ("lonely", -1.6),
        ("frustrating", -1.5),
        ("frustrated", -1.6),
        ("cry", -1.7),
        // Spanish, for degraded pass-through runs
        ("feliz", 1.9),
        ("alegría", 2.1),
        ("amor", 2.3),
        ("bien", 1.2),
        ("esperanza", 1.7),
        ("tranquilo", 1.0),
        ("triste", -1.8),
        ("tristeza", -1.9),
        ("enojado", -2.0),
        ("odio", -2.2),
        ("mal", -1.4),
        ("cansado", -1.0),
        ("frustrante", -1.5),
        ("frustrado", -1.6),
    ]
    .into_iter()
    .collect()
}
