//! Analyzer configuration
//!
//! All tunables of the pipeline live here: pivot and fallback languages,
//! segmentation thresholds, lexicons and adjustment magnitudes,
//! classification bands, and the scoring failure policy. The whole struct
//! round-trips through serde, so a TOML file can override any subset of
//! fields.

use crate::api::error::{CoreError, Result};
use crate::domain::emotion::ClassifyThresholds;
use crate::domain::language::default_connector_sets;
use crate::domain::lexicon::{default_negative_words, default_positive_words, ContextualLexicon};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// What the coordinator does when the sentiment model fails on a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFailurePolicy {
    /// Abort the whole report with an error naming the fragment
    #[default]
    Abort,
    /// Keep going, substituting a neutral placeholder entry
    Substitute,
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Language text is normalized into before scoring
    pub pivot_language: String,
    /// Code reported when detection cannot decide
    pub fallback_language: String,
    /// Whether to translate non-pivot text at all
    pub normalize: bool,
    /// Sentences above this word count are re-split at connectors
    pub max_sentence_words: usize,
    /// Minimum accumulated words before a sub-fragment is flushed
    pub min_fragment_words: usize,
    /// Negative-affect lexicon words
    pub negative_words: Vec<String>,
    /// Penalty subtracted once per matched negative word
    pub negative_penalty: f64,
    /// Positive-affect lexicon words
    pub positive_words: Vec<String>,
    /// Bonus added once per matched positive word
    pub positive_bonus: f64,
    /// Failure policy for sentiment-model errors
    pub on_score_failure: ScoreFailurePolicy,
    /// Connector word lists keyed by language code
    pub connector_sets: BTreeMap<String, Vec<String>>,
    /// Optional contextual lexicon (penalty plus auxiliary label)
    pub contextual: Option<ContextualLexicon>,
    /// Polarity bands for primary-label classification
    pub thresholds: ClassifyThresholds,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            pivot_language: "en".to_string(),
            fallback_language: "en".to_string(),
            normalize: true,
            max_sentence_words: 15,
            min_fragment_words: 5,
            negative_words: default_negative_words(),
            negative_penalty: 0.15,
            positive_words: default_positive_words(),
            positive_bonus: 0.10,
            on_score_failure: ScoreFailurePolicy::default(),
            connector_sets: default_connector_sets(),
            contextual: Some(ContextualLexicon::frustration()),
            thresholds: ClassifyThresholds::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Create a builder over the defaults.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Parse a TOML document; unspecified fields keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::IoError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Check invariants the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if self.pivot_language.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "pivot_language must not be empty".to_string(),
            ));
        }
        if self.fallback_language.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "fallback_language must not be empty".to_string(),
            ));
        }
        if self.max_sentence_words == 0 || self.min_fragment_words == 0 {
            return Err(CoreError::ConfigError(
                "word thresholds must be non-zero".to_string(),
            ));
        }
        if self.negative_penalty < 0.0 || self.positive_bonus < 0.0 {
            return Err(CoreError::ConfigError(
                "lexicon magnitudes are applied signed and must be non-negative".to_string(),
            ));
        }
        if let Some(ctx) = &self.contextual {
            if ctx.penalty < 0.0 {
                return Err(CoreError::ConfigError(
                    "contextual penalty must be non-negative".to_string(),
                ));
            }
        }
        self.thresholds.validate().map_err(CoreError::ConfigError)
    }
}

/// Fluent builder for [`AnalyzerConfig`].
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Set the pivot language code.
    pub fn pivot_language(mut self, code: impl Into<String>) -> Self {
        self.config.pivot_language = code.into();
        self
    }

    /// Set the detection fallback language code.
    pub fn fallback_language(mut self, code: impl Into<String>) -> Self {
        self.config.fallback_language = code.into();
        self
    }

    /// Enable or disable normalization (translation to the pivot).
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.config.normalize = enabled;
        self
    }

    /// Set the long-sentence threshold.
    pub fn max_sentence_words(mut self, words: usize) -> Self {
        self.config.max_sentence_words = words;
        self
    }

    /// Set the sub-fragment flush threshold.
    pub fn min_fragment_words(mut self, words: usize) -> Self {
        self.config.min_fragment_words = words;
        self
    }

    /// Replace the connector set for one language.
    pub fn connectors(mut self, language: impl Into<String>, words: Vec<String>) -> Self {
        self.config.connector_sets.insert(language.into(), words);
        self
    }

    /// Replace the negative lexicon.
    pub fn negative_words(mut self, words: Vec<String>) -> Self {
        self.config.negative_words = words;
        self
    }

    /// Replace the positive lexicon.
    pub fn positive_words(mut self, words: Vec<String>) -> Self {
        self.config.positive_words = words;
        self
    }

    /// Set, or clear, the contextual lexicon.
    pub fn contextual(mut self, contextual: Option<ContextualLexicon>) -> Self {
        self.config.contextual = contextual;
        self
    }

    /// Replace the classification thresholds.
    pub fn thresholds(mut self, thresholds: ClassifyThresholds) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    /// Set the scoring failure policy.
    pub fn on_score_failure(mut self, policy: ScoreFailurePolicy) -> Self {
        self.config.on_score_failure = policy;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<AnalyzerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = AnalyzerConfig::builder()
            .pivot_language("es")
            .fallback_language("es")
            .normalize(false)
            .max_sentence_words(12)
            .build()
            .unwrap();
        assert_eq!(config.pivot_language, "es");
        assert_eq!(config.max_sentence_words, 12);
        assert!(!config.normalize);
    }

    #[test]
    fn empty_pivot_rejected() {
        let err = AnalyzerConfig::builder()
            .pivot_language("  ")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("pivot_language"));
    }

    #[test]
    fn toml_overrides_subset_of_fields() {
        let config = AnalyzerConfig::from_toml_str(
            r#"
            pivot_language = "es"
            max_sentence_words = 10

            [thresholds]
            joy = 0.4
            "#,
        )
        .unwrap();
        assert_eq!(config.pivot_language, "es");
        assert_eq!(config.max_sentence_words, 10);
        assert_eq!(config.thresholds.joy, 0.4);
        // Untouched fields keep their defaults.
        assert_eq!(config.thresholds.calm, 0.05);
        assert_eq!(config.min_fragment_words, 5);
    }

    #[test]
    fn toml_disordered_thresholds_rejected() {
        let err = AnalyzerConfig::from_toml_str(
            r#"
            [thresholds]
            joy = -0.5
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("thresholds"));
    }

    #[test]
    fn toml_file_loading() {
        let dir = std::env::temp_dir().join("animo-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("analyzer.toml");
        std::fs::write(&path, "pivot_language = \"es\"\n").unwrap();

        let config = AnalyzerConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.pivot_language, "es");

        let missing = dir.join("missing.toml");
        assert!(AnalyzerConfig::from_toml_file(&missing).is_err());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = AnalyzerConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let restored = AnalyzerConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(restored.pivot_language, config.pivot_language);
        assert_eq!(restored.negative_words, config.negative_words);
        assert_eq!(restored.thresholds, config.thresholds);
    }
}
