//! Public API for the emotion annotation pipeline
//!
//! [`EmotionAnalyzer`] is the stable entry point: it owns a wired
//! [`Pipeline`](crate::pipeline::Pipeline) and exposes `analyze` over the
//! unified [`Input`] abstraction.

pub mod config;
pub mod error;
pub mod input;
pub mod output;

use crate::detect::{LanguageDetect, WhatlangDetector};
use crate::pipeline::Pipeline;
use crate::score::EmotionScorer;
use crate::sentiment::{SentimentModel, ValenceLexiconModel};
use crate::translate::{IdentityTranslator, Translate};
use config::AnalyzerConfig;
use error::{AnalyzeError, AnalyzeResult};
use input::Input;
use output::AnalysisReport;

use crate::domain::lexicon::Lexicon;

/// Main entry point for emotion analysis.
///
/// Holds no mutable state: every call to [`analyze`](Self::analyze) builds
/// a fresh report, and two calls over identical input with deterministic
/// collaborators produce identical report strings.
pub struct EmotionAnalyzer {
    pipeline: Pipeline,
}

impl std::fmt::Debug for EmotionAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmotionAnalyzer").finish_non_exhaustive()
    }
}

impl EmotionAnalyzer {
    /// Create an analyzer with default configuration: whatlang detection,
    /// pass-through normalization, and the built-in valence model.
    pub fn new() -> AnalyzeResult<Self> {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration and default
    /// collaborators.
    pub fn with_config(config: AnalyzerConfig) -> AnalyzeResult<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder to swap collaborators (detector, translator,
    /// sentiment model) as well as configuration.
    pub fn builder() -> EmotionAnalyzerBuilder {
        EmotionAnalyzerBuilder::default()
    }

    /// Analyze the given input and return the report.
    pub fn analyze(&self, input: Input) -> AnalyzeResult<AnalysisReport> {
        let start = std::time::Instant::now();
        let text = input.to_text().map_err(AnalyzeError::Core)?;
        let mut report = self.pipeline.analyze(&text).map_err(AnalyzeError::Core)?;
        report.metadata.processing_time_ms = start.elapsed().as_millis() as u64;
        Ok(report)
    }

    /// Analyze a text string directly (convenience method).
    pub fn analyze_text(&self, text: &str) -> AnalyzeResult<AnalysisReport> {
        self.analyze(Input::from_text(text))
    }

    /// The configuration the analyzer was built with.
    pub fn config(&self) -> &AnalyzerConfig {
        self.pipeline.config()
    }
}

/// Builder for [`EmotionAnalyzer`].
pub struct EmotionAnalyzerBuilder {
    config: AnalyzerConfig,
    detector: Option<Box<dyn LanguageDetect>>,
    translator: Option<Box<dyn Translate>>,
    model: Option<Box<dyn SentimentModel>>,
}

impl Default for EmotionAnalyzerBuilder {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            detector: None,
            translator: None,
            model: None,
        }
    }
}

impl EmotionAnalyzerBuilder {
    /// Use the given configuration.
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom language detector.
    pub fn detector(mut self, detector: Box<dyn LanguageDetect>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Use a custom translator backend.
    pub fn translator(mut self, translator: Box<dyn Translate>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Use a custom base sentiment model.
    pub fn sentiment_model(mut self, model: Box<dyn SentimentModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Validate the configuration and wire the analyzer.
    pub fn build(self) -> AnalyzeResult<EmotionAnalyzer> {
        self.config.validate().map_err(AnalyzeError::Core)?;

        let detector = self
            .detector
            .unwrap_or_else(|| Box::new(WhatlangDetector::new()));
        let translator = self
            .translator
            .unwrap_or_else(|| Box::new(IdentityTranslator::new()));
        let model = self
            .model
            .unwrap_or_else(|| Box::new(ValenceLexiconModel::new()));

        let scorer = EmotionScorer::new(
            model,
            Lexicon::new(
                self.config.negative_words.iter().map(String::as_str),
                self.config.negative_penalty,
            ),
            Lexicon::new(
                self.config.positive_words.iter().map(String::as_str),
                self.config.positive_bonus,
            ),
            self.config.contextual.clone(),
            self.config.thresholds,
        );

        let pipeline =
            Pipeline::new(self.config, detector, translator, scorer).map_err(AnalyzeError::Core)?;
        Ok(EmotionAnalyzer { pipeline })
    }
}

/// Analyze text with the default configuration.
pub fn analyze_text(text: &str) -> AnalyzeResult<AnalysisReport> {
    EmotionAnalyzer::new()?.analyze_text(text)
}

/// Analyze a file with the default configuration.
pub fn analyze_file<P: AsRef<std::path::Path>>(path: P) -> AnalyzeResult<AnalysisReport> {
    EmotionAnalyzer::new()?.analyze(Input::from_file(path.as_ref().to_path_buf()))
}
