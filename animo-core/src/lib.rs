//! Emotion annotation pipeline
//!
//! Turns a blob of text into a multi-line emotional report: language
//! detection, optional normalization into a pivot language, connector-aware
//! sentence segmentation, lexicon-corrected polarity/subjectivity scoring,
//! and a discrete emotion label per fragment.
//!
//! ```
//! use animo_core::EmotionAnalyzer;
//!
//! let analyzer = EmotionAnalyzer::new().expect("default configuration");
//! let report = analyzer.analyze_text("I am happy. This delay is frustrating.").unwrap();
//! for line in report.render().lines() {
//!     println!("{line}");
//! }
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod detect;
pub mod domain;
pub mod pipeline;
pub mod score;
pub mod segment;
pub mod sentiment;
pub mod translate;

// Re-export key types
pub use api::config::{AnalyzerConfig, AnalyzerConfigBuilder, ScoreFailurePolicy};
pub use api::error::{AnalyzeError, AnalyzeResult, CoreError, Result};
pub use api::input::Input;
pub use api::output::{AnalysisReport, Metadata, ReportEntry, SentimentScore};
pub use api::{analyze_file, analyze_text, EmotionAnalyzer, EmotionAnalyzerBuilder};
pub use detect::{FixedLanguage, LanguageDetect, WhatlangDetector};
pub use domain::emotion::{ClassifyThresholds, Emotion};
pub use domain::lexicon::{ContextualLexicon, Lexicon};
pub use score::{EmotionScorer, ScoredFragment};
pub use segment::Segmenter;
pub use sentiment::{ModelError, SentimentModel, ValenceLexiconModel};
pub use translate::{GlossaryTranslator, IdentityTranslator, Translate};
