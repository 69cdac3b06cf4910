//! Language detection seam
//!
//! Detection is best-effort and never fails the pipeline: implementations
//! return `None` when they cannot decide, and the coordinator substitutes
//! the configured fallback code.

use whatlang::Lang;

/// Best-effort language identification.
pub trait LanguageDetect: Send + Sync {
    /// Guess the language code of `text`, or `None` when undecidable.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Trigram-based detector backed by `whatlang`.
#[derive(Debug, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetect for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        whatlang::detect(text).map(|info| iso639_1(info.lang()).to_string())
    }
}

/// A detector pinned to a single language code.
///
/// Used when the caller already knows the language (CLI `--language`) or in
/// tests that need deterministic detection.
#[derive(Debug, Clone)]
pub struct FixedLanguage(pub String);

impl LanguageDetect for FixedLanguage {
    fn detect(&self, _text: &str) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Map whatlang's identifiers onto the two-letter codes the pipeline keys
/// its connector sets and pivot on. Unmapped languages keep whatlang's
/// three-letter code.
fn iso639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Nld => "nl",
        Lang::Tur => "tr",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        Lang::Ukr => "uk",
        l => l.code(),
    }
}
