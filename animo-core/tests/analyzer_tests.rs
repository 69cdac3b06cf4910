//! End-to-end tests for the analysis pipeline with deterministic
//! collaborators.

use animo_core::{
    AnalyzerConfig, CoreError, EmotionAnalyzer, Emotion, FixedLanguage, GlossaryTranslator,
    Input, ModelError, ScoreFailurePolicy, SentimentModel, SentimentScore, Translate,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Base model pinned to fixed values.
struct FixedModel {
    polarity: f64,
    subjectivity: f64,
}

impl SentimentModel for FixedModel {
    fn score(&self, _fragment: &str) -> Result<SentimentScore, ModelError> {
        Ok(SentimentScore {
            polarity: self.polarity,
            subjectivity: self.subjectivity,
        })
    }
}

/// Base model that always fails.
struct BrokenModel;

impl SentimentModel for BrokenModel {
    fn score(&self, _fragment: &str) -> Result<SentimentScore, ModelError> {
        Err(ModelError::new("model unavailable"))
    }
}

/// Translator that counts backend invocations.
struct CountingTranslator {
    calls: Arc<AtomicUsize>,
}

impl Translate for CountingTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> animo_core::Result<String> {
        if source != target {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
        Ok(text.to_string())
    }
}

/// Translator whose backend always fails.
struct FailingTranslator;

impl Translate for FailingTranslator {
    fn translate(&self, _text: &str, source: &str, target: &str) -> animo_core::Result<String> {
        Err(CoreError::TranslationFailed {
            src: source.to_string(),
            target: target.to_string(),
            reason: "backend unreachable".to_string(),
        })
    }
}

fn english_analyzer() -> EmotionAnalyzer {
    EmotionAnalyzer::builder()
        .detector(Box::new(FixedLanguage("en".to_string())))
        .build()
        .unwrap()
}

#[test]
fn scenario_positive_single_fragment() {
    // "happy" hits the positive lexicon for a +0.10 boost over the base
    // model score, landing in the Joy band.
    let analyzer = english_analyzer();
    let report = analyzer.analyze_text("I am happy.").unwrap();

    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    assert_eq!(entry.sentence, "I am happy");
    assert_eq!(entry.emotion, Emotion::Joy);
    assert_eq!(entry.label, "Joy");
    assert!(entry.score.polarity >= 0.3);
    assert_eq!(entry.render(), format!(
        "'I am happy' → Joy (pol: {:.2}, subj: {:.2})",
        entry.score.polarity, entry.score.subjectivity
    ));
}

#[test]
fn scenario_short_spanish_sentence_is_not_subsplit() {
    // Five words: far below the 15-word threshold, so the connector "pero"
    // never triggers a re-split.
    let analyzer = EmotionAnalyzer::builder()
        .config(
            AnalyzerConfig::builder()
                .normalize(false)
                .build()
                .unwrap(),
        )
        .detector(Box::new(FixedLanguage("es".to_string())))
        .build()
        .unwrap();
    let report = analyzer
        .analyze_text("Estoy triste pero tengo esperanza.")
        .unwrap();

    assert_eq!(report.entries.len(), 1);
    assert_eq!(
        report.entries[0].fragment,
        "Estoy triste pero tengo esperanza"
    );
}

#[test]
fn scenario_contextual_hits_accumulate() {
    // Two contextual matches: the label is appended twice and the penalty
    // applied twice (-0.40 from this lexicon alone).
    let analyzer = english_analyzer();
    let report = analyzer
        .analyze_text("This is frustrating and I hate waiting.")
        .unwrap();

    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    assert_eq!(entry.label, "Anger + Frustración 😠, Frustración 😠");
    assert_eq!(entry.emotion, Emotion::Anger);
    assert!(entry.score.polarity < -0.3);
}

#[test]
fn scenario_empty_input_yields_empty_report() {
    let analyzer = english_analyzer();
    for text in ["", "   ", "\n\t"] {
        let report = analyzer.analyze_text(text).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.render(), "");
        assert_eq!(report.metadata.fragment_count, 0);
    }
}

#[test]
fn analyze_is_deterministic() {
    let analyzer = english_analyzer();
    let text = "I am happy. This delay is frustrating. Nothing else happened today.";
    let first = analyzer.analyze_text(text).unwrap();
    let second = analyzer.analyze_text(text).unwrap();
    assert_eq!(first.render(), second.render());
}

#[test]
fn same_language_never_calls_the_backend() {
    let calls = Arc::new(AtomicUsize::new(0));
    let analyzer = EmotionAnalyzer::builder()
        .detector(Box::new(FixedLanguage("en".to_string())))
        .translator(Box::new(CountingTranslator {
            calls: Arc::clone(&calls),
        }))
        .build()
        .unwrap();

    analyzer.analyze_text("Plain english text. More of it.").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn translation_failure_degrades_to_passthrough() {
    let analyzer = EmotionAnalyzer::builder()
        .detector(Box::new(FixedLanguage("es".to_string())))
        .translator(Box::new(FailingTranslator))
        .build()
        .unwrap();

    let report = analyzer.analyze_text("Estoy triste hoy.").unwrap();
    assert!(!report.metadata.translated);
    assert_eq!(report.entries.len(), 1);
    // The untranslated text is what got scored.
    assert_eq!(report.entries[0].fragment, "Estoy triste hoy");
}

#[test]
fn glossary_translation_feeds_normalized_fragments() {
    let glossary = GlossaryTranslator::new(
        "es",
        "en",
        [
            ("estoy", "i am"),
            ("triste", "sad"),
            ("pero", "but"),
            ("tengo", "i have"),
            ("esperanza", "hope"),
        ],
    );
    let analyzer = EmotionAnalyzer::builder()
        .detector(Box::new(FixedLanguage("es".to_string())))
        .translator(Box::new(glossary))
        .build()
        .unwrap();

    let report = analyzer
        .analyze_text("Estoy triste pero tengo esperanza.")
        .unwrap();

    assert!(report.metadata.translated);
    assert_eq!(report.metadata.detected_language, "es");
    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    // Scored on the pivot-language fragment, displayed as the original.
    assert_eq!(entry.fragment, "i am sad, but i have hope");
    assert_eq!(entry.sentence, "Estoy triste pero tengo esperanza");
    assert_eq!(entry.emotion, Emotion::Sadness);
}

#[test]
fn realignment_wraps_by_modulo() {
    // One original sentence, segmented into two fragments: both entries
    // display the same original sentence (index mod 1 == 0).
    let analyzer = english_analyzer();
    let text = "The morning was calm and quiet near the old harbor but the afternoon brought a sudden storm over the bay.";
    let report = analyzer.analyze_text(text).unwrap();

    assert_eq!(report.entries.len(), 2);
    for entry in &report.entries {
        assert_eq!(
            entry.sentence,
            "The morning was calm and quiet near the old harbor but the afternoon brought a sudden storm over the bay"
        );
    }
    assert_ne!(report.entries[0].fragment, report.entries[1].fragment);
}

#[test]
fn thresholding_happens_before_rounding() {
    let analyzer = EmotionAnalyzer::builder()
        .config(
            AnalyzerConfig::builder()
                .negative_words(vec![])
                .positive_words(vec![])
                .contextual(None)
                .build()
                .unwrap(),
        )
        .detector(Box::new(FixedLanguage("en".to_string())))
        .sentiment_model(Box::new(FixedModel {
            polarity: 0.049999,
            subjectivity: 0.5,
        }))
        .build()
        .unwrap();

    let report = analyzer.analyze_text("An unremarkable statement.").unwrap();
    let entry = &report.entries[0];
    // Displays as 0.05 but classifies below the Calm cutoff.
    assert_eq!(entry.score.polarity, 0.05);
    assert_eq!(entry.emotion, Emotion::Neutral);
}

#[test]
fn score_failure_aborts_by_default() {
    let analyzer = EmotionAnalyzer::builder()
        .detector(Box::new(FixedLanguage("en".to_string())))
        .sentiment_model(Box::new(BrokenModel))
        .build()
        .unwrap();

    let err = analyzer.analyze_text("Anything at all.").unwrap_err();
    assert!(err.to_string().contains("Anything at all"));
    assert!(err.to_string().contains("model unavailable"));
}

#[test]
fn score_failure_can_substitute_neutral_entries() {
    let analyzer = EmotionAnalyzer::builder()
        .config(
            AnalyzerConfig::builder()
                .on_score_failure(ScoreFailurePolicy::Substitute)
                .build()
                .unwrap(),
        )
        .detector(Box::new(FixedLanguage("en".to_string())))
        .sentiment_model(Box::new(BrokenModel))
        .build()
        .unwrap();

    let report = analyzer.analyze_text("First thing. Second thing.").unwrap();
    assert_eq!(report.entries.len(), 2);
    for entry in &report.entries {
        assert_eq!(entry.emotion, Emotion::Neutral);
        assert_eq!(entry.score.polarity, 0.0);
    }
}

#[test]
fn file_input_is_supported() {
    let dir = std::env::temp_dir().join("animo-core-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("input.txt");
    std::fs::write(&path, "I am happy.").unwrap();

    let analyzer = english_analyzer();
    let report = analyzer.analyze(Input::from_file(&path)).unwrap();
    assert_eq!(report.entries.len(), 1);

    std::fs::remove_file(&path).ok();
}
