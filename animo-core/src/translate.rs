//! Translation seam
//!
//! Translation is an external collaborator behind the [`Translate`] trait.
//! The contract: equal source and target codes return the input unchanged
//! without invoking any backend, and backend failures are recoverable — the
//! coordinator degrades them to pass-through with a logged warning.

use crate::api::error::{CoreError, Result};
use std::collections::HashMap;

/// Text translation between language codes.
pub trait Translate: Send + Sync {
    /// Translate `text` from `source` to `target`.
    ///
    /// Implementations must short-circuit `source == target` to the
    /// unchanged input.
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Pass-through translator: the default when no backend is wired.
///
/// With it, normalization is the identity and scoring runs on the
/// original-language text.
#[derive(Debug, Default)]
pub struct IdentityTranslator;

impl IdentityTranslator {
    /// Create a new pass-through translator.
    pub fn new() -> Self {
        Self
    }
}

impl Translate for IdentityTranslator {
    fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

/// Word-map translator for offline use and deterministic tests.
///
/// Whitespace tokens are looked up case-insensitively with leading and
/// trailing punctuation preserved; unknown words pass through unchanged.
#[derive(Debug, Clone)]
pub struct GlossaryTranslator {
    source: String,
    target: String,
    entries: HashMap<String, String>,
}

impl GlossaryTranslator {
    /// Build a glossary for a single language pair.
    pub fn new<I, S>(source: &str, target: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v.into()))
                .collect(),
        }
    }

    fn translate_word(&self, word: &str) -> String {
        let core_start = word.find(|c: char| c.is_alphanumeric()).unwrap_or(0);
        let core_end = word
            .rfind(|c: char| c.is_alphanumeric())
            .map_or(core_start, |i| i + word[i..].chars().next().map_or(1, char::len_utf8));
        let (prefix, rest) = word.split_at(core_start);
        let (core, suffix) = rest.split_at(core_end - core_start);
        match self.entries.get(&core.to_lowercase()) {
            Some(replacement) => format!("{prefix}{replacement}{suffix}"),
            None => word.to_string(),
        }
    }
}

impl Translate for GlossaryTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        if source == target {
            return Ok(text.to_string());
        }
        if source != self.source || target != self.target {
            return Err(CoreError::TranslationFailed {
                src: source.to_string(),
                target: target.to_string(),
                reason: format!(
                    "glossary only covers {} -> {}",
                    self.source, self.target
                ),
            });
        }
        Ok(text
            .split_whitespace()
            .map(|word| self.translate_word(word))
            .collect::<Vec<_>>()
            .join(" "))
    }
}
