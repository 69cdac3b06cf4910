//! Sentence segmentation with connector-aware sub-splitting
//!
//! Two phases. Phase one splits on runs of sentence-terminal punctuation.
//! Phase two re-splits long sentences at language-specific connector words:
//! the sentence is tokenized into text/connector tokens (connector text
//! preserved), then greedily accumulated into fragments of at least
//! `min_fragment_words` words. A connector is never emitted on its own; it
//! always opens the fragment that follows it.

use crate::api::error::{CoreError, Result};
use regex::Regex;
use std::collections::BTreeMap;

/// Connector-aware sentence segmenter.
#[derive(Debug)]
pub struct Segmenter {
    terminal: Regex,
    connectors: BTreeMap<String, Regex>,
    max_sentence_words: usize,
    min_fragment_words: usize,
}

/// One token of a long sentence: plain text, or a connector word that must
/// stay attached to the following fragment.
#[derive(Debug, PartialEq, Eq)]
enum Token<'t> {
    Text(&'t str),
    Connector(&'t str),
}

impl Segmenter {
    /// Build a segmenter from per-language connector sets.
    ///
    /// `connector_sets` maps language codes to connector word lists; lookup
    /// for an unknown code falls back to the `"en"` entry.
    pub fn new(
        connector_sets: &BTreeMap<String, Vec<String>>,
        max_sentence_words: usize,
        min_fragment_words: usize,
    ) -> Result<Self> {
        if max_sentence_words == 0 || min_fragment_words == 0 {
            return Err(CoreError::ConfigError(
                "segmentation word thresholds must be non-zero".to_string(),
            ));
        }
        let terminal = Regex::new(r"[.!?]+")
            .map_err(|e| CoreError::ConfigError(format!("terminal pattern: {e}")))?;

        let mut connectors = BTreeMap::new();
        for (language, words) in connector_sets {
            let alternation = words
                .iter()
                .filter(|w| !w.trim().is_empty())
                .map(|w| regex::escape(w.trim()))
                .collect::<Vec<_>>()
                .join("|");
            if alternation.is_empty() {
                continue;
            }
            let pattern = format!(r"(?i)\b({alternation})\b");
            let re = Regex::new(&pattern).map_err(|e| {
                CoreError::ConfigError(format!("connector pattern for '{language}': {e}"))
            })?;
            connectors.insert(language.clone(), re);
        }

        Ok(Self {
            terminal,
            connectors,
            max_sentence_words,
            min_fragment_words,
        })
    }

    /// Split text on runs of `.`, `!`, `?`, trimming and dropping empties.
    ///
    /// Text without terminal punctuation yields exactly one sentence equal
    /// to the trimmed input. Also used by the coordinator to derive the
    /// original-language sentences for report re-alignment.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        self.terminal
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Segment `text` into analyzable fragments using the connector set of
    /// `language`. Fragment order follows appearance order; nothing is
    /// reordered or silently dropped except empty trimmed sentences.
    pub fn segment(&self, text: &str, language: &str) -> Vec<String> {
        let connector_re = self
            .connectors
            .get(language)
            .or_else(|| self.connectors.get("en"));

        let mut fragments = Vec::new();
        for sentence in self.split_sentences(text) {
            if word_count(&sentence) <= self.max_sentence_words {
                fragments.push(sentence);
            } else if let Some(re) = connector_re {
                self.split_long(&sentence, re, &mut fragments);
            } else {
                // No connector set at all: the long sentence stays whole.
                fragments.push(sentence);
            }
        }
        fragments
    }

    /// Re-split one long sentence at connectors, accumulating pieces until
    /// the buffer holds at least `min_fragment_words` words.
    fn split_long(&self, sentence: &str, connector_re: &Regex, fragments: &mut Vec<String>) {
        let mut buffer = String::new();
        for token in tokenize(sentence, connector_re) {
            match token {
                Token::Text(text) => {
                    buffer.push_str(text);
                    if word_count(&buffer) >= self.min_fragment_words {
                        fragments.push(buffer.trim().to_string());
                        buffer.clear();
                    }
                }
                // Connectors only ever open the next fragment; the flush
                // check runs after text tokens alone.
                Token::Connector(connector) => buffer.push_str(connector),
            }
        }
        let tail = buffer.trim();
        if !tail.is_empty() {
            fragments.push(tail.to_string());
        }
    }
}

/// Tokenize a sentence into text and connector tokens, preserving the
/// connector text. A sentence without connector matches degenerates to a
/// single text token.
fn tokenize<'t>(sentence: &'t str, connector_re: &Regex) -> Vec<Token<'t>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in connector_re.find_iter(sentence) {
        if m.start() > last {
            tokens.push(Token::Text(&sentence[last..m.start()]));
        }
        tokens.push(Token::Connector(m.as_str()));
        last = m.end();
    }
    if last < sentence.len() {
        tokens.push(Token::Text(&sentence[last..]));
    }
    tokens
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
