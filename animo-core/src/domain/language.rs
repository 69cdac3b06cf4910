//! Per-language connector words for sub-sentence segmentation
//!
//! Connector sets are keyed by ISO 639-1 code. The segmenter looks a
//! language up in the configured sets and falls back to the English set for
//! any language without its own entry, matching the two-family behavior of
//! the scoring pipeline's origins.

use std::collections::BTreeMap;

/// Spanish coordinating/subordinating connectors used to re-split long sentences.
pub const SPANISH_CONNECTORS: &[&str] = &[
    "pero",
    "aunque",
    "sin embargo",
    "además",
    "mientras",
    "cuando",
    "porque",
];

/// English connectors used for every non-Spanish language.
pub const ENGLISH_CONNECTORS: &[&str] = &[
    "but",
    "although",
    "however",
    "besides",
    "while",
    "when",
    "because",
];

/// Built-in connector sets, keyed by language code.
pub fn default_connector_sets() -> BTreeMap<String, Vec<String>> {
    let mut sets = BTreeMap::new();
    sets.insert(
        "es".to_string(),
        SPANISH_CONNECTORS.iter().map(|s| s.to_string()).collect(),
    );
    sets.insert(
        "en".to_string(),
        ENGLISH_CONNECTORS.iter().map(|s| s.to_string()).collect(),
    );
    sets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sets_cover_both_families() {
        let sets = default_connector_sets();
        assert!(sets["es"].contains(&"sin embargo".to_string()));
        assert!(sets["en"].contains(&"because".to_string()));
        assert_eq!(sets.len(), 2);
    }
}
