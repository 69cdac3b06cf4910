//! Configuration module
//!
//! The CLI layers its own output and watch settings on top of the core
//! [`AnalyzerConfig`]; one TOML file configures all three sections.

use crate::error::CliError;
use crate::CliResult;
use animo_core::AnalyzerConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Pipeline configuration forwarded to the analyzer
    pub analysis: AnalyzerConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Watch-mode configuration
    pub watch: WatchConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include run metadata in output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}

/// Watch-mode configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Polling interval in seconds
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_secs: 10 }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file and validate the analysis
    /// section.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config
            .analysis
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = CliConfig::default();
        assert_eq!(config.output.default_format, "text");
        assert_eq!(config.watch.interval_secs, 10);
        assert_eq!(config.analysis.pivot_language, "en");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [analysis]
            pivot_language = "es"

            [watch]
            interval_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.pivot_language, "es");
        assert_eq!(config.watch.interval_secs, 3);
        assert_eq!(config.output.default_format, "text");
        assert_eq!(config.analysis.max_sentence_words, 15);
    }

    #[test]
    fn load_rejects_invalid_analysis_section() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(
            &path,
            r#"
            [analysis]
            pivot_language = ""
            "#,
        )
        .unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("pivot_language"));
    }
}
