//! Watch command implementation
//!
//! The original shape of this tool was a loop over a remote cell with a
//! hidden "last seen" global. Here the comparison is an explicit
//! previous/current pair threaded through the loop, and the watched source
//! is a local file.

use super::{build_analyzer, init_logging, load_config, open_writer};
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{create_formatter, FormatOptions};
use crate::CliResult;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

use super::analyze::OutputFormat;

/// Arguments for the watch command
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// File to watch for changes
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Polling interval in seconds (default from config, 10)
    #[arg(short, long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Output file; reports are appended (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip language detection and force this code (e.g. "es")
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Check once and exit instead of polling forever
    #[arg(long)]
    pub once: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl WatchArgs {
    /// Execute the watch command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.verbose, self.quiet);

        let cli_config = load_config(self.config.as_deref())?;
        let interval =
            Duration::from_secs(self.interval.unwrap_or(cli_config.watch.interval_secs));
        let format = self
            .format
            .unwrap_or_else(|| OutputFormat::from_name(&cli_config.output.default_format));
        let options = FormatOptions {
            with_headers: false,
            include_metadata: cli_config.output.include_metadata,
            pretty_json: cli_config.output.pretty_json,
        };
        let analyzer = build_analyzer(cli_config.analysis.clone(), self.language.as_deref())?;

        log::info!(
            "Watching {} (interval: {}s)",
            self.file.display(),
            interval.as_secs()
        );

        let mut previous: Option<String> = None;
        loop {
            match FileReader::read_text(&self.file) {
                Ok(current) => {
                    if has_changed(previous.as_deref(), &current) {
                        log::info!("Change detected in {}", self.file.display());
                        self.report(&analyzer, &current, format, options)?;
                        previous = Some(current);
                    }
                }
                Err(err) if self.once => return Err(err),
                Err(err) => log::warn!("{err:#}"),
            }

            if self.once {
                return Ok(());
            }
            std::thread::sleep(interval);
        }
    }

    fn report(
        &self,
        analyzer: &animo_core::EmotionAnalyzer,
        text: &str,
        format: OutputFormat,
        options: FormatOptions,
    ) -> CliResult<()> {
        let report = analyzer
            .analyze_text(text)
            .map_err(|e| CliError::AnalysisError(e.to_string()))?;
        let writer = open_writer(self.output.as_deref(), true)?;
        let mut formatter = create_formatter(format, writer, options);
        formatter.format_report(&self.file.display().to_string(), &report)?;
        formatter.finish()?;
        Ok(())
    }
}

/// Pure change check over an explicit previous/current pair.
///
/// Empty or whitespace-only content never counts as a change, mirroring the
/// original "non-empty and different from last seen" rule.
pub fn has_changed(previous: Option<&str>, current: &str) -> bool {
    !current.trim().is_empty() && previous != Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_empty_observation_is_a_change() {
        assert!(has_changed(None, "new text"));
    }

    #[test]
    fn identical_content_is_not_a_change() {
        assert!(!has_changed(Some("same"), "same"));
    }

    #[test]
    fn different_content_is_a_change() {
        assert!(has_changed(Some("old"), "new"));
    }

    #[test]
    fn empty_content_is_never_a_change() {
        assert!(!has_changed(None, ""));
        assert!(!has_changed(Some("old"), "   \n"));
    }
}
