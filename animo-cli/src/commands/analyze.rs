//! Analyze command implementation

use super::{build_analyzer, init_logging, load_config, open_writer};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, FormatOptions};
use crate::progress::ProgressReporter;
use crate::CliResult;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob); use "-" for stdin
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Analyze this text directly instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
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

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Canonical report lines, one fragment per line
    Text,
    /// JSON array of analyzed documents
    Json,
    /// Markdown table per document
    Markdown,
}

impl OutputFormat {
    /// Resolve a configuration-file format name; unknown names mean text.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Text,
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting emotion analysis");
        log::debug!("Arguments: {:?}", self);

        let cli_config = load_config(self.config.as_deref())?;
        let format = self
            .format
            .unwrap_or_else(|| OutputFormat::from_name(&cli_config.output.default_format));
        let analyzer = build_analyzer(cli_config.analysis.clone(), self.language.as_deref())?;

        let documents = self.collect_documents()?;
        let writer = open_writer(self.output.as_deref(), false)?;
        let options = FormatOptions {
            with_headers: documents.len() > 1,
            include_metadata: cli_config.output.include_metadata,
            pretty_json: cli_config.output.pretty_json,
        };
        let mut formatter = create_formatter(format, writer, options);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(documents.len() as u64);

        for (name, text) in &documents {
            let report = analyzer
                .analyze_text(text)
                .map_err(|e| CliError::AnalysisError(e.to_string()))?;
            log::debug!(
                "{name}: {} fragments, detected {}",
                report.metadata.fragment_count,
                report.metadata.detected_language
            );
            formatter.format_report(name, &report)?;
            progress.document_completed(name);
        }

        progress.finish();
        formatter.finish()?;
        Ok(())
    }

    /// Gather (source name, text) pairs from --text, stdin, or files.
    fn collect_documents(&self) -> CliResult<Vec<(String, String)>> {
        if let Some(text) = &self.text {
            return Ok(vec![("text".to_string(), text.clone())]);
        }

        if self.input.len() == 1 && self.input[0] == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CliError::AnalysisError(format!("failed to read stdin: {e}")))?;
            return Ok(vec![("-".to_string(), buffer)]);
        }

        let files = resolve_patterns(&self.input)?;
        files
            .into_iter()
            .map(|path| {
                let text = FileReader::read_text(&path)?;
                Ok((path.display().to_string(), text))
            })
            .collect()
    }
}
