//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::CliResult;
use animo_core::{AnalyzerConfig, EmotionAnalyzer, FixedLanguage};
use anyhow::Context;
use clap::Subcommand;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

pub mod analyze;
pub mod generate_config;
pub mod watch;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text files, stdin, or a literal string
    Analyze(analyze::AnalyzeArgs),

    /// Watch a file and re-analyze it whenever its contents change
    Watch(watch::WatchArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List languages with their connector sets
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Watch(args) => args.execute(),
            Commands::List { subcommand } => {
                match subcommand {
                    ListCommands::Languages => list_languages(),
                    ListCommands::Formats => list_formats(),
                }
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

fn list_languages() {
    println!("Connector-aware languages:");
    println!("  es - Spanish (pero, aunque, sin embargo, además, mientras, cuando, porque)");
    println!("  en - English (but, although, however, besides, while, when, because)");
    println!();
    println!("Detection covers every language whatlang recognizes; languages without");
    println!("their own connector set fall back to the English connectors.");
}

fn list_formats() {
    println!("Available output formats:");
    println!("  text     - canonical '<sentence>' → <label> (pol, subj) lines");
    println!("  json     - array of analyzed documents with entries");
    println!("  markdown - one table of fragments per document");
}

/// Load the CLI configuration, or defaults when no file is given.
pub(crate) fn load_config(path: Option<&Path>) -> CliResult<CliConfig> {
    match path {
        Some(path) => CliConfig::load(path),
        None => Ok(CliConfig::default()),
    }
}

/// Wire an analyzer from the analysis config, pinning the language when the
/// user passed one.
pub(crate) fn build_analyzer(
    analysis: AnalyzerConfig,
    language: Option<&str>,
) -> CliResult<EmotionAnalyzer> {
    let mut builder = EmotionAnalyzer::builder().config(analysis);
    if let Some(code) = language {
        builder = builder.detector(Box::new(FixedLanguage(code.to_string())));
    }
    builder
        .build()
        .map_err(|e| CliError::ConfigError(e.to_string()).into())
}

/// Open the output destination: a file, or stdout when none is given.
pub(crate) fn open_writer(path: Option<&Path>, append: bool) -> CliResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = if append {
                OpenOptions::new().create(true).append(true).open(path)
            } else {
                File::create(path)
            }
            .with_context(|| format!("Failed to open output file: {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
            .ok();
    }
}
