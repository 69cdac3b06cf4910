//! Command-line entry point for animo

use animo_cli::commands::Commands;
use clap::Parser;

/// Emotion annotation for text: detect, normalize, segment, score
#[derive(Debug, Parser)]
#[command(name = "animo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_analyze_text() {
        let cli = Cli::parse_from(["animo", "analyze", "--text", "I am happy."]);
        match cli.command {
            Commands::Analyze(args) => assert_eq!(args.text.as_deref(), Some("I am happy.")),
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn cli_parses_watch_with_interval() {
        let cli = Cli::parse_from(["animo", "watch", "notes.txt", "--interval", "3", "--once"]);
        match cli.command {
            Commands::Watch(args) => {
                assert_eq!(args.interval, Some(3));
                assert!(args.once);
            }
            _ => panic!("expected watch command"),
        }
    }
}
