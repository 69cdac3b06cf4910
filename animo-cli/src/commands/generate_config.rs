//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust lexicons, thresholds, and connectors");
        println!("2. Use it for analysis:");
        println!("   animo analyze -i diary.txt -c {}", self.output.display());
        println!("3. Or for watch mode:");
        println!("   animo watch diary.txt -c {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        r#"# animo configuration
# Every field is optional; omitted fields keep their defaults.

[analysis]
# Language text is normalized into before scoring
pivot_language = "en"
# Code used when language detection cannot decide
fallback_language = "en"
# Translate non-pivot text before scoring
normalize = true
# Sentences above this word count are re-split at connector words
max_sentence_words = 15
# Minimum accumulated words before a sub-fragment is flushed
min_fragment_words = 5
# Polarity adjustment applied once per matched lexicon word
negative_penalty = 0.15
positive_bonus = 0.10
# What to do when the sentiment model fails: "abort" or "substitute"
on_score_failure = "abort"
# Affect lexicons, matched as substrings of the lowercased fragment
negative_words = ["sad", "angry", "terrible", "awful", "horrible", "bad", "hate", "worried", "cry", "lonely", "tired", "triste", "enojado", "mal", "odio"]
positive_words = ["happy", "great", "good", "love", "wonderful", "excellent", "hope", "joy", "calm", "feliz", "bien", "amor", "esperanza", "tranquilo"]

# Connector words used to re-split long sentences, per language code.
# Languages without an entry use the "en" set.
[analysis.connector_sets]
es = ["pero", "aunque", "sin embargo", "además", "mientras", "cuando", "porque"]
en = ["but", "although", "however", "besides", "while", "when", "because"]

# Contextual lexicon: each match subtracts the penalty and appends the
# label to the fragment's auxiliary labels. Remove this table to disable.
[analysis.contextual]
words = ["frustrating", "frustrated", "waiting", "delay", "stuck", "slow", "again and again"]
penalty = 0.20
label = "Frustración 😠"

# Polarity bands for the primary label, applied to the unrounded adjusted
# polarity: >= joy is Joy, >= calm is Calm, > neutral_floor is Neutral,
# >= sadness_floor is Sadness, lower is Anger.
[analysis.thresholds]
joy = 0.3
calm = 0.05
neutral_floor = -0.05
sadness_floor = -0.3

[output]
# Default output format: "text", "json", or "markdown"
default_format = "text"
# Append run metadata (detected language, fragment count) to each document
include_metadata = false
# Pretty print JSON output
pretty_json = true

[watch]
# Polling interval in seconds
interval_secs = 10
"#
        .to_string()
    }
}
