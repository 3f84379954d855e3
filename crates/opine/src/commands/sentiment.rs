//! Sentiment command — tally sentiment over one comment file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use opine_core::analysis::sentiment::analyze_sentiment;
use opine_core::config::Config;
use opine_core::rules::{MatchMode, SentimentMatcher};
use opine_core::Corpus;

/// Arguments for the `sentiment` subcommand.
#[derive(Args, Debug)]
pub struct SentimentArgs {
    /// File to analyze (one comment per line; blank lines are skipped).
    pub file: Utf8PathBuf,

    /// How keywords are located inside comments.
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchMode>,
}

/// Tally sentiment over a comment file.
#[instrument(name = "cmd_sentiment", skip_all, fields(file = %args.file))]
pub fn cmd_sentiment(
    args: SentimentArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing sentiment command");

    let content = super::read_input_file(&args.file, max_input)?;
    let corpus = Corpus::from_lines(&content);
    let mode = args.match_mode.unwrap_or(config.match_mode);

    let rules = super::sentiment_rules(config);
    let matcher = SentimentMatcher::compile(&rules, mode)
        .context("failed to compile sentiment keyword lists")?;
    let report = analyze_sentiment(&corpus, &matcher);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!("  {} {}", "Positive:".green(), report.positive);
    println!("  {} {}", "Negative:".red(), report.negative);
    println!("  {} {}", "Neutral:".cyan(), report.neutral);
    println!("  {} {}", "Uncategorized:".dimmed(), report.uncategorized);
    println!("  {} comments", report.total_comments);

    Ok(())
}
