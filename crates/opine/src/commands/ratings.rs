//! Ratings command — tally satisfaction ratings over one rating file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use opine_core::analysis::ratings::analyze_ratings;

/// Arguments for the `ratings` subcommand.
#[derive(Args, Debug)]
pub struct RatingsArgs {
    /// File to analyze (one rating per line; blank lines are skipped).
    pub file: Utf8PathBuf,
}

/// Tally satisfaction ratings over a rating file.
#[instrument(name = "cmd_ratings", skip_all, fields(file = %args.file))]
pub fn cmd_ratings(
    args: RatingsArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing ratings command");

    let content = super::read_input_file(&args.file, max_input)?;
    let report = analyze_ratings(content.lines().map(Some));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    for level in &report.levels {
        println!("  {} {}", format!("{}:", level.label).cyan(), level.count);
    }
    if report.unrecognized > 0 {
        println!("  {} {}", "Unrecognized:".yellow(), report.unrecognized);
    }
    println!("  {} responses", report.total_responses);

    Ok(())
}
