//! Analyze command — all comment passes in one report.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use opine_core::analysis;
use opine_core::config::Config;
use opine_core::rules::MatchMode;
use opine_core::Corpus;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (one comment per line; blank lines are skipped).
    pub file: Utf8PathBuf,

    /// Checks to run (comma-separated). Omit for all checks.
    #[arg(long, value_delimiter = ',')]
    pub checks: Option<Vec<String>>,

    /// How keywords are located inside comments.
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchMode>,
}

/// Run every comment analysis pass on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, checks = ?args.checks, "executing analyze command");

    let content = super::read_input_file(&args.file, max_input)?;
    let corpus = Corpus::from_lines(&content);
    let mode = args.match_mode.unwrap_or(config.match_mode);

    let report = analysis::run_comment_analysis(
        &corpus,
        &super::sentiment_rules(config),
        &super::category_rules(config),
        mode,
        &super::ranker_options(config, None),
        args.checks.as_deref(),
    )
    .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output — section by section
    println!("{}", args.file.bold());

    if let Some(ref s) = report.sentiment {
        println!(
            "\n  {} Positive {} / Negative {} / Neutral {} / Uncategorized {} ({} comments)",
            "Sentiment:".cyan(),
            s.positive.green(),
            s.negative.red(),
            s.neutral,
            s.uncategorized,
            s.total_comments,
        );
    }

    if let Some(ref c) = report.categories {
        let counts: Vec<String> = c
            .categories
            .iter()
            .map(|cat| format!("{} {}", cat.label, cat.count))
            .collect();
        println!(
            "\n  {} {} ({} uncategorized)",
            "Categories:".cyan(),
            counts.join(", "),
            c.uncategorized,
        );
    }

    if let Some(ref t) = report.terms {
        if t.terms.is_empty() {
            println!(
                "\n  {} {}",
                "Terms:".cyan(),
                "no terms met the document-frequency thresholds".dimmed(),
            );
        } else {
            let ranked: Vec<String> = t
                .terms
                .iter()
                .map(|term| format!("{} ({})", term.term, term.count))
                .collect();
            println!("\n  {} {}", "Terms:".cyan(), ranked.join(", "));
        }
    }

    Ok(())
}
