//! Categories command — tally feedback categories over one comment file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use opine_core::analysis::categories::analyze_categories;
use opine_core::config::Config;
use opine_core::rules::{CategoryMatcher, MatchMode};
use opine_core::Corpus;

/// Arguments for the `categories` subcommand.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// File to analyze (one comment per line; blank lines are skipped).
    pub file: Utf8PathBuf,

    /// How keywords are located inside comments.
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchMode>,
}

/// Tally feedback categories over a comment file.
#[instrument(name = "cmd_categories", skip_all, fields(file = %args.file))]
pub fn cmd_categories(
    args: CategoriesArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing categories command");

    let content = super::read_input_file(&args.file, max_input)?;
    let corpus = Corpus::from_lines(&content);
    let mode = args.match_mode.unwrap_or(config.match_mode);

    let rules = super::category_rules(config);
    let matcher =
        CategoryMatcher::compile(&rules, mode).context("failed to compile category table")?;
    let report = analyze_categories(&corpus, &matcher);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    for category in &report.categories {
        println!("  {} {}", format!("{}:", category.label).cyan(), category.count);
    }
    println!("  {} {}", "Uncategorized:".dimmed(), report.uncategorized);
    println!(
        "  {} of {} comments matched at least one category",
        report.categorized_comments, report.total_comments,
    );

    Ok(())
}
