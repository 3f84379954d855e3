//! Terms command — rank the most frequent terms in one comment file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use opine_core::analysis::terms::analyze_terms;
use opine_core::config::Config;
use opine_core::Corpus;

/// Arguments for the `terms` subcommand.
#[derive(Args, Debug)]
pub struct TermsArgs {
    /// File to analyze (one comment per line; blank lines are skipped).
    pub file: Utf8PathBuf,

    /// Maximum number of ranked terms to show.
    #[arg(long)]
    pub top: Option<usize>,
}

/// Rank the most frequent terms in a comment file.
#[instrument(name = "cmd_terms", skip_all, fields(file = %args.file))]
pub fn cmd_terms(
    args: TermsArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, top = ?args.top, "executing terms command");

    let content = super::read_input_file(&args.file, max_input)?;
    let corpus = Corpus::from_lines(&content);
    let options = super::ranker_options(config, args.top);

    let report = analyze_terms(&corpus, &options);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    if report.terms.is_empty() {
        println!(
            "  {}",
            "no terms met the document-frequency thresholds".dimmed()
        );
        return Ok(());
    }

    for (rank, term) in report.terms.iter().enumerate() {
        println!(
            "  {:>2}. {} {} ({} comments)",
            rank + 1,
            term.term.cyan(),
            term.count,
            term.doc_count,
        );
    }

    Ok(())
}
