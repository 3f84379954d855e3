//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use opine_core::config::Config;
use opine_core::rules::{CategoryRules, RankerOptions, SentimentRules};

pub mod analyze;
pub mod categories;
pub mod info;
pub mod ratings;
pub mod sentiment;
pub mod terms;

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps that every analysis
/// command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Sentiment keyword lists from config, or the built-in lists.
pub(crate) fn sentiment_rules(config: &Config) -> SentimentRules {
    config.sentiment.clone().unwrap_or_default()
}

/// Category table from config, or the built-in categories.
pub(crate) fn category_rules(config: &Config) -> CategoryRules {
    config.categories.clone().unwrap_or_default()
}

/// Ranker thresholds from config, with an optional top-N override from
/// the command line.
pub(crate) fn ranker_options(config: &Config, top: Option<usize>) -> RankerOptions {
    let defaults = RankerOptions::default();
    RankerOptions {
        max_doc_freq: config.max_doc_freq.unwrap_or(defaults.max_doc_freq),
        min_doc_count: config.min_doc_count.unwrap_or(defaults.min_doc_count),
        top_n: top.or(config.top_terms).unwrap_or(defaults.top_n),
    }
}
