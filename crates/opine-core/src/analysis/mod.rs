//! Survey comment analysis.
//!
//! Decomposes feedback analysis into independent passes, orchestrated
//! by [`run_comment_analysis`].
//!
//! Each pass is a pure function in its own module. Callers can also
//! invoke passes individually.

pub mod categories;
pub mod ratings;
pub mod reports;
pub mod sentiment;
pub mod terms;

use std::collections::HashSet;

pub use reports::CommentAnalysisReport;

use crate::corpus::Corpus;
use crate::error::RulesResult;
use crate::rules::{
    CategoryMatcher, CategoryRules, MatchMode, RankerOptions, SentimentMatcher, SentimentRules,
};

/// All available check names.
pub const ALL_CHECKS: &[&str] = &["sentiment", "categories", "terms"];

/// Run the comment passes over one corpus.
///
/// # Arguments
///
/// * `corpus` — The prepared comment corpus.
/// * `sentiment_rules` — Sentiment keyword lists, in priority order.
/// * `category_rules` — The category table.
/// * `mode` — How keywords are located inside comments.
/// * `ranker` — Term frequency thresholds.
/// * `checks` — Optional list of check names to run. If `None`, runs all.
///
/// Unknown check names are ignored and the matching report field stays
/// `None`. An empty corpus is valid input and produces zero tallies.
/// The only error source is rule compilation.
#[tracing::instrument(skip_all, fields(comments = corpus.len()))]
pub fn run_comment_analysis(
    corpus: &Corpus,
    sentiment_rules: &SentimentRules,
    category_rules: &CategoryRules,
    mode: MatchMode,
    ranker: &RankerOptions,
    checks: Option<&[String]>,
) -> RulesResult<CommentAnalysisReport> {
    let enabled: HashSet<&str> = checks.map_or_else(
        || ALL_CHECKS.iter().copied().collect(),
        |list| list.iter().map(String::as_str).collect(),
    );

    // Sentiment
    let sentiment_report = if enabled.contains("sentiment") {
        let matcher = SentimentMatcher::compile(sentiment_rules, mode)?;
        Some(sentiment::analyze_sentiment(corpus, &matcher))
    } else {
        None
    };

    // Categories
    let category_report = if enabled.contains("categories") {
        let matcher = CategoryMatcher::compile(category_rules, mode)?;
        Some(categories::analyze_categories(corpus, &matcher))
    } else {
        None
    };

    // Terms
    let terms_report = if enabled.contains("terms") {
        Some(terms::analyze_terms(corpus, ranker))
    } else {
        None
    };

    Ok(CommentAnalysisReport {
        sentiment: sentiment_report,
        categories: category_report,
        terms: terms_report,
    })
}
