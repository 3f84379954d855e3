//! Report structs for feedback analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Combined report over the comment passes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CommentAnalysisReport {
    /// Sentiment tally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentReport>,
    /// Category tally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryReport>,
    /// Ranked frequent terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<TermFrequencyReport>,
}

// -- Sentiment --------------------------------------------------------------

/// Sentiment tally over a comment corpus.
///
/// Each comment lands in exactly one bucket, so the four counts sum to
/// `total_comments`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SentimentReport {
    /// Comments whose first matching list was positive.
    pub positive: usize,
    /// Comments whose first matching list was negative.
    pub negative: usize,
    /// Comments whose only matching list was neutral.
    pub neutral: usize,
    /// Comments matching no sentiment list.
    pub uncategorized: usize,
    /// Number of comments in the corpus.
    pub total_comments: usize,
}

// -- Categories -------------------------------------------------------------

/// Category tally over a comment corpus.
///
/// A comment may land in several categories, so category counts can sum
/// to more than `total_comments`. A comment never counts as both
/// uncategorized and a real category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryReport {
    /// Count per configured category, zero counts included, in
    /// configured order.
    pub categories: Vec<CategoryCount>,
    /// Comments matching no category.
    pub uncategorized: usize,
    /// Comments matching at least one category.
    pub categorized_comments: usize,
    /// Number of comments in the corpus.
    pub total_comments: usize,
}

/// Tally for one configured category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCount {
    /// Display label.
    pub label: String,
    /// Comments that matched this category.
    pub count: usize,
}

// -- Term Frequency ---------------------------------------------------------

/// Ranked frequent terms over a comment corpus.
///
/// An empty `terms` list is a valid result: it means no term survived
/// the stop-word and document-frequency filters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TermFrequencyReport {
    /// Surviving terms ranked by total count, descending.
    pub terms: Vec<RankedTerm>,
    /// Number of comments the ranking was computed over.
    pub total_comments: usize,
    /// Vocabulary size after stop-word and frequency filtering.
    pub vocabulary_size: usize,
}

/// One ranked term.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RankedTerm {
    /// The term.
    pub term: String,
    /// Total occurrences across all comments.
    pub count: usize,
    /// Number of comments the term appears in.
    pub doc_count: usize,
}

// -- Ratings ----------------------------------------------------------------

/// Rating tally over one rating column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RatingReport {
    /// Count per scale level, zero counts included, in display order.
    pub levels: Vec<RatingCount>,
    /// Responses matching no scale level.
    pub unrecognized: usize,
    /// Number of non-blank responses.
    pub total_responses: usize,
}

/// Tally for one rating scale level.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RatingCount {
    /// Scale level label.
    pub label: String,
    /// Responses with this rating.
    pub count: usize,
}
