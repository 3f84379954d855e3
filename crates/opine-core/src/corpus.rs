//! Comment corpus construction.
//!
//! A corpus is the prepared view of one batch of survey responses that
//! every analysis pass reads: absent and blank responses filtered out,
//! each surviving comment lowercased exactly once, input order kept.

use crate::text::normalize_comment;

/// An ordered, immutable batch of normalized comments.
///
/// Construction is the only place normalization happens. The analysis
/// passes treat the corpus as read-only, so re-running any pass over
/// the same corpus produces the same report.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    comments: Vec<String>,
}

impl Corpus {
    /// Build a corpus from optional free-text responses.
    ///
    /// `None` and blank (empty after whitespace trim) responses are
    /// excluded and never reach any tally. Surviving comments are
    /// normalized but not trimmed.
    pub fn from_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let comments = responses
            .into_iter()
            .flatten()
            .filter(|c| !c.as_ref().trim().is_empty())
            .map(|c| normalize_comment(c.as_ref()))
            .collect();
        Self { comments }
    }

    /// Build a corpus from a text document, one response per line.
    ///
    /// Blank lines are blank responses and are excluded.
    pub fn from_lines(text: &str) -> Self {
        Self::from_responses(text.lines().map(Some))
    }

    /// Normalized comments in input order.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Number of comments that survived filtering.
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Whether no comments survived filtering.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
