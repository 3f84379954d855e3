//! Feedback category tally.

use crate::corpus::Corpus;
use crate::rules::CategoryMatcher;

use super::reports::{CategoryCount, CategoryReport};

/// Tally category membership over a corpus.
///
/// Every category is tested for every comment, so one comment can land
/// in several and the per-category counts may sum to more than the
/// corpus size. A comment matching none counts as uncategorized
/// instead, never in addition.
#[tracing::instrument(skip_all, fields(comments = corpus.len()))]
pub fn analyze_categories(corpus: &Corpus, matcher: &CategoryMatcher) -> CategoryReport {
    let mut counts = vec![0usize; matcher.len()];
    let mut uncategorized = 0;
    let mut categorized_comments = 0;

    for comment in corpus.comments() {
        let hits = matcher.matching(comment);
        if hits.is_empty() {
            uncategorized += 1;
        } else {
            categorized_comments += 1;
            for i in hits {
                counts[i] += 1;
            }
        }
    }

    let categories = matcher
        .labels()
        .zip(counts)
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();

    CategoryReport {
        categories,
        uncategorized,
        categorized_comments,
        total_comments: corpus.len(),
    }
}
