//! Term frequency ranking.
//!
//! Ranks the most frequent non-stop-word terms across a corpus, with
//! document-frequency thresholds on both ends: terms that appear in
//! nearly every comment carry no signal (corpus-specific stop words),
//! and terms that appear in fewer comments than the floor are noise.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::corpus::Corpus;
use crate::lexicon::ENGLISH_STOP_WORDS;
use crate::rules::RankerOptions;
use crate::text;

use super::reports::{RankedTerm, TermFrequencyReport};

/// Rank the most frequent terms in a corpus.
///
/// Tokens are two-plus-character word tokens from the normalized
/// comments, minus English stop words. A term survives when its
/// document count is at least `min_doc_count` and does not exceed
/// `max_doc_freq` of the corpus size. Survivors are ranked by total
/// occurrences, descending; ties keep first-encounter order; the list
/// is cut to `top_n`.
///
/// An empty list is a valid result, not an error. With the default
/// thresholds it is guaranteed for corpora of fewer than three
/// comments.
#[tracing::instrument(skip_all, fields(comments = corpus.len()))]
pub fn analyze_terms(corpus: &Corpus, options: &RankerOptions) -> TermFrequencyReport {
    let n_docs = corpus.len();

    // Vocabulary in first-encounter order; the stable sort below turns
    // that order into the tie-break.
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, usize> = HashMap::new();
    let mut doc_counts: HashMap<&str, usize> = HashMap::new();

    for comment in corpus.comments() {
        let mut seen = HashSet::new();
        for token in text::tokenize(comment) {
            if ENGLISH_STOP_WORDS.contains(token) {
                continue;
            }
            match totals.entry(token) {
                Entry::Occupied(mut e) => *e.get_mut() += 1,
                Entry::Vacant(e) => {
                    order.push(token);
                    e.insert(1);
                }
            }
            if seen.insert(token) {
                *doc_counts.entry(token).or_insert(0) += 1;
            }
        }
    }

    let max_doc_count = options.max_doc_freq * n_docs as f64;

    let mut terms: Vec<RankedTerm> = order
        .into_iter()
        .filter_map(|term| {
            let doc_count = doc_counts[term];
            if (doc_count as f64) > max_doc_count || doc_count < options.min_doc_count {
                return None;
            }
            Some(RankedTerm {
                term: term.to_string(),
                count: totals[term],
                doc_count,
            })
        })
        .collect();

    let vocabulary_size = terms.len();
    terms.sort_by(|a, b| b.count.cmp(&a.count));
    terms.truncate(options.top_n);

    TermFrequencyReport {
        terms,
        total_comments: n_docs,
        vocabulary_size,
    }
}
