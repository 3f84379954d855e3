//! Sentiment tally.

use crate::corpus::Corpus;
use crate::rules::{Sentiment, SentimentMatcher};

use super::reports::SentimentReport;

/// Tally sentiment over a corpus.
///
/// Each comment is classified once by the first matching list in
/// priority order, so the four buckets sum to the corpus size.
#[tracing::instrument(skip_all, fields(comments = corpus.len()))]
pub fn analyze_sentiment(corpus: &Corpus, matcher: &SentimentMatcher) -> SentimentReport {
    let mut report = SentimentReport {
        positive: 0,
        negative: 0,
        neutral: 0,
        uncategorized: 0,
        total_comments: corpus.len(),
    };

    for comment in corpus.comments() {
        match matcher.classify(comment) {
            Sentiment::Positive => report.positive += 1,
            Sentiment::Negative => report.negative += 1,
            Sentiment::Neutral => report.neutral += 1,
            Sentiment::Uncategorized => report.uncategorized += 1,
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{MatchMode, SentimentRules};

    fn matcher() -> SentimentMatcher {
        SentimentMatcher::compile(&SentimentRules::default(), MatchMode::Substring).unwrap()
    }

    #[test]
    fn buckets_sum_to_corpus_size() {
        let corpus = Corpus::from_responses(vec![
            Some("The team was very helpful"),
            Some("Poor experience overall"),
            Some("It was okay I guess"),
            Some("We switched providers"),
            Some("Great support, great people"),
        ]);
        let report = analyze_sentiment(&corpus, &matcher());
        assert_eq!(report.positive, 2);
        assert_eq!(report.negative, 1);
        assert_eq!(report.neutral, 1);
        assert_eq!(report.uncategorized, 1);
        assert_eq!(
            report.positive + report.negative + report.neutral + report.uncategorized,
            report.total_comments
        );
    }

    #[test]
    fn mixed_sentiment_counts_once_as_positive() {
        let corpus = Corpus::from_responses(vec![Some("good and bad service")]);
        let report = analyze_sentiment(&corpus, &matcher());
        assert_eq!(report.positive, 1);
        assert_eq!(report.negative, 0);
        assert_eq!(report.total_comments, 1);
    }

    #[test]
    fn blank_responses_never_reach_the_tally() {
        let corpus = Corpus::from_responses(vec![
            Some("helpful"),
            None,
            Some("   "),
            Some("bad"),
        ]);
        let report = analyze_sentiment(&corpus, &matcher());
        assert_eq!(report.total_comments, 2);
        assert_eq!(report.uncategorized, 0);
    }

    #[test]
    fn empty_corpus_yields_zero_report() {
        let corpus = Corpus::from_responses(Vec::<Option<String>>::new());
        let report = analyze_sentiment(&corpus, &matcher());
        assert_eq!(report.total_comments, 0);
        assert_eq!(report.positive + report.negative + report.neutral, 0);
    }

    #[test]
    fn rerun_is_identical() {
        let corpus = Corpus::from_responses(vec![Some("great"), Some("bad"), Some("meh")]);
        let m = matcher();
        let first = analyze_sentiment(&corpus, &m);
        let second = analyze_sentiment(&corpus, &m);
        assert_eq!(first.positive, second.positive);
        assert_eq!(first.negative, second.negative);
        assert_eq!(first.neutral, second.neutral);
        assert_eq!(first.uncategorized, second.uncategorized);
    }
}
