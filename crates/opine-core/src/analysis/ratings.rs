//! Rating-scale tally.

use crate::lexicon::RATING_SCALE;

use super::reports::{RatingCount, RatingReport};

/// Tally one column of satisfaction ratings.
///
/// Absent and blank responses are excluded, matching the comment
/// policy. Kept responses are matched exactly, after whitespace trim,
/// against the six-level scale; anything else counts as unrecognized.
/// Levels are reported in display order with zero counts included.
#[tracing::instrument(skip_all)]
pub fn analyze_ratings<I, S>(responses: I) -> RatingReport
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut counts = vec![0usize; RATING_SCALE.len()];
    let mut unrecognized = 0;
    let mut total_responses = 0;

    for response in responses.into_iter().flatten() {
        let value = response.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        total_responses += 1;
        match RATING_SCALE.iter().position(|level| *level == value) {
            Some(i) => counts[i] += 1,
            None => unrecognized += 1,
        }
    }

    let levels = RATING_SCALE
        .iter()
        .zip(counts)
        .map(|(label, count)| RatingCount {
            label: (*label).to_string(),
            count,
        })
        .collect();

    RatingReport {
        levels,
        unrecognized,
        total_responses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_in_display_order_with_zeros() {
        let report = analyze_ratings(vec![
            Some("Satisfied"),
            Some("Very Satisfied"),
            Some("Satisfied"),
            Some("Not Applicable"),
        ]);
        let labels: Vec<&str> = report.levels.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Very Satisfied",
                "Satisfied",
                "Neutral",
                "Dissatisfied",
                "Very Dissatisfied",
                "Not Applicable"
            ]
        );
        let counts: Vec<usize> = report.levels.iter().map(|l| l.count).collect();
        assert_eq!(counts, [1, 2, 0, 0, 0, 1]);
        assert_eq!(report.total_responses, 4);
    }

    #[test]
    fn unknown_values_count_as_unrecognized() {
        let report = analyze_ratings(vec![
            Some("Satisfied"),
            Some("very satisfied"),
            Some("Meh"),
        ]);
        assert_eq!(report.unrecognized, 2);
        assert_eq!(report.total_responses, 3);
        let recognized: usize = report.levels.iter().map(|l| l.count).sum();
        assert_eq!(recognized + report.unrecognized, report.total_responses);
    }

    #[test]
    fn blank_and_absent_responses_are_excluded() {
        let report = analyze_ratings(vec![None, Some(""), Some("  "), Some("Neutral")]);
        assert_eq!(report.total_responses, 1);
        assert_eq!(report.unrecognized, 0);
    }

    #[test]
    fn values_are_trimmed_before_matching() {
        let report = analyze_ratings(vec![Some("  Dissatisfied  ")]);
        assert_eq!(report.levels[3].count, 1);
        assert_eq!(report.unrecognized, 0);
    }
}
