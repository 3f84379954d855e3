//! Keyword rule sets and their compiled matchers.
//!
//! Rule sets are plain data (deserializable from configuration) and are
//! compiled once into Aho-Corasick matchers before any pass runs.
//! Compilation is the only fallible step in the pipeline. The sentiment
//! rule set is ordered: positive is checked before negative, negative
//! before neutral, and the first list with a match decides the comment.
//! The category table matches every category independently but keeps
//! its configured order for reporting.

use aho_corasick::AhoCorasick;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};
use crate::lexicon::{
    DEFAULT_CATEGORIES, NEGATIVE_KEYWORDS, NEUTRAL_KEYWORDS, POSITIVE_KEYWORDS,
};
use crate::text::is_word_char;

/// How keywords are located inside a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MatchMode {
    /// A keyword matches anywhere in the comment, including inside a
    /// longer word ("help" matches "helpless").
    #[default]
    Substring,
    /// A keyword matches only when not embedded in a longer word.
    WholeWord,
}

impl MatchMode {
    /// Kebab-case name, as used in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::WholeWord => "whole-word",
        }
    }
}

/// Sentiment keyword lists, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SentimentRules {
    /// Keywords that classify a comment as positive.
    pub positive: Vec<String>,
    /// Keywords that classify a comment as negative.
    pub negative: Vec<String>,
    /// Keywords that classify a comment as neutral.
    pub neutral: Vec<String>,
}

impl Default for SentimentRules {
    fn default() -> Self {
        Self {
            positive: to_owned_list(POSITIVE_KEYWORDS),
            negative: to_owned_list(NEGATIVE_KEYWORDS),
            neutral: to_owned_list(NEUTRAL_KEYWORDS),
        }
    }
}

/// One feedback category: display label plus keyword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Category {
    /// Display label, e.g. `Response Time`.
    pub label: String,
    /// Keywords that assign a comment to this category.
    pub keywords: Vec<String>,
}

/// The category table, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CategoryRules {
    /// Categories in display order.
    pub categories: Vec<Category>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(label, keywords)| Category {
                label: (*label).to_string(),
                keywords: to_owned_list(keywords),
            })
            .collect();
        Self { categories }
    }
}

/// Options for the term frequency ranker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RankerOptions {
    /// Drop terms whose document frequency exceeds this fraction of the
    /// corpus size.
    pub max_doc_freq: f64,
    /// Drop terms that appear in fewer than this many comments.
    pub min_doc_count: usize,
    /// Maximum number of ranked terms to report.
    pub top_n: usize,
}

impl Default for RankerOptions {
    fn default() -> Self {
        Self {
            max_doc_freq: 0.95,
            min_doc_count: 2,
            top_n: 10,
        }
    }
}

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// A keyword list compiled for scanning.
///
/// Keywords are lowercased at compile time so they match normalized
/// comments; outer whitespace is trimmed, internal whitespace in
/// multi-word keywords is kept.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    matcher: AhoCorasick,
    mode: MatchMode,
}

impl KeywordSet {
    /// Compile a keyword list under the given match mode.
    ///
    /// `list` names the source list for error reporting. An empty
    /// keyword is rejected: it would match at every position of every
    /// comment.
    pub fn compile(keywords: &[String], mode: MatchMode, list: &str) -> RulesResult<Self> {
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(RulesError::EmptyKeyword {
                list: list.to_string(),
            });
        }
        let patterns: Vec<String> = keywords.iter().map(|k| k.trim().to_lowercase()).collect();
        let matcher = AhoCorasick::new(&patterns)?;
        Ok(Self { matcher, mode })
    }

    /// Whether any keyword matches `text` under the set's match mode.
    pub fn matches(&self, text: &str) -> bool {
        match self.mode {
            MatchMode::Substring => self.matcher.is_match(text),
            // Overlapping iteration so an occurrence shadowed by another
            // pattern still gets its own boundary check.
            MatchMode::WholeWord => self
                .matcher
                .find_overlapping_iter(text)
                .any(|m| is_standalone(text, m.start(), m.end())),
        }
    }
}

/// Whether the match at `start..end` is bounded by non-word characters.
fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !is_word_char(c));
    let after_ok = text[end..].chars().next().is_none_or(|c| !is_word_char(c));
    before_ok && after_ok
}

/// Sentiment of a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    /// A positive keyword matched first.
    Positive,
    /// A negative keyword matched, and no positive keyword did.
    Negative,
    /// Only a neutral keyword matched.
    Neutral,
    /// No keyword list matched.
    Uncategorized,
}

/// Sentiment rules compiled for scanning.
#[derive(Debug, Clone)]
pub struct SentimentMatcher {
    positive: KeywordSet,
    negative: KeywordSet,
    neutral: KeywordSet,
}

impl SentimentMatcher {
    /// Compile the three sentiment lists.
    pub fn compile(rules: &SentimentRules, mode: MatchMode) -> RulesResult<Self> {
        Ok(Self {
            positive: KeywordSet::compile(&rules.positive, mode, "positive")?,
            negative: KeywordSet::compile(&rules.negative, mode, "negative")?,
            neutral: KeywordSet::compile(&rules.neutral, mode, "neutral")?,
        })
    }

    /// Classify one normalized comment.
    ///
    /// Lists are checked in priority order and the first with any match
    /// wins, so a comment mixing positive and negative keywords counts
    /// once, as positive.
    pub fn classify(&self, comment: &str) -> Sentiment {
        if self.positive.matches(comment) {
            Sentiment::Positive
        } else if self.negative.matches(comment) {
            Sentiment::Negative
        } else if self.neutral.matches(comment) {
            Sentiment::Neutral
        } else {
            Sentiment::Uncategorized
        }
    }
}

/// Category table compiled for scanning.
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    categories: Vec<(String, KeywordSet)>,
}

impl CategoryMatcher {
    /// Compile the category table, rejecting duplicate labels.
    pub fn compile(rules: &CategoryRules, mode: MatchMode) -> RulesResult<Self> {
        let mut seen = std::collections::HashSet::new();
        let mut categories = Vec::with_capacity(rules.categories.len());
        for category in &rules.categories {
            if !seen.insert(category.label.as_str()) {
                return Err(RulesError::DuplicateCategory(category.label.clone()));
            }
            let set = KeywordSet::compile(&category.keywords, mode, &category.label)?;
            categories.push((category.label.clone(), set));
        }
        Ok(Self { categories })
    }

    /// Category labels in configured order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(label, _)| label.as_str())
    }

    /// Number of configured categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the table has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Indices of every category matching one normalized comment.
    ///
    /// Empty when the comment belongs to none, in which case it counts
    /// as uncategorized.
    pub fn matching(&self, comment: &str) -> Vec<usize> {
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, (_, set))| set.matches(comment))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str], mode: MatchMode) -> KeywordSet {
        let owned: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        KeywordSet::compile(&owned, mode, "test").unwrap()
    }

    #[test]
    fn substring_matches_inside_longer_words() {
        let help = set(&["help"], MatchMode::Substring);
        assert!(help.matches("very helpful agent"));
        assert!(help.matches("no help at all"));
    }

    #[test]
    fn whole_word_requires_boundaries() {
        let help = set(&["help"], MatchMode::WholeWord);
        assert!(!help.matches("very helpful agent"));
        assert!(help.matches("no help at all"));
        assert!(help.matches("help"));
        assert!(help.matches("thanks for the help!"));
    }

    #[test]
    fn whole_word_checks_every_occurrence() {
        let time = set(&["time"], MatchMode::WholeWord);
        assert!(!time.matches("sometimes slow"));
        assert!(time.matches("sometimes the time is slow"));
    }

    #[test]
    fn keywords_are_lowercased_at_compile_time() {
        let set = set(&["Good"], MatchMode::Substring);
        assert!(set.matches("good service"));
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let err = KeywordSet::compile(
            &[String::from("good"), String::from("  ")],
            MatchMode::Substring,
            "positive",
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::EmptyKeyword { .. }));
    }

    #[test]
    fn sentiment_priority_positive_first() {
        let matcher =
            SentimentMatcher::compile(&SentimentRules::default(), MatchMode::Substring).unwrap();
        assert_eq!(matcher.classify("good and bad service"), Sentiment::Positive);
        assert_eq!(matcher.classify("bad but okay"), Sentiment::Negative);
        assert_eq!(matcher.classify("an average week"), Sentiment::Neutral);
        assert_eq!(matcher.classify("no comment"), Sentiment::Uncategorized);
    }

    #[test]
    fn substring_quirk_dislike_reads_positive() {
        // "dislike" contains "like", and positive is checked first.
        // Whole-word mode is the documented way out.
        let substring =
            SentimentMatcher::compile(&SentimentRules::default(), MatchMode::Substring).unwrap();
        assert_eq!(substring.classify("i dislike this"), Sentiment::Positive);

        let whole_word =
            SentimentMatcher::compile(&SentimentRules::default(), MatchMode::WholeWord).unwrap();
        assert_eq!(whole_word.classify("i dislike this"), Sentiment::Negative);
    }

    #[test]
    fn category_matching_is_independent_per_category() {
        let matcher =
            CategoryMatcher::compile(&CategoryRules::default(), MatchMode::Substring).unwrap();
        // "support" (Support) and "wait" (Response Time)
        let hits = matcher.matching("long wait for support");
        let labels: Vec<&str> = matcher.labels().collect();
        assert_eq!(
            hits.iter().map(|&i| labels[i]).collect::<Vec<_>>(),
            ["Support", "Response Time"]
        );
    }

    #[test]
    fn category_no_match_is_empty() {
        let matcher =
            CategoryMatcher::compile(&CategoryRules::default(), MatchMode::Substring).unwrap();
        assert!(matcher.matching("everything was fine").is_empty());
    }

    #[test]
    fn duplicate_category_label_is_rejected() {
        let rules = CategoryRules {
            categories: vec![
                Category {
                    label: "Support".into(),
                    keywords: vec!["help".into()],
                },
                Category {
                    label: "Support".into(),
                    keywords: vec!["assist".into()],
                },
            ],
        };
        let err = CategoryMatcher::compile(&rules, MatchMode::Substring).unwrap_err();
        assert!(matches!(err, RulesError::DuplicateCategory(label) if label == "Support"));
    }

    #[test]
    fn ranker_defaults() {
        let options = RankerOptions::default();
        assert!((options.max_doc_freq - 0.95).abs() < f64::EPSILON);
        assert_eq!(options.min_doc_count, 2);
        assert_eq!(options.top_n, 10);
    }

    #[test]
    fn partial_rules_fill_in_defaults() {
        let rules: SentimentRules = serde_yaml::from_str("positive: [brilliant]").unwrap();
        assert_eq!(rules.positive, ["brilliant"]);
        assert_eq!(rules.negative, SentimentRules::default().negative);
    }

    #[test]
    fn category_rules_deserialize_as_a_table() {
        let rules: CategoryRules = serde_yaml::from_str(
            "- label: Billing\n  keywords: [invoice, charge]\n",
        )
        .unwrap();
        assert_eq!(rules.categories.len(), 1);
        assert_eq!(rules.categories[0].label, "Billing");
    }
}
