//! Text processing utilities.
//!
//! Provides comment normalization and word tokenization for use by the
//! analysis modules.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for word tokens: two or more word characters.
///
/// Single-character tokens ("a", "I") carry no signal for frequency
/// ranking and are dropped at the tokenizer level.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// Normalize a raw comment for matching and tokenization.
///
/// The only transformation is a single Unicode lowercase pass.
/// Punctuation, digits, and internal whitespace are preserved so that
/// substring keyword matching sees the comment as written.
pub fn normalize_comment(text: &str) -> String {
    text.to_lowercase()
}

/// Extract word tokens from normalized text.
///
/// Returns the tokens in document order as slices into `text`.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Whether a character counts as part of a word for boundary checks.
///
/// Matches the `\w` class used by [`tokenize`], so whole-word keyword
/// matching and tokenization agree on where words start and end.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_only() {
        assert_eq!(
            normalize_comment("  The Support TEAM was Great!  "),
            "  the support team was great!  "
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_comment("Very Helpful, thanks!");
        assert_eq!(normalize_comment(&once), once);
    }

    #[test]
    fn tokenize_basic() {
        let tokens = tokenize("the team was helpful, thanks!");
        assert_eq!(tokens, vec!["the", "team", "was", "helpful", "thanks"]);
    }

    #[test]
    fn tokenize_drops_single_char_tokens() {
        let tokens = tokenize("a response in 2 days is ok");
        assert_eq!(tokens, vec!["response", "in", "days", "is", "ok"]);
    }

    #[test]
    fn tokenize_keeps_digits_and_underscores() {
        let tokens = tokenize("ticket_42 closed after 10 days");
        assert_eq!(tokens, vec!["ticket_42", "closed", "after", "10", "days"]);
    }

    #[test]
    fn tokenize_splits_on_apostrophes() {
        let tokens = tokenize("it's fine");
        assert_eq!(tokens, vec!["it", "fine"]);
    }

    #[test]
    fn tokenize_handles_unicode_words() {
        let tokens = tokenize("service très rapide");
        assert_eq!(tokens, vec!["service", "très", "rapide"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("! ? .").is_empty());
    }
}
