//! Term extraction and counting.

use std::collections::BTreeMap;

use regex::Regex;

/// Sparse term -> occurrence count mapping for one document.
///
/// A `BTreeMap` keeps iteration deterministic, which makes the vocabulary
/// order (and therefore the whole run) reproducible.
pub type TermVector = BTreeMap<String, u64>;

/// Splits text into lowercased word tokens of length >= 2 and counts them.
///
/// The token pattern is `\b\w\w+\b`: alphanumeric runs, single characters
/// dropped. The regex is compiled once and reused across the corpus.
#[derive(Debug)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer.
    pub fn new() -> Self {
        // Literal pattern, no user input reaches it.
        Self {
            pattern: Regex::new(r"\b\w\w+\b").expect("token pattern compiles"),
        }
    }

    /// Count term occurrences in one document's text.
    ///
    /// Empty or unmatched text yields an empty vector, not an error.
    pub fn term_counts(&self, text: &str) -> TermVector {
        let mut counts = TermVector::new();
        for token in self.pattern.find_iter(text) {
            *counts.entry(token.as_str().to_lowercase()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_lowercases() {
        let tok = Tokenizer::new();
        let counts = tok.term_counts("The quick brown fox jumps over the lazy dog");
        assert_eq!(counts.get("the"), Some(&2));
        assert_eq!(counts.get("quick"), Some(&1));
        assert_eq!(counts.get("The"), None);
    }

    #[test]
    fn test_drops_short_tokens() {
        let tok = Tokenizer::new();
        let counts = tok.term_counts("a b c ab");
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("ab"), Some(&1));
    }

    #[test]
    fn test_empty_text() {
        let tok = Tokenizer::new();
        assert!(tok.term_counts("").is_empty());
        assert!(tok.term_counts("! @ # $").is_empty());
    }

    #[test]
    fn test_word_boundaries() {
        let tok = Tokenizer::new();
        let counts = tok.term_counts("rust-lang.org, rust? RUST!");
        assert_eq!(counts.get("rust"), Some(&3));
        assert_eq!(counts.get("lang"), Some(&1));
        assert_eq!(counts.get("org"), Some(&1));
    }
}
