//! The shared term vocabulary for one clustering run.

use std::collections::HashMap;

use super::tokenizer::TermVector;

/// Ordered set of all distinct terms across a corpus.
///
/// Built once per run and never mutated afterward; it fixes the
/// dimensionality shared by every weighted vector in that run. Terms are
/// stored sorted, so two runs over the same corpus produce the same order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Union the terms of every document in the corpus.
    pub fn build(corpus: &[TermVector]) -> Self {
        let mut terms: Vec<String> = corpus
            .iter()
            .flat_map(|doc| doc.keys().cloned())
            .collect();
        terms.sort_unstable();
        terms.dedup();

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        Self { terms, index }
    }

    /// Number of distinct terms (the vector dimensionality).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the corpus had no extractable terms at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Position of a term, if present.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Terms in vector order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
