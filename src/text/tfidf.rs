//! TF-IDF weighting with optional link/host affinity boosting.
//!
//! Turns a corpus of sparse term counts into dense vectors aligned to the
//! run's [`Vocabulary`]. Per-document term frequency is normalized by each
//! term's maximum observed count across the corpus, then scaled by inverse
//! document frequency:
//!
//! ```text
//! idf(t)       = 1 + ln(D / (1 + df(t)))
//! weight(d, t) = count(d, t) / max_freq(t) * idf(t)      (0 when idf <= 0)
//! ```
//!
//! Host boosting injects hyperlink structure as synthetic vocabulary terms
//! *before* any frequency statistics are taken, so boosted counts participate
//! in `df`, `idf`, and `max_freq` like ordinary terms.

use std::collections::HashMap;

use crate::document::Document;
use crate::text::tokenizer::TermVector;
use crate::text::vocabulary::Vocabulary;

/// Synthetic count for a document's own hostname, and for the hostname of
/// any document linking back to it. Heavy: same-site documents should merge
/// almost unconditionally.
pub const OWN_HOST_BOOST: u64 = 10_000;

/// Synthetic count for each hostname a document links out to.
pub const LINKED_HOST_BOOST: u64 = 100;

/// Inject host-affinity terms into each document's term vector.
///
/// Three signals, per document `d`:
/// - `d`'s own hostname, at [`OWN_HOST_BOOST`];
/// - every hostname `d` links to, at [`LINKED_HOST_BOOST`];
/// - the own hostname of every *other* document whose outbound hosts include
///   `d`'s own hostname, at [`OWN_HOST_BOOST`] (mutual-link affinity).
///
/// `corpus` and `docs` are parallel slices; call before [`Weighter::fit`].
pub fn boost_host_affinity(corpus: &mut [TermVector], docs: &[Document]) {
    debug_assert_eq!(corpus.len(), docs.len());

    let own_hosts: Vec<Option<String>> = docs.iter().map(Document::own_host).collect();
    let linked: Vec<Vec<String>> = docs.iter().map(Document::linked_hosts).collect();

    for (i, counts) in corpus.iter_mut().enumerate() {
        if let Some(host) = &own_hosts[i] {
            *counts.entry(host.clone()).or_insert(0) += OWN_HOST_BOOST;
        }
        for host in &linked[i] {
            *counts.entry(host.clone()).or_insert(0) += LINKED_HOST_BOOST;
        }
        // Backlinks: another document pointing at this document's site pulls
        // both toward each other by sharing its hostname term.
        if let Some(host) = &own_hosts[i] {
            for (j, their_links) in linked.iter().enumerate() {
                if i == j || !their_links.contains(host) {
                    continue;
                }
                if let Some(their_host) = &own_hosts[j] {
                    *counts.entry(their_host.clone()).or_insert(0) += OWN_HOST_BOOST;
                }
            }
        }
    }
}

/// Per-run TF-IDF state: document frequencies, max frequencies, and a
/// memoized IDF table. Owned by one run, discarded with it.
#[derive(Debug)]
pub struct Weighter {
    doc_count: usize,
    doc_freq: HashMap<String, usize>,
    max_freq: HashMap<String, u64>,
    idf_cache: HashMap<String, f64>,
}

impl Weighter {
    /// Scan the (already boosted, if applicable) corpus once, collecting
    /// `df(term)` and `max_freq(term)`.
    pub fn fit(corpus: &[TermVector]) -> Self {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut max_freq: HashMap<String, u64> = HashMap::new();

        for doc in corpus {
            for (term, &count) in doc {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
                let max = max_freq.entry(term.clone()).or_insert(0);
                if count > *max {
                    *max = count;
                }
            }
        }

        Self {
            doc_count: corpus.len(),
            doc_freq,
            max_freq,
            idf_cache: HashMap::new(),
        }
    }

    /// `1 + ln(D / (1 + df(term)))`, memoized per term.
    ///
    /// The cache is purely an optimization: recomputing always yields the
    /// identical value.
    pub fn idf(&mut self, term: &str) -> f64 {
        if let Some(&cached) = self.idf_cache.get(term) {
            return cached;
        }
        let df = self.doc_freq.get(term).copied().unwrap_or(0);
        let idf = 1.0 + (self.doc_count as f64 / (1.0 + df as f64)).ln();
        self.idf_cache.insert(term.to_string(), idf);
        idf
    }

    /// Dense weighted vector for one document, aligned to `vocab`.
    ///
    /// Terms absent from the document, and terms whose IDF is non-positive,
    /// contribute `0.0`.
    pub fn weigh(&mut self, doc: &TermVector, vocab: &Vocabulary) -> Vec<f64> {
        let mut vector = vec![0.0; vocab.len()];
        for (term, &count) in doc {
            let Some(slot) = vocab.index_of(term) else {
                continue;
            };
            let idf = self.idf(term);
            if idf <= 0.0 {
                continue;
            }
            let max = self.max_freq.get(term).copied().unwrap_or(0);
            if max == 0 {
                continue;
            }
            vector[slot] = count as f64 / max as f64 * idf;
        }
        vector
    }

    /// Weigh the whole corpus, one dense vector per document.
    pub fn weigh_corpus(&mut self, corpus: &[TermVector], vocab: &Vocabulary) -> Vec<Vec<f64>> {
        corpus.iter().map(|doc| self.weigh(doc, vocab)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Tokenizer;

    fn corpus_of(texts: &[&str]) -> Vec<TermVector> {
        let tok = Tokenizer::new();
        texts.iter().map(|t| tok.term_counts(t)).collect()
    }

    #[test]
    fn test_idf_ubiquitous_term_is_low() {
        let corpus = corpus_of(&["rust code", "rust docs", "rust book"]);
        let mut weighter = Weighter::fit(&corpus);
        let expected = 1.0 + (3.0 / 4.0f64).ln();
        assert!((weighter.idf("rust") - expected).abs() < 1e-12);
    }

    #[test]
    fn test_idf_rare_term_is_corpus_max() {
        let corpus = corpus_of(&["rust code", "rust docs", "rust book"]);
        let mut weighter = Weighter::fit(&corpus);
        let rare = weighter.idf("book");
        let common = weighter.idf("rust");
        assert!(rare > common);
        let expected = 1.0 + (3.0 / 2.0f64).ln();
        assert!((rare - expected).abs() < 1e-12);
    }

    #[test]
    fn test_idf_memoization_is_consistent() {
        let corpus = corpus_of(&["alpha beta", "beta gamma"]);
        let mut weighter = Weighter::fit(&corpus);
        let first = weighter.idf("beta");
        let second = weighter.idf("beta");
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_weigh_dimensions_and_zero_slots() {
        let corpus = corpus_of(&["alpha alpha beta", "gamma"]);
        let vocab = Vocabulary::build(&corpus);
        let mut weighter = Weighter::fit(&corpus);
        let vectors = weighter.weigh_corpus(&corpus, &vocab);

        assert_eq!(vectors.len(), 2);
        for v in &vectors {
            assert_eq!(v.len(), vocab.len());
        }
        // "gamma" is absent from document 0.
        let gamma = vocab.index_of("gamma").unwrap();
        assert_eq!(vectors[0][gamma], 0.0);
        assert!(vectors[1][gamma] > 0.0);
        // "alpha" appears twice in doc 0, max_freq 2, so tf there is 1.0.
        let alpha = vocab.index_of("alpha").unwrap();
        let mut check = Weighter::fit(&corpus);
        assert!((vectors[0][alpha] - check.idf("alpha")).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_is_all_zero() {
        let corpus = corpus_of(&["alpha beta", ""]);
        let vocab = Vocabulary::build(&corpus);
        let mut weighter = Weighter::fit(&corpus);
        let vectors = weighter.weigh_corpus(&corpus, &vocab);
        assert!(vectors[1].iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_host_boost_injects_synthetic_terms() {
        let docs = vec![
            Document {
                id: "a".into(),
                url: Some("https://alpha.dev/x".into()),
                links: vec!["https://beta.dev/y".into()],
                ..Document::default()
            },
            Document {
                id: "b".into(),
                url: Some("https://beta.dev/y".into()),
                links: vec!["https://alpha.dev/x".into()],
                ..Document::default()
            },
        ];
        let mut corpus = vec![TermVector::new(), TermVector::new()];
        boost_host_affinity(&mut corpus, &docs);

        // Own host, plus the backlinking document's host, both heavy.
        assert_eq!(corpus[0].get("alpha.dev"), Some(&OWN_HOST_BOOST));
        assert_eq!(
            corpus[0].get("beta.dev"),
            Some(&(LINKED_HOST_BOOST + OWN_HOST_BOOST))
        );
        assert_eq!(corpus[1].get("beta.dev"), Some(&OWN_HOST_BOOST));
        assert_eq!(
            corpus[1].get("alpha.dev"),
            Some(&(LINKED_HOST_BOOST + OWN_HOST_BOOST))
        );
    }

    #[test]
    fn test_boost_runs_before_frequency_statistics() {
        let docs = vec![
            Document {
                id: "a".into(),
                url: Some("https://alpha.dev/".into()),
                ..Document::default()
            },
            Document::new("b", "plain text"),
        ];
        let tok = Tokenizer::new();
        let mut corpus: Vec<TermVector> = docs.iter().map(|d| tok.term_counts(&d.text)).collect();
        boost_host_affinity(&mut corpus, &docs);

        let weighter = Weighter::fit(&corpus);
        assert_eq!(weighter.max_freq.get("alpha.dev"), Some(&OWN_HOST_BOOST));
        assert_eq!(weighter.doc_freq.get("alpha.dev"), Some(&1));
    }
}
