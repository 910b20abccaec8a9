//! End-to-end document clustering: text in, grouped document ids out.

use tracing::debug;

use crate::cluster::{Agglomerative, Dendrogram, Distance, Linkage};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::text::{boost_host_affinity, Tokenizer, Vocabulary, Weighter};

/// Configurable document clustering run.
///
/// Wires the text pipeline to the agglomerative engine: tokenize each
/// document, optionally inject host-affinity terms, build the shared
/// vocabulary and TF-IDF vectors, merge down to `num_clusters`, then pick
/// the most balanced level of the resulting dendrogram.
///
/// One call to [`Clusterer::cluster`] is one run: it owns its vocabulary,
/// distance matrix, and caches exclusively and discards them on return.
/// The computation is CPU-bound and quadratic-to-cubic in the document
/// count; callers in interactive settings should drive it from a background
/// task and cancel by dropping that task (no partial results exist).
#[derive(Debug, Clone, Copy)]
pub struct Clusterer {
    num_clusters: usize,
    linkage: Linkage,
    distance: Distance,
    host_boost: bool,
}

impl Default for Clusterer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Clusterer {
    /// Cluster down to `num_clusters` groups with the default strategies:
    /// complete linkage, normalized Manhattan distance, host boosting on.
    pub fn new(num_clusters: usize) -> Self {
        Self {
            num_clusters,
            linkage: Linkage::default(),
            distance: Distance::default(),
            host_boost: true,
        }
    }

    /// Set the linkage strategy.
    pub fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = linkage;
        self
    }

    /// Set the distance strategy.
    pub fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }

    /// Enable or disable link/host affinity boosting. A no-op for corpora
    /// without any URL or link data either way.
    pub fn with_host_boost(mut self, host_boost: bool) -> Self {
        self.host_boost = host_boost;
        self
    }

    /// Run the full pipeline over one corpus snapshot.
    pub fn cluster(&self, docs: &[Document]) -> Result<Grouping> {
        if docs.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.num_clusters == 0 {
            return Err(Error::InvalidClusterCount { requested: 0 });
        }

        let tokenizer = Tokenizer::new();
        let mut corpus: Vec<_> = docs.iter().map(|d| tokenizer.term_counts(&d.text)).collect();
        if self.host_boost {
            boost_host_affinity(&mut corpus, docs);
        }

        let vocab = Vocabulary::build(&corpus);
        let mut weighter = Weighter::fit(&corpus);
        let vectors = weighter.weigh_corpus(&corpus, &vocab);
        debug!(
            n_docs = docs.len(),
            n_terms = vocab.len(),
            "corpus vectorized"
        );

        let dendrogram = Agglomerative::new()
            .with_min_clusters(self.num_clusters)
            .with_linkage(self.linkage)
            .with_distance(self.distance)
            .fit(&vectors)?;

        let chosen_level = dendrogram.balanced_level();
        debug!(
            chosen_level,
            n_levels = dendrogram.levels().len(),
            "balanced level selected"
        );

        Ok(Grouping {
            doc_ids: docs.iter().map(|d| d.id.clone()).collect(),
            chosen_level,
            dendrogram,
        })
    }
}

/// The result of one clustering run: the chosen partition plus the full
/// dendrogram for diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grouping {
    doc_ids: Vec<String>,
    /// Index of the balanced level within the dendrogram.
    pub chosen_level: usize,
    /// The complete merge history.
    pub dendrogram: Dendrogram,
}

impl Grouping {
    /// The chosen partition as ordered groups of document ids.
    pub fn partition(&self) -> Vec<Vec<String>> {
        self.partition_at(self.chosen_level)
    }

    /// The partition at an arbitrary level, mapped back to document ids.
    ///
    /// Out-of-range levels clamp to the final one.
    pub fn partition_at(&self, level: usize) -> Vec<Vec<String>> {
        let levels = self.dendrogram.levels();
        let level = &levels[level.min(levels.len() - 1)];
        level
            .clusters
            .iter()
            .map(|c| c.iter().map(|&i| self.doc_ids[i].clone()).collect())
            .collect()
    }

    /// Document ids in input order.
    pub fn doc_ids(&self) -> &[String] {
        &self.doc_ids
    }
}
