//! Agglomerative (bottom-up) hierarchical clustering.
//!
//! Starts from one singleton cluster per item and repeatedly merges the two
//! closest clusters, where "closest" is the configured [`Linkage`] reduction
//! over all pairwise member distances. Every merge emits a full [`Level`]
//! snapshot, so the whole cut history stays inspectable after the run.
//!
//! Cost is quadratic in the current cluster count per level and
//! `O(|A| * |B|)` per uncached cluster pair, `O(N^3)` worst case overall for
//! dense merge schedules. The per-run linkage cache keeps re-evaluating an
//! untouched pair across levels at O(1).

use std::collections::HashMap;

use tracing::debug;

use crate::cluster::distance::{Distance, DistanceMatrix};
use crate::cluster::level::{Dendrogram, Level, Merge};
use crate::cluster::linkage::Linkage;
use crate::error::{Error, Result};

/// Memoized cluster-pair linkage values, keyed by the two sorted member
/// lists in lexicographic order (order-independent). Scoped to one run.
type LinkageCache = HashMap<(Vec<usize>, Vec<usize>), f64>;

/// Agglomerative clustering over a set of vectors or a prebuilt distance
/// matrix.
///
/// The run is a synchronous, single-threaded batch computation owning all of
/// its intermediate state; to cancel an in-flight run, drop the task driving
/// it. Identical input and configuration always reproduce the identical
/// level sequence, including tie-breaks.
#[derive(Debug, Clone, Copy)]
pub struct Agglomerative {
    min_clusters: usize,
    max_linkage: Option<f64>,
    linkage: Linkage,
    distance: Distance,
}

impl Default for Agglomerative {
    fn default() -> Self {
        Self::new()
    }
}

impl Agglomerative {
    /// Default configuration: merge down to one cluster, complete linkage,
    /// normalized Manhattan distance, no linkage bound.
    pub fn new() -> Self {
        Self {
            min_clusters: 1,
            max_linkage: None,
            linkage: Linkage::default(),
            distance: Distance::default(),
        }
    }

    /// Stop merging once this many clusters remain (must be >= 1).
    pub fn with_min_clusters(mut self, min_clusters: usize) -> Self {
        self.min_clusters = min_clusters;
        self
    }

    /// Skip any merge whose linkage would exceed this bound.
    pub fn with_max_linkage(mut self, max_linkage: f64) -> Self {
        self.max_linkage = Some(max_linkage);
        self
    }

    /// Set the linkage strategy.
    pub fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = linkage;
        self
    }

    /// Set the pairwise distance strategy.
    pub fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }

    /// Cluster `vectors`, building the distance matrix internally.
    pub fn fit(&self, vectors: &[Vec<f64>]) -> Result<Dendrogram> {
        self.validate()?;
        let matrix = DistanceMatrix::build(vectors, self.distance)?;
        self.fit_matrix(&matrix)
    }

    /// Cluster over an existing distance matrix.
    pub fn fit_matrix(&self, matrix: &DistanceMatrix) -> Result<Dendrogram> {
        self.validate()?;
        if matrix.is_empty() {
            return Err(Error::EmptyInput);
        }

        let n = matrix.len();
        let mut clusters: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        let mut levels = vec![Level {
            merge: None,
            clusters: clusters.clone(),
        }];
        let mut cache = LinkageCache::new();

        while clusters.len() > self.min_clusters {
            let Some((distance, into, from)) = self.closest_pair(&clusters, matrix, &mut cache)
            else {
                break;
            };
            if self.max_linkage.is_some_and(|max| distance > max) {
                debug!(distance, "next merge exceeds max linkage, stopping");
                break;
            }

            // Rebuild the cluster list wholesale so the prior level's
            // snapshot stays untouched. `from < into` always, so extend
            // first, then remove.
            let mut next = clusters.clone();
            let absorbed = next[from].clone();
            next[into].extend(absorbed);
            next[into].sort_unstable();
            next.remove(from);
            clusters = next;

            levels.push(Level {
                merge: Some(Merge {
                    distance,
                    from,
                    into,
                }),
                clusters: clusters.clone(),
            });
        }

        debug!(
            n_items = n,
            n_levels = levels.len(),
            final_clusters = clusters.len(),
            "agglomerative run complete"
        );
        Ok(Dendrogram::new(n, levels))
    }

    /// Scan every unordered cluster pair and return `(linkage, into, from)`
    /// for the globally closest one. Scan order is outer slot ascending,
    /// inner slot ascending, with strict comparison, so the first minimum
    /// encountered wins ties deterministically.
    fn closest_pair(
        &self,
        clusters: &[Vec<usize>],
        matrix: &DistanceMatrix,
        cache: &mut LinkageCache,
    ) -> Option<(f64, usize, usize)> {
        let mut best: Option<(f64, usize, usize)> = None;
        for i in 0..clusters.len() {
            for j in 0..i {
                let link = self.linkage_of(&clusters[i], &clusters[j], matrix, cache);
                if best.map_or(true, |(b, _, _)| link < b) {
                    best = Some((link, i, j));
                }
            }
        }
        best
    }

    /// Linkage between two clusters: the configured reduction over every
    /// member-pair distance, memoized per run.
    fn linkage_of(
        &self,
        a: &[usize],
        b: &[usize],
        matrix: &DistanceMatrix,
        cache: &mut LinkageCache,
    ) -> f64 {
        let key = if a <= b {
            (a.to_vec(), b.to_vec())
        } else {
            (b.to_vec(), a.to_vec())
        };
        if let Some(&cached) = cache.get(&key) {
            return cached;
        }

        let mut distances = Vec::with_capacity(a.len() * b.len());
        for &x in a {
            for &y in b {
                distances.push(matrix.get(x, y));
            }
        }
        let link = self.linkage.reduce(&distances);
        cache.insert(key, link);
        link
    }

    fn validate(&self) -> Result<()> {
        if self.min_clusters == 0 {
            return Err(Error::InvalidClusterCount { requested: 0 });
        }
        Ok(())
    }
}
