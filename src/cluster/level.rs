//! Dendrogram levels and the balanced-partition selector.

/// One merge step: clusters `from` and `into` (slot positions in the
/// pre-merge cluster list) were combined at `distance`, with `from`'s
/// members absorbed into `into`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Merge {
    /// Linkage value at which the merge happened.
    pub distance: f64,
    /// Slot whose members were absorbed.
    pub from: usize,
    /// Surviving slot.
    pub into: usize,
}

/// A full snapshot of the partition after one merge (or the initial
/// all-singletons state, where `merge` is `None`).
///
/// Each cluster is a sorted list of original item indices; together the
/// clusters partition `0..n_items` exactly. Levels are never mutated after
/// emission, so earlier levels stay valid while later ones are built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    /// The merge that produced this level; `None` only for level 0.
    pub merge: Option<Merge>,
    /// The partition at this point of the merge history.
    pub clusters: Vec<Vec<usize>>,
}

impl Level {
    /// Cluster sizes in slot order.
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Vec::len).collect()
    }
}

/// The ordered merge history of one clustering run, from the all-singletons
/// level down to the stopping level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dendrogram {
    n_items: usize,
    levels: Vec<Level>,
}

impl Dendrogram {
    pub(crate) fn new(n_items: usize, levels: Vec<Level>) -> Self {
        Self { n_items, levels }
    }

    /// Number of original items.
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// All levels, in merge order. Never empty: level 0 always exists.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The last level (fewest clusters).
    pub fn final_level(&self) -> &Level {
        // Construction guarantees at least the initial level.
        &self.levels[self.levels.len() - 1]
    }

    /// Index of the most balanced level by trimmed-mean cluster size.
    ///
    /// For each level the cluster sizes are reduced to a trimmed mean: with
    /// three or more clusters, one occurrence of the largest size and one of
    /// the smallest are dropped and the rest averaged, discounting one
    /// outsized cluster and one outlier singleton. With fewer than three
    /// clusters the plain mean is used instead (the trim would consume the
    /// whole level). The level with the highest value wins; ties keep the
    /// earliest level.
    pub fn balanced_level(&self) -> usize {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, level) in self.levels.iter().enumerate() {
            let score = trimmed_mean_size(&level.sizes());
            if score > best_score {
                best = i;
                best_score = score;
            }
        }
        best
    }

    /// The most balanced level itself.
    pub fn balanced(&self) -> &Level {
        &self.levels[self.balanced_level()]
    }
}

fn trimmed_mean_size(sizes: &[usize]) -> f64 {
    if sizes.is_empty() {
        return 0.0;
    }
    let total: usize = sizes.iter().sum();
    if sizes.len() < 3 {
        return total as f64 / sizes.len() as f64;
    }
    let max = *sizes.iter().max().unwrap_or(&0);
    let min = *sizes.iter().min().unwrap_or(&0);
    (total - max - min) as f64 / (sizes.len() - 2) as f64
}
