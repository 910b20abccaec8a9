//! Linkage strategies: reducing inter-cluster pairwise distances to a scalar.

/// How to collapse all pairwise member distances between two clusters into
/// one cluster-to-cluster distance.
///
/// | Linkage  | Reduction | Effect |
/// |----------|-----------|--------|
/// | Single   | min       | Chaining; elongated clusters |
/// | Complete | max       | Compact clusters |
/// | Average  | mean      | Balanced compromise |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// Minimum pairwise distance.
    Single,
    /// Maximum pairwise distance.
    Complete,
    /// Arithmetic mean of pairwise distances.
    Average,
    /// Caller-supplied reduction over the pairwise distances.
    Custom(fn(&[f64]) -> f64),
}

impl Default for Linkage {
    fn default() -> Self {
        Self::Complete
    }
}

impl Linkage {
    /// Reduce a non-empty distance list. An empty list yields 0 (it never
    /// occurs between two non-empty clusters).
    pub fn reduce(&self, distances: &[f64]) -> f64 {
        if distances.is_empty() {
            return 0.0;
        }
        match self {
            Self::Single => distances.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Complete => distances.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Average => distances.iter().sum::<f64>() / distances.len() as f64,
            Self::Custom(f) => f(distances),
        }
    }
}
