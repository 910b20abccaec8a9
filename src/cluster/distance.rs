//! Pairwise distance strategies and the per-run distance matrix.

use crate::error::{Error, Result};

/// Distance between two vectors of equal dimension.
///
/// A closed strategy set selected at configuration time; `Custom` keeps the
/// pluggable-function escape hatch without any runtime name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    /// `sum(|a - b|) / (||a|| + ||b||)`: Manhattan distance normalized by the
    /// two L2 norms, so documents of very different term-weight magnitude
    /// still compare on a common scale. Two all-zero vectors have distance 0.
    NormalizedManhattan,
    /// Plain Manhattan (L1) distance.
    Manhattan,
    /// Euclidean (L2) distance.
    Euclidean,
    /// Caller-supplied distance function.
    Custom(fn(&[f64], &[f64]) -> f64),
}

impl Default for Distance {
    fn default() -> Self {
        Self::NormalizedManhattan
    }
}

impl Distance {
    /// Apply the strategy to one vector pair.
    pub fn measure(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Self::NormalizedManhattan => {
                let l1: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();
                let norms = norm_l2(a) + norm_l2(b);
                if norms == 0.0 {
                    0.0
                } else {
                    l1 / norms
                }
            }
            Self::Manhattan => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
            Self::Euclidean => a
                .iter()
                .zip(b)
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f64>()
                .sqrt(),
            Self::Custom(f) => f(a, b),
        }
    }
}

fn norm_l2(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Symmetric N x N distances over document indices, lower triangle only.
///
/// Entry `(row, col)` is stored for `row > col`; the rest comes from
/// symmetry and the zero diagonal. Immutable once built.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    /// `rows[i]` holds distances to indices `0..i`.
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Compute all pairwise distances between `vectors`.
    ///
    /// Every vector must share the same dimension; O(N^2) entries, each
    /// O(dimension) to compute.
    pub fn build(vectors: &[Vec<f64>], distance: Distance) -> Result<Self> {
        if vectors.is_empty() {
            return Err(Error::EmptyInput);
        }
        let dim = vectors[0].len();
        if let Some(bad) = vectors.iter().find(|v| v.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: bad.len(),
            });
        }

        let rows = vectors
            .iter()
            .enumerate()
            .map(|(i, vi)| (0..i).map(|j| distance.measure(vi, &vectors[j])).collect())
            .collect();

        Ok(Self { rows })
    }

    /// Number of items the matrix spans.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True for a zero-item matrix (never produced by [`Self::build`]).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance between items `i` and `j` (symmetric; 0 on the diagonal).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.rows[i][j],
            std::cmp::Ordering::Less => self.rows[j][i],
            std::cmp::Ordering::Equal => 0.0,
        }
    }
}
