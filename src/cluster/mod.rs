//! Agglomerative clustering over pairwise distances.
//!
//! Bottom-up: every item starts as its own cluster and the two closest
//! clusters merge until a stopping condition holds. "Closest" is a
//! [`Linkage`] reduction over member-pair distances from an immutable
//! [`DistanceMatrix`]; each merge emits a [`Level`] snapshot, and the full
//! [`Dendrogram`] of snapshots is the run's output.
//!
//! ```rust
//! use sheaf::cluster::{Agglomerative, Distance, Linkage};
//!
//! let vectors = vec![vec![0.0], vec![0.1], vec![10.0], vec![10.1]];
//! let dendrogram = Agglomerative::new()
//!     .with_distance(Distance::Euclidean)
//!     .with_linkage(Linkage::Complete)
//!     .with_min_clusters(2)
//!     .fit(&vectors)
//!     .unwrap();
//! assert_eq!(dendrogram.final_level().clusters, vec![vec![0, 1], vec![2, 3]]);
//! ```

mod agglomerative;
mod distance;
mod level;
mod linkage;

pub use agglomerative::Agglomerative;
pub use distance::{Distance, DistanceMatrix};
pub use level::{Dendrogram, Level, Merge};
pub use linkage::Linkage;
