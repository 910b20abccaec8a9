//! # sheaf
//!
//! Groups a corpus of text documents by pairwise similarity: TF-IDF vectors
//! (optionally boosted by hyperlink/host co-occurrence), agglomerative
//! hierarchical clustering with pluggable distance and linkage strategies,
//! and a balanced-level heuristic that picks one flat partition out of the
//! resulting dendrogram.
//!
//! ```rust
//! use sheaf::{Clusterer, Document};
//!
//! let docs = vec![
//!     Document::new("t1", "rust borrow checker lifetimes"),
//!     Document::new("t2", "rust cargo build tooling"),
//!     Document::new("t3", "sourdough bread starter"),
//!     Document::new("t4", "pizza dough fermentation"),
//! ];
//!
//! let grouping = Clusterer::new(2).cluster(&docs).unwrap();
//! for group in grouping.partition() {
//!     println!("{group:?}");
//! }
//! ```
//!
//! The crate splits into two halves usable on their own: [`text`] turns raw
//! documents into dense weighted vectors over a shared vocabulary, and
//! [`cluster`] merges any vectors (or a prebuilt distance matrix) into a
//! [`Dendrogram`]. [`Clusterer`] wires the two together.

pub mod cluster;
pub mod document;
/// Error types used across `sheaf`.
pub mod error;
pub mod pipeline;
pub mod text;

#[cfg(test)]
mod pipeline_tests;

pub use cluster::{Agglomerative, Dendrogram, Distance, DistanceMatrix, Level, Linkage, Merge};
pub use document::Document;
pub use error::{Error, Result};
pub use pipeline::{Clusterer, Grouping};
pub use text::{TermVector, Tokenizer, Vocabulary, Weighter};
