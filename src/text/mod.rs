//! Text vectorization: tokenizing, vocabulary building, TF-IDF weighting.
//!
//! The pipeline through this module is:
//!
//! ```text
//! raw text ──Tokenizer──► TermVector (sparse counts)
//!          ──boost_host_affinity──► boosted counts     (optional)
//!          ──Vocabulary::build──► shared term order
//!          ──Weighter──► Vec<f64> per document (dense, vocab-aligned)
//! ```
//!
//! All state (vocabulary, document frequencies, IDF memo) is scoped to one
//! run; nothing persists across corpora.

mod tokenizer;
mod tfidf;
mod vocabulary;

pub use tfidf::{boost_host_affinity, Weighter, LINKED_HOST_BOOST, OWN_HOST_BOOST};
pub use tokenizer::{TermVector, Tokenizer};
pub use vocabulary::Vocabulary;
