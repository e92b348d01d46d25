//! Indexing and query engine for lexadb
//!
//! This crate provides:
//! - Phrase normalizer (lowercase, character filter, stop-word split)
//! - Alphabetical scorer mapping phrases to ordered integers
//! - Prefix expander for autocomplete fan-out
//! - KeySpace describing the store key layout
//! - Engine: index writer/remover plus the search pipeline with
//!   intersection caching and score boosting
//!
//! The engine is a stateless facade over any [`lexa_store::Store`]
//! implementation; it holds no state of its own beyond configuration.

pub mod engine;
pub mod keys;
pub mod normalize;
pub mod prefix;
pub mod score;
pub mod search;

// Re-export commonly used types
pub use engine::{Document, Engine};
pub use keys::KeySpace;
pub use normalize::{normalize, normalize_key};
pub use prefix::prefixes;
pub use score::score;
pub use search::SearchRequest;
