//! lexadb - Prefix autocomplete and multi-word search index
//!
//! lexadb builds an autocomplete/search index on top of any backing store
//! that can host maps and sorted sets. The store supplies durable storage
//! and ordered-set primitives; lexadb supplies the indexing scheme: phrase
//! normalization, an alphabetical scoring function, prefix fan-out on
//! write, multi-word intersection with result caching, and score-based
//! boosting.
//!
//! # Quick Start
//!
//! ```
//! use lexadb::{Document, Engine, MemoryStore, SearchRequest};
//!
//! let engine = Engine::new(MemoryStore::new());
//!
//! engine.store(&Document::new("a1").with_title("Apple Pie").with_payload("A"))?;
//! engine.store(&Document::new("a2").with_title("Apple Tart").with_payload("B"))?;
//!
//! let hits = engine.search(SearchRequest::new("app"))?;
//! assert_eq!(hits, vec!["A", "B"]);
//! # Ok::<(), lexadb::Error>(())
//! ```
//!
//! # Architecture
//!
//! The engine is a stateless facade over a [`Store`] implementation.
//! [`MemoryStore`] is the in-memory reference backend; any store exposing
//! the same map/sorted-set capabilities can be plugged in at the [`Store`]
//! seam.

// Re-export the public API from the member crates
pub use lexa_core::config::EngineConfig;
pub use lexa_core::error::{Error, Result};
pub use lexa_core::stopwords;
pub use lexa_core::types::ObjectKey;
pub use lexa_engine::{Document, Engine, SearchRequest};
pub use lexa_store::{Batch, MemoryStore, Store, WriteOp};
