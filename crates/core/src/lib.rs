//! Core types for the lexadb autocomplete index
//!
//! This crate defines the foundational types shared by the store and
//! engine crates:
//! - Error: error taxonomy and Result alias
//! - ObjectKey: composite object identity (id + optional kind)
//! - EngineConfig: recognized configuration options
//! - Stop-word sets used by phrase normalization

pub mod config;
pub mod error;
pub mod stopwords;
pub mod types;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use types::{ObjectKey, KEY_SEPARATOR};
