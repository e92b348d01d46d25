//! Error types for lexadb
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Absent data is deliberately NOT an error: removing a never-indexed id,
//! a bucket member whose payload has vanished, and a query that normalizes
//! to zero tokens are all no-ops or skips handled at the call site. Store
//! failures are propagated to the caller unmodified; this layer performs
//! no retries and no local recovery.

use thiserror::Error;

/// Result type alias for lexadb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the lexadb index
#[derive(Debug, Error)]
pub enum Error {
    /// Backing store failure (connectivity, protocol, type mismatch)
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization/deserialization error for JSON payloads
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An object id or kind contains the reserved separator byte
    #[error("Invalid key {value:?}: {reason}")]
    InvalidKey {
        /// The offending id or kind value
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_store() {
        let err = Error::Store("connection refused".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Store error"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_error_display_serialization() {
        let err = Error::Serialization("invalid format".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Serialization error"));
        assert!(msg.contains("invalid format"));
    }

    #[test]
    fn test_error_display_invalid_key() {
        let err = Error::InvalidKey {
            value: "a\u{1}b".to_string(),
            reason: "contains the reserved separator",
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid key"));
        assert!(msg.contains("reserved separator"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let result: std::result::Result<String, serde_json::Error> =
            serde_json::from_str("not json");
        let err: Error = result.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
