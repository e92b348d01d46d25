//! Composite object identity
//!
//! Every indexed object is identified by a caller-supplied id plus an
//! optional kind tag. Internally this is a proper two-field type; it is
//! flattened to a single string only at the store boundary, using a
//! reserved separator byte guaranteed (by validation) not to occur in
//! either field.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved separator between the id and kind parts of an encoded key.
///
/// Ids and kinds containing this byte are rejected at construction.
pub const KEY_SEPARATOR: char = '\u{1}';

/// Composite identity for an indexed object: id + optional kind
///
/// The kind tag lets callers index different object classes (users,
/// posts, ...) under distinct storage keys without colliding ids, and
/// makes the kind addressable by score boosting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectKey {
    id: String,
    kind: Option<String>,
}

impl ObjectKey {
    /// Create a key with no kind tag
    pub fn new(id: impl Into<String>) -> Result<Self> {
        Self::from_parts(&id.into(), None)
    }

    /// Create a key with a kind tag
    pub fn with_kind(id: impl Into<String>, kind: impl Into<String>) -> Result<Self> {
        let (id, kind) = (id.into(), kind.into());
        Self::from_parts(&id, Some(&kind))
    }

    /// Create a key from borrowed parts, validating both
    ///
    /// An empty kind is normalized to `None` so that the two spellings
    /// encode identically.
    pub fn from_parts(id: &str, kind: Option<&str>) -> Result<Self> {
        validate_part(id)?;
        if id.is_empty() {
            return Err(Error::InvalidKey {
                value: id.to_string(),
                reason: "id cannot be empty",
            });
        }
        let kind = match kind {
            Some("") | None => None,
            Some(k) => {
                validate_part(k)?;
                Some(k.to_string())
            }
        };
        Ok(Self {
            id: id.to_string(),
            kind,
        })
    }

    /// The caller-supplied id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The optional kind tag
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Flatten to the single-string form used as a store member/field
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}",
            self.id,
            KEY_SEPARATOR,
            self.kind.as_deref().unwrap_or("")
        )
    }

    /// Rebuild a key from its encoded store form
    ///
    /// Encoded members come back from the store, so this never fails;
    /// a missing separator means the whole string is the id.
    pub fn decode(raw: &str) -> Self {
        match raw.split_once(KEY_SEPARATOR) {
            Some((id, "")) => Self {
                id: id.to_string(),
                kind: None,
            },
            Some((id, kind)) => Self {
                id: id.to_string(),
                kind: Some(kind.to_string()),
            },
            None => Self {
                id: raw.to_string(),
                kind: None,
            },
        }
    }

    /// The non-empty components of this key (id, then kind if present)
    ///
    /// Boost maps are keyed by these parts.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str())
            .chain(self.kind.as_deref())
            .filter(|p| !p.is_empty())
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{}/{}", self.id, kind),
            None => write!(f, "{}", self.id),
        }
    }
}

fn validate_part(part: &str) -> Result<()> {
    if part.contains(KEY_SEPARATOR) {
        return Err(Error::InvalidKey {
            value: part.to_string(),
            reason: "contains the reserved separator",
        });
    }
    Ok(())
}
