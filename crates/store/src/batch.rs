//! Write batches
//!
//! A [`Batch`] accumulates write operations so a whole `store`/`remove`
//! call can be handed to the backend in one [`crate::Store::apply`],
//! minimizing the window for partial application.

/// A single write operation inside a [`Batch`]
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Set a field in a map
    MapSet {
        /// Map key
        map: String,
        /// Field within the map
        field: String,
        /// Value to store
        value: String,
    },
    /// Delete a field from a map
    MapRemove {
        /// Map key
        map: String,
        /// Field within the map
        field: String,
    },
    /// Add (or re-score) a sorted-set member
    SetAdd {
        /// Sorted-set key
        key: String,
        /// Member to add
        member: String,
        /// Score to assign
        score: f64,
    },
    /// Remove a sorted-set member
    SetRemove {
        /// Sorted-set key
        key: String,
        /// Member to remove
        member: String,
    },
    /// Delete a whole key
    Delete {
        /// Key to delete
        key: String,
    },
}

/// An ordered sequence of write operations applied atomically
#[derive(Debug, Clone, Default)]
pub struct Batch {
    ops: Vec<WriteOp>,
}

impl Batch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a map field write
    pub fn map_set(&mut self, map: &str, field: &str, value: &str) {
        self.ops.push(WriteOp::MapSet {
            map: map.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    /// Queue a map field deletion
    pub fn map_remove(&mut self, map: &str, field: &str) {
        self.ops.push(WriteOp::MapRemove {
            map: map.to_string(),
            field: field.to_string(),
        });
    }

    /// Queue a sorted-set member write
    pub fn set_add(&mut self, key: &str, member: &str, score: f64) {
        self.ops.push(WriteOp::SetAdd {
            key: key.to_string(),
            member: member.to_string(),
            score,
        });
    }

    /// Queue a sorted-set member removal
    pub fn set_remove(&mut self, key: &str, member: &str) {
        self.ops.push(WriteOp::SetRemove {
            key: key.to_string(),
            member: member.to_string(),
        });
    }

    /// Queue a whole-key deletion
    pub fn delete(&mut self, key: &str) {
        self.ops.push(WriteOp::Delete {
            key: key.to_string(),
        });
    }

    /// Number of queued operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the batch holds no operations
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Borrow the queued operations in order
    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    /// Consume the batch, yielding the operations in order
    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }
}
