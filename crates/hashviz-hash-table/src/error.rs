//! Error types for hash table operations.

use hashviz_core::HashVizError;
use thiserror::Error;

/// Errors that can occur during hash table operations.
///
/// Overflow, duplicate keys and missing keys are not errors; they are
/// reported through the insert and search outcomes. This type only covers
/// calls that break the engine's contract.
#[derive(Error, Debug)]
pub enum HashTableError {
    /// A table or hash function was given a capacity of zero.
    #[error("invalid capacity: {capacity} (must be greater than 0)")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },

    /// A primary index does not address a slot of the table.
    #[error("primary index {index} out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The rejected index.
        index: i64,
        /// Number of slots in the table.
        capacity: usize,
    },

    /// A key or parameter set was rejected by core validation.
    #[error(transparent)]
    Core(#[from] HashVizError),
}

/// A specialized Result type for hash table operations.
pub type Result<T> = std::result::Result<T, HashTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HashTableError::InvalidCapacity { capacity: 0 };
        assert_eq!(err.to_string(), "invalid capacity: 0 (must be greater than 0)");

        let err = HashTableError::IndexOutOfRange {
            index: -2,
            capacity: 7,
        };
        assert_eq!(
            err.to_string(),
            "primary index -2 out of range for capacity 7"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = HashVizError::InvalidKeyLength { len: 0, max: 50 };
        let message = core.to_string();
        let err: HashTableError = core.into();
        assert_eq!(err.to_string(), message);
    }
}
