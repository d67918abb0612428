//! Error types for the hashviz core library.
//!
//! This module defines the error types raised when table parameters or keys
//! fall outside the domain the engine accepts.

use std::path::PathBuf;

use thiserror::Error;

use crate::key::KeyType;

/// The main error type for hashviz-core operations.
#[derive(Debug, Error)]
pub enum HashVizError {
    /// Error when a table capacity is outside the accepted range.
    #[error("Invalid table capacity: {capacity} (expected {min}..={max})")]
    InvalidCapacity {
        /// The capacity that was provided.
        capacity: usize,
        /// Smallest accepted capacity.
        min: usize,
        /// Largest accepted capacity.
        max: usize,
    },

    /// Error when a numeric key is outside `[0, 1023]`.
    #[error("Numeric key {key} out of range (expected {min}..={max})")]
    KeyOutOfRange {
        /// The rejected key.
        key: i64,
        /// Smallest accepted key.
        min: i32,
        /// Largest accepted key.
        max: i32,
    },

    /// Error when a string key is empty or too long.
    #[error("String key length {len} out of range (expected 1..={max})")]
    InvalidKeyLength {
        /// Length of the rejected key, in characters.
        len: usize,
        /// Longest accepted key.
        max: usize,
    },

    /// Error when a key does not match the table's configured key type.
    #[error("Key type mismatch: expected {expected}, got {actual}")]
    KeyTypeMismatch {
        /// The key type the table was configured with.
        expected: KeyType,
        /// The type of the key that was provided.
        actual: KeyType,
    },

    /// Error when raw input cannot be turned into a key.
    #[error("Invalid key '{input}': {reason}")]
    InvalidKey {
        /// The raw input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// I/O error while reading a configuration file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration JSON could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// A specialized Result type for hashviz-core operations.
pub type Result<T> = std::result::Result<T, HashVizError>;
