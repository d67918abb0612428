//! Table configuration.
//!
//! This module provides the parameters a hash table is built from and the
//! enums that select its hash function and collision strategy.
//!
//! # Overview
//!
//! - [`TableParams`]: Capacity, key type, hash method and collision strategy.
//! - [`HashMethod`]: Which hash function maps a key to its primary slot.
//! - [`CollisionStrategy`]: How a collision at the primary slot is resolved.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HashVizError, Result};
use crate::key::KeyType;

/// Smallest table a session may create.
pub const MIN_CAPACITY: usize = 5;

/// Largest table a session may create.
pub const MAX_CAPACITY: usize = 20;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 7;

/// Hash function used to compute a key's primary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HashMethod {
    /// `k mod m`.
    #[default]
    Division,
    /// `floor(m * frac(k * A))` with `A` the golden-ratio fraction.
    Multiplication,
    /// `sum(s[i] * 31^i) mod m` over the key's text.
    Polynomial,
}

impl HashMethod {
    /// All hash methods, in display order.
    pub const ALL: [HashMethod; 3] = [
        HashMethod::Division,
        HashMethod::Multiplication,
        HashMethod::Polynomial,
    ];

    /// Returns the configuration name of this method.
    pub fn name(&self) -> &'static str {
        match self {
            HashMethod::Division => "division",
            HashMethod::Multiplication => "multiplication",
            HashMethod::Polynomial => "polynomial",
        }
    }
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strategy used when a key's primary slot is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollisionStrategy {
    /// External chaining.
    #[default]
    Chain,
    /// Internal (coalesced) chaining through slot links.
    InternalChain,
    /// Linear probing.
    Linear,
    /// Quadratic probing.
    Quadratic,
}

impl CollisionStrategy {
    /// All strategies, in display order.
    pub const ALL: [CollisionStrategy; 4] = [
        CollisionStrategy::Chain,
        CollisionStrategy::InternalChain,
        CollisionStrategy::Linear,
        CollisionStrategy::Quadratic,
    ];

    /// Returns the configuration name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            CollisionStrategy::Chain => "chain",
            CollisionStrategy::InternalChain => "internalChain",
            CollisionStrategy::Linear => "linear",
            CollisionStrategy::Quadratic => "quadratic",
        }
    }

    /// Returns `true` for strategies that store keys in slot links.
    pub fn uses_links(&self) -> bool {
        matches!(self, CollisionStrategy::InternalChain)
    }
}

impl fmt::Display for CollisionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters a hash table is built from.
///
/// Changing any of them means building a new table; a table never changes
/// its capacity or strategy in place.
///
/// # Examples
///
/// ```
/// use hashviz_core::params::{CollisionStrategy, HashMethod, TableParams};
///
/// let params = TableParams::builder()
///     .capacity(10)
///     .hash_method(HashMethod::Multiplication)
///     .collision_strategy(CollisionStrategy::Quadratic)
///     .build()
///     .unwrap();
/// assert_eq!(params.capacity(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableParams {
    /// Number of slots.
    #[serde(alias = "size")]
    capacity: usize,

    /// Type of keys the table accepts.
    #[serde(default)]
    key_type: KeyType,

    /// Hash function for primary indices.
    #[serde(default)]
    hash_method: HashMethod,

    /// Collision resolution strategy.
    #[serde(default, alias = "collisionMethod")]
    collision_strategy: CollisionStrategy,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            key_type: KeyType::default(),
            hash_method: HashMethod::default(),
            collision_strategy: CollisionStrategy::default(),
        }
    }
}

impl TableParams {
    /// Creates parameters with the given capacity and defaults for the rest.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Creates a builder for table parameters.
    pub fn builder() -> TableParamsBuilder {
        TableParamsBuilder::new()
    }

    /// Clamps a requested capacity into the accepted range.
    ///
    /// ```
    /// use hashviz_core::params::TableParams;
    ///
    /// assert_eq!(TableParams::clamp_capacity(2), 5);
    /// assert_eq!(TableParams::clamp_capacity(12), 12);
    /// assert_eq!(TableParams::clamp_capacity(64), 20);
    /// ```
    pub fn clamp_capacity(requested: usize) -> usize {
        requested.clamp(MIN_CAPACITY, MAX_CAPACITY)
    }

    /// Parses and validates parameters from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`HashVizError::Deserialization`] for malformed JSON and any
    /// error raised by [`TableParams::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: TableParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads and validates parameters from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`HashVizError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`TableParams::from_json_str`].
    pub fn from_json_file(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "Loading table parameters");

        let json = std::fs::read_to_string(path).map_err(|e| HashVizError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let params = Self::from_json_str(&json)?;

        tracing::debug!(
            capacity = params.capacity,
            key_type = %params.key_type,
            hash_method = %params.hash_method,
            collision_strategy = %params.collision_strategy,
            "Table parameters loaded"
        );
        Ok(params)
    }

    /// Serializes the parameters to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the configured key type.
    #[inline]
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Returns the configured hash method.
    #[inline]
    pub fn hash_method(&self) -> HashMethod {
        self.hash_method
    }

    /// Returns the configured collision strategy.
    #[inline]
    pub fn collision_strategy(&self) -> CollisionStrategy {
        self.collision_strategy
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HashVizError::InvalidCapacity`] if capacity is outside `[5, 20]`.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&self.capacity) {
            return Err(HashVizError::InvalidCapacity {
                capacity: self.capacity,
                min: MIN_CAPACITY,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

/// Builder for [`TableParams`].
#[derive(Debug, Default)]
pub struct TableParamsBuilder {
    params: TableParams,
}

impl TableParamsBuilder {
    /// Creates a new builder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.params.capacity = capacity;
        self
    }

    /// Sets the key type.
    pub fn key_type(mut self, key_type: KeyType) -> Self {
        self.params.key_type = key_type;
        self
    }

    /// Sets the hash method.
    pub fn hash_method(mut self, hash_method: HashMethod) -> Self {
        self.params.hash_method = hash_method;
        self
    }

    /// Sets the collision strategy.
    pub fn collision_strategy(mut self, strategy: CollisionStrategy) -> Self {
        self.params.collision_strategy = strategy;
        self
    }

    /// Builds the parameters, validating them first.
    pub fn build(self) -> Result<TableParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_params() {
        let params = TableParams::default();
        assert_eq!(params.capacity(), 7);
        assert_eq!(params.key_type(), KeyType::Number);
        assert_eq!(params.hash_method(), HashMethod::Division);
        assert_eq!(params.collision_strategy(), CollisionStrategy::Chain);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let params = TableParams::builder()
            .capacity(20)
            .key_type(KeyType::String)
            .hash_method(HashMethod::Polynomial)
            .collision_strategy(CollisionStrategy::InternalChain)
            .build()
            .unwrap();

        assert_eq!(params.capacity(), 20);
        assert_eq!(params.key_type(), KeyType::String);
        assert_eq!(params.hash_method(), HashMethod::Polynomial);
        assert_eq!(params.collision_strategy(), CollisionStrategy::InternalChain);
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(TableParams::builder().capacity(4).build().is_err());
        assert!(TableParams::builder().capacity(5).build().is_ok());
        assert!(TableParams::builder().capacity(20).build().is_ok());

        let err = TableParams::builder().capacity(21).build().unwrap_err();
        assert!(matches!(
            err,
            HashVizError::InvalidCapacity { capacity: 21, .. }
        ));
    }

    #[test]
    fn test_clamp_capacity() {
        assert_eq!(TableParams::clamp_capacity(0), MIN_CAPACITY);
        assert_eq!(TableParams::clamp_capacity(7), 7);
        assert_eq!(TableParams::clamp_capacity(1000), MAX_CAPACITY);
    }

    #[test]
    fn test_names() {
        assert_eq!(CollisionStrategy::InternalChain.to_string(), "internalChain");
        assert_eq!(HashMethod::Multiplication.to_string(), "multiplication");
        assert!(CollisionStrategy::InternalChain.uses_links());
        assert!(!CollisionStrategy::Linear.uses_links());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "capacity": 10,
            "keyType": "string",
            "hashMethod": "polynomial",
            "collisionStrategy": "internalChain"
        }"#;
        let params = TableParams::from_json_str(json).unwrap();
        assert_eq!(params.capacity(), 10);
        assert_eq!(params.key_type(), KeyType::String);
        assert_eq!(params.hash_method(), HashMethod::Polynomial);
        assert_eq!(params.collision_strategy(), CollisionStrategy::InternalChain);
    }

    #[test]
    fn test_from_json_accepts_field_aliases() {
        let json = r#"{"size": 8, "collisionMethod": "quadratic"}"#;
        let params = TableParams::from_json_str(json).unwrap();
        assert_eq!(params.capacity(), 8);
        assert_eq!(params.collision_strategy(), CollisionStrategy::Quadratic);
        assert_eq!(params.hash_method(), HashMethod::Division);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = TableParams::from_json_str(r#"{"capacity": 2}"#).unwrap_err();
        assert!(matches!(err, HashVizError::InvalidCapacity { .. }));

        let err = TableParams::from_json_str(r#"{"capacity": 7, "hashMethod": "md5"}"#)
            .unwrap_err();
        assert!(matches!(err, HashVizError::Deserialization(_)));
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.json");

        let params = TableParams::builder()
            .capacity(12)
            .collision_strategy(CollisionStrategy::Linear)
            .build()
            .unwrap();
        std::fs::write(&path, params.to_json_string().unwrap()).unwrap();

        let loaded = TableParams::from_json_file(&path).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_json_file_missing() {
        let dir = tempdir().unwrap();
        let err = TableParams::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, HashVizError::Io { .. }));
    }
}
