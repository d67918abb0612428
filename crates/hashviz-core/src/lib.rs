//! Core types for the hashviz hashing engine.
//!
//! This crate provides the foundational types shared by the hashviz crates:
//!
//! - **Keys**: [`Key`] values and the [`KeyType`] a table is configured for,
//!   with parsing and domain validation.
//! - **Configuration types**: [`TableParams`] and the [`HashMethod`] /
//!   [`CollisionStrategy`] selectors, loadable from JSON.
//! - **Error types**: Structured error handling with detailed context.
//!
//! # Example
//!
//! ```
//! use hashviz_core::{CollisionStrategy, Key, KeyType, TableParams};
//!
//! let params = TableParams::builder()
//!     .capacity(7)
//!     .key_type(KeyType::String)
//!     .collision_strategy(CollisionStrategy::Linear)
//!     .build()
//!     .unwrap();
//!
//! let key = Key::parse("Romeo", params.key_type()).unwrap();
//! assert_eq!(key.as_str(), Some("Romeo"));
//! ```
//!
//! # Modules
//!
//! - [`key`]: Key values and validation.
//! - [`params`]: Table configuration.
//! - [`error`]: Error types for the library.

pub mod error;
pub mod key;
pub mod params;

pub use error::{HashVizError, Result};
pub use key::{Key, KeyType, MAX_NUMERIC_KEY, MAX_STRING_KEY_LEN, MIN_NUMERIC_KEY};
pub use params::{
    CollisionStrategy, HashMethod, TableParams, TableParamsBuilder, DEFAULT_CAPACITY,
    MAX_CAPACITY, MIN_CAPACITY,
};
