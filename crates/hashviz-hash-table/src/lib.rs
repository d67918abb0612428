//! Hashing and collision resolution engine for hash table visualization.
//!
//! This crate maps keys to slots of a small fixed-size table and resolves
//! collisions with one of four strategies, reporting every step so a caller
//! can animate it.
//!
//! # Overview
//!
//! The main components are:
//!
//! - [`hash_functions`] - Division, multiplication and polynomial hashing
//! - [`CollisionResolver`] - The trait implemented by every slot-table strategy
//! - [`SlotTable`] - The fixed array of [`TableEntry`] slots the resolvers work on
//! - [`ChainStore`] - External chaining with real linked chains
//! - [`HashTable`] - A session tying a [`TableParams`](hashviz_core::TableParams)
//!   to a hash function and a strategy
//!
//! Overflow, duplicates and missing keys are normal outcomes described by
//! [`InsertOutcome`] and [`SearchOutcome`]; [`HashTableError`] is reserved
//! for calls that break the engine's contract.
//!
//! # Example
//!
//! ```
//! use hashviz_core::{CollisionStrategy, Key};
//! use hashviz_hash_table::{insert, search, SlotTable};
//!
//! let mut table = SlotTable::new(10).unwrap();
//! for key in [3, 13, 23] {
//!     insert(&mut table, 3, Key::Int(key), 3, CollisionStrategy::Quadratic).unwrap();
//! }
//!
//! let found = search(&table, 3, &Key::Int(23), CollisionStrategy::Quadratic).unwrap();
//! assert_eq!(found.index, Some(7));
//! assert_eq!(found.probe_path, vec![3, 4, 7]);
//! ```

mod chain_store;
mod chain_view;
mod entry;
mod error;
pub mod hash_functions;
mod outcome;
mod resolver;
mod table;
mod traits;

pub use chain_store::{Chain, ChainHit, ChainInsert, ChainStore};
pub use chain_view::{ChainEntry, ChainNodeView};
pub use entry::{SlotTable, TableEntry};
pub use error::{HashTableError, Result};
pub use hash_functions::{compute_index, HashFunction, HashFunctionFactory};
pub use outcome::{InsertOutcome, InsertStatus, SearchOutcome};
pub use resolver::{
    insert, search, ChainModel, InternalChaining, LinearProbing, QuadraticProbing,
    ResolverFactory,
};
pub use table::HashTable;
pub use traits::CollisionResolver;
