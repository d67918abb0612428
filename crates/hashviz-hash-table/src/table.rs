//! Hash table session built from [`TableParams`].

use hashviz_core::{CollisionStrategy, Key, TableParams};

use crate::chain_store::{ChainInsert, ChainStore};
use crate::chain_view::ChainEntry;
use crate::entry::{SlotTable, TableEntry};
use crate::error::Result;
use crate::hash_functions::{HashFunction, HashFunctionFactory};
use crate::outcome::{InsertOutcome, SearchOutcome};
use crate::traits::CollisionResolver;
use crate::ResolverFactory;

enum Backend {
    Chained(ChainStore<Key>),
    Slots {
        table: SlotTable,
        resolver: Box<dyn CollisionResolver>,
    },
}

/// A hash table configured by [`TableParams`].
///
/// The session validates keys against the configured key type, computes
/// primary indices with the configured hash method, and routes inserts and
/// searches to the configured strategy. External chaining is backed by a
/// [`ChainStore`], which hashes keys itself; the other strategies work on a
/// [`SlotTable`].
///
/// Changing parameters replaces the whole table; see [`HashTable::rebuild`].
///
/// # Example
///
/// ```
/// use hashviz_core::{CollisionStrategy, Key, TableParams};
/// use hashviz_hash_table::HashTable;
///
/// let params = TableParams::builder()
///     .capacity(7)
///     .collision_strategy(CollisionStrategy::Linear)
///     .build()
///     .unwrap();
/// let mut table = HashTable::new(params).unwrap();
///
/// table.insert(Key::Int(0)).unwrap();
/// let outcome = table.insert(Key::Int(7)).unwrap();
/// assert_eq!(outcome.stored_index(), Some(1));
/// assert_eq!(table.search(&Key::Int(7)).unwrap().index, Some(1));
/// ```
pub struct HashTable {
    params: TableParams,
    hasher: Box<dyn HashFunction>,
    backend: Backend,
}

impl std::fmt::Debug for HashTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashTable")
            .field("params", &self.params)
            .field("hasher", &self.hasher.name())
            .field("len", &self.len())
            .finish()
    }
}

impl HashTable {
    /// Builds an empty table.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation.
    pub fn new(params: TableParams) -> Result<Self> {
        params.validate()?;

        let capacity = params.capacity();
        let backend = match params.collision_strategy() {
            CollisionStrategy::Chain => Backend::Chained(ChainStore::new(capacity)?),
            strategy => Backend::Slots {
                table: SlotTable::new(capacity)?,
                resolver: ResolverFactory::create(strategy),
            },
        };

        tracing::info!(
            capacity,
            key_type = %params.key_type(),
            hash_method = %params.hash_method(),
            collision_strategy = %params.collision_strategy(),
            "Hash table created"
        );

        Ok(Self {
            hasher: HashFunctionFactory::create(params.hash_method()),
            params,
            backend,
        })
    }

    /// Discards the current table and builds an empty one from `params`.
    ///
    /// On error the current table is kept unchanged.
    pub fn rebuild(&mut self, params: TableParams) -> Result<()> {
        *self = Self::new(params)?;
        Ok(())
    }

    /// Returns the parameters the table was built from.
    pub fn params(&self) -> &TableParams {
        &self.params
    }

    /// Computes the primary index of a key with the configured hash method.
    pub fn compute_index(&self, key: &Key) -> Result<i64> {
        self.hasher.hash(key, self.params.capacity())
    }

    /// Validates and inserts a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is outside the configured key domain or
    /// hashes outside the table.
    pub fn insert(&mut self, key: Key) -> Result<InsertOutcome> {
        key.validate(self.params.key_type())?;
        let capacity = self.params.capacity();

        match &mut self.backend {
            Backend::Chained(store) => {
                let result = store.insert(key.clone(), key.clone())?;
                Ok(match result {
                    ChainInsert::Inserted { index, position } => {
                        InsertOutcome::placed(index, position, vec![index])
                    }
                    ChainInsert::Updated { index, .. } => InsertOutcome::duplicate(
                        index,
                        format!("Key {} already exists in the table (slot {})", key, index),
                    ),
                    ChainInsert::Overflow => InsertOutcome::overflow(
                        Vec::new(),
                        format!(
                            "Table overflow: all {} elements are in use, key {} was not added",
                            capacity, key
                        ),
                    ),
                })
            }
            Backend::Slots { table, resolver } => {
                let hash_value = self.hasher.hash(&key, capacity)?;
                resolver.insert(table, hash_value, key, hash_value)
            }
        }
    }

    /// Validates and searches for a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is outside the configured key domain or
    /// hashes outside the table.
    pub fn search(&self, key: &Key) -> Result<SearchOutcome> {
        key.validate(self.params.key_type())?;

        match &self.backend {
            Backend::Chained(store) => {
                let index = store.slot_for(key)?;
                Ok(match store.find(key)? {
                    Some(hit) => SearchOutcome::found(hit.index, vec![hit.index]),
                    None => SearchOutcome::not_found(vec![index], format!("Key {} not found", key)),
                })
            }
            Backend::Slots { table, resolver } => {
                let primary = self.hasher.hash(key, self.params.capacity())?;
                resolver.search(table, primary, key)
            }
        }
    }

    /// Returns the slot entries, or `None` for external chaining.
    pub fn entries(&self) -> Option<&[TableEntry]> {
        match &self.backend {
            Backend::Chained(_) => None,
            Backend::Slots { table, .. } => Some(table.entries()),
        }
    }

    /// Returns the chain views, empty unless the table uses external chaining.
    pub fn chain_entries(&self, highlight: Option<&Key>) -> Vec<ChainEntry> {
        match &self.backend {
            Backend::Chained(store) => store.chain_entries(highlight),
            Backend::Slots { .. } => Vec::new(),
        }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        match &self.backend {
            Backend::Chained(store) => store.len(),
            Backend::Slots { table, .. } => table.occupied(),
        }
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fraction of the capacity in use.
    pub fn occupancy_rate(&self) -> f64 {
        self.len() as f64 / self.params.capacity() as f64
    }
}
