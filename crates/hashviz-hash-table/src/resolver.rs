//! Collision resolution strategies for the slot table.
//!
//! # Available Strategies
//!
//! - [`ChainModel`] - Collision counting model of external chaining
//! - [`InternalChaining`] - Coalesced chaining through slot links
//! - [`LinearProbing`] - Probe `primary + i`
//! - [`QuadraticProbing`] - Probe `primary + i^2`, at most `ceil(m / 2)` times
//!
//! Real external chaining with stored chains lives in
//! [`ChainStore`](crate::ChainStore).

use hashviz_core::{CollisionStrategy, Key};

use crate::entry::SlotTable;
use crate::outcome::{InsertOutcome, InsertStatus, SearchOutcome};
use crate::traits::CollisionResolver;
use crate::Result;

/// Follows `link` fields from `primary` until the key or the end of the
/// chain is reached. At most `capacity` slots are visited.
fn follow_links(table: &SlotTable, primary: usize, key: &Key) -> SearchOutcome {
    let mut path = Vec::new();
    let mut current = Some(primary);

    while let Some(index) = current {
        if path.len() == table.capacity() {
            break;
        }
        path.push(index);

        let entry = &table.entries()[index];
        if entry.holds(key) {
            return SearchOutcome::found(index, path);
        }
        current = entry.link();
    }

    SearchOutcome::not_found(path, format!("Key {} not found", key))
}

/// Collision counting model of external chaining.
///
/// The first key hashed to a slot is stored there. Later keys hashed to the
/// same slot are not stored anywhere: the slot's collision counter is
/// incremented instead. This is a visual model of "a collision happened
/// here" and intentionally loses those keys; [`ChainStore`](crate::ChainStore)
/// is the structure that actually keeps chained keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainModel;

impl CollisionResolver for ChainModel {
    fn strategy(&self) -> CollisionStrategy {
        CollisionStrategy::Chain
    }

    fn place(&self, table: &mut SlotTable, primary: usize, key: Key, hash_value: i64) -> InsertOutcome {
        let entry = table.entry_mut(primary);
        if entry.is_empty() {
            entry.occupy(key, hash_value, 0);
            return InsertOutcome::placed(primary, 0, vec![primary]);
        }

        let collisions = entry.record_collision();
        InsertOutcome {
            status: InsertStatus::CollisionRecorded {
                index: primary,
                collisions,
            },
            probe_path: vec![primary],
            message: Some(format!(
                "Collision at slot {}: key {} was counted but not stored",
                primary, key
            )),
        }
    }

    fn probe(&self, table: &SlotTable, primary: usize, key: &Key) -> SearchOutcome {
        follow_links(table, primary, key)
    }
}

/// Internal (coalesced) chaining.
///
/// On a collision the table is scanned forward from `primary + 1` for a free
/// slot. The key is stored there and linked from the tail of the chain that
/// starts at `primary`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternalChaining;

impl CollisionResolver for InternalChaining {
    fn strategy(&self) -> CollisionStrategy {
        CollisionStrategy::InternalChain
    }

    fn place(&self, table: &mut SlotTable, primary: usize, key: Key, hash_value: i64) -> InsertOutcome {
        let capacity = table.capacity();
        if table.entries()[primary].is_empty() {
            table.entry_mut(primary).occupy(key, hash_value, 0);
            return InsertOutcome::placed(primary, 0, vec![primary]);
        }

        let mut path = vec![primary];
        let mut free = None;
        for step in 1..capacity {
            let index = (primary + step) % capacity;
            path.push(index);
            if table.entries()[index].is_empty() {
                free = Some(index);
                break;
            }
        }

        let Some(free) = free else {
            return InsertOutcome::overflow(
                path,
                format!(
                    "Table overflow: no free slot left to chain key {} from slot {}",
                    key, primary
                ),
            );
        };

        // Walk to the chain's tail; links never revisit a slot, so the walk
        // ends within `capacity` steps.
        let mut tail = primary;
        let mut hops = 0;
        while let Some(next) = table.entries()[tail].link() {
            if hops == capacity {
                break;
            }
            tail = next;
            hops += 1;
        }

        let collisions = table.entries()[tail].collisions() + 1;
        table.entry_mut(tail).set_link(free);
        table.entry_mut(free).occupy(key, hash_value, collisions);
        InsertOutcome::placed(free, collisions, path)
    }

    fn probe(&self, table: &SlotTable, primary: usize, key: &Key) -> SearchOutcome {
        follow_links(table, primary, key)
    }
}

/// Linear probing: `primary + 1, primary + 2, ...` modulo the capacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProbing;

impl CollisionResolver for LinearProbing {
    fn strategy(&self) -> CollisionStrategy {
        CollisionStrategy::Linear
    }

    fn place(&self, table: &mut SlotTable, primary: usize, key: Key, hash_value: i64) -> InsertOutcome {
        let capacity = table.capacity();
        let mut path = Vec::with_capacity(capacity);

        for step in 0..capacity {
            let index = (primary + step) % capacity;
            path.push(index);
            if table.entries()[index].is_empty() {
                table.entry_mut(index).occupy(key, hash_value, step);
                return InsertOutcome::placed(index, step, path);
            }
        }

        InsertOutcome::overflow(
            path,
            format!(
                "Table overflow: probed all {} slots without finding room for key {}",
                capacity, key
            ),
        )
    }

    fn probe(&self, table: &SlotTable, primary: usize, key: &Key) -> SearchOutcome {
        let capacity = table.capacity();
        let mut path = Vec::new();

        for step in 0..capacity {
            let index = (primary + step) % capacity;
            path.push(index);
            let entry = &table.entries()[index];
            if entry.holds(key) {
                return SearchOutcome::found(index, path);
            }
            if entry.is_empty() {
                break;
            }
        }

        SearchOutcome::not_found(path, format!("Key {} not found", key))
    }
}

/// Quadratic probing: `primary + i^2` modulo the capacity for
/// `i = 1..=ceil(m / 2)`.
///
/// The probe cap is a fixed bound, not a guarantee that every free slot is
/// reachable: insertion can overflow while the table still has room.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticProbing;

impl QuadraticProbing {
    /// Maximum number of probes after the primary slot: `ceil(capacity / 2)`.
    pub fn max_probes(capacity: usize) -> usize {
        (capacity + 1) / 2
    }

    fn slot(primary: usize, step: usize, capacity: usize) -> usize {
        (primary + step * step) % capacity
    }
}

impl CollisionResolver for QuadraticProbing {
    fn strategy(&self) -> CollisionStrategy {
        CollisionStrategy::Quadratic
    }

    fn place(&self, table: &mut SlotTable, primary: usize, key: Key, hash_value: i64) -> InsertOutcome {
        let capacity = table.capacity();
        let max_probes = Self::max_probes(capacity);
        let mut path = vec![primary];

        if table.entries()[primary].is_empty() {
            table.entry_mut(primary).occupy(key, hash_value, 0);
            return InsertOutcome::placed(primary, 0, path);
        }

        for step in 1..=max_probes {
            if step >= capacity {
                break;
            }
            let index = Self::slot(primary, step, capacity);
            path.push(index);
            if table.entries()[index].is_empty() {
                table.entry_mut(index).occupy(key, hash_value, step);
                return InsertOutcome::placed(index, step, path);
            }
        }

        InsertOutcome::overflow(
            path,
            format!(
                "Table overflow: no free slot for key {} within the probe limit of {} quadratic probes",
                key, max_probes
            ),
        )
    }

    fn probe(&self, table: &SlotTable, primary: usize, key: &Key) -> SearchOutcome {
        let capacity = table.capacity();
        let max_probes = Self::max_probes(capacity);
        let mut path = Vec::new();

        for step in 0..=max_probes {
            let index = Self::slot(primary, step, capacity);
            path.push(index);
            let entry = &table.entries()[index];
            if entry.holds(key) {
                return SearchOutcome::found(index, path);
            }
            if entry.is_empty() {
                return SearchOutcome::not_found(path, format!("Key {} not found", key));
            }
        }

        SearchOutcome::not_found(
            path,
            format!(
                "Key {} not found within the probe limit of {} quadratic probes",
                key, max_probes
            ),
        )
    }
}

/// Factory for creating resolvers from a [`CollisionStrategy`].
///
/// # Example
///
/// ```
/// use hashviz_core::CollisionStrategy;
/// use hashviz_hash_table::{CollisionResolver, ResolverFactory};
///
/// let resolver = ResolverFactory::create(CollisionStrategy::Quadratic);
/// assert_eq!(resolver.strategy(), CollisionStrategy::Quadratic);
/// ```
pub struct ResolverFactory;

impl ResolverFactory {
    /// Creates the resolver for the given strategy.
    ///
    /// [`CollisionStrategy::Chain`] maps to the slot-table [`ChainModel`].
    pub fn create(strategy: CollisionStrategy) -> Box<dyn CollisionResolver> {
        match strategy {
            CollisionStrategy::Chain => Box::new(ChainModel),
            CollisionStrategy::InternalChain => Box::new(InternalChaining),
            CollisionStrategy::Linear => Box::new(LinearProbing),
            CollisionStrategy::Quadratic => Box::new(QuadraticProbing),
        }
    }
}

/// Inserts a key into a slot table with the given strategy.
///
/// # Errors
///
/// Returns [`HashTableError::IndexOutOfRange`](crate::HashTableError::IndexOutOfRange)
/// if `primary` does not address a slot.
pub fn insert(
    table: &mut SlotTable,
    primary: i64,
    key: Key,
    hash_value: i64,
    strategy: CollisionStrategy,
) -> Result<InsertOutcome> {
    ResolverFactory::create(strategy).insert(table, primary, key, hash_value)
}

/// Searches a slot table for a key with the given strategy.
///
/// # Errors
///
/// Returns [`HashTableError::IndexOutOfRange`](crate::HashTableError::IndexOutOfRange)
/// if `primary` does not address a slot.
pub fn search(
    table: &SlotTable,
    primary: i64,
    key: &Key,
    strategy: CollisionStrategy,
) -> Result<SearchOutcome> {
    ResolverFactory::create(strategy).search(table, primary, key)
}
