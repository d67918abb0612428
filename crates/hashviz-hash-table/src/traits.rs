//! Core trait for collision resolution strategies.

use hashviz_core::{CollisionStrategy, Key};

use crate::entry::SlotTable;
use crate::outcome::{InsertOutcome, InsertStatus, SearchOutcome};
use crate::Result;

/// A trait defining how a strategy places and finds keys in a [`SlotTable`].
///
/// Implementors provide [`place`](CollisionResolver::place) and
/// [`probe`](CollisionResolver::probe), which work on an already validated
/// primary slot. Callers use [`insert`](CollisionResolver::insert) and
/// [`search`](CollisionResolver::search), which check the primary index and
/// apply the duplicate-key policy shared by every strategy.
///
/// # Example
///
/// ```
/// use hashviz_core::{CollisionStrategy, Key};
/// use hashviz_hash_table::{CollisionResolver, ResolverFactory, SlotTable};
///
/// let resolver = ResolverFactory::create(CollisionStrategy::Linear);
/// let mut table = SlotTable::new(7).unwrap();
///
/// resolver.insert(&mut table, 0, Key::Int(0), 0).unwrap();
/// let outcome = resolver.insert(&mut table, 0, Key::Int(7), 0).unwrap();
/// assert_eq!(outcome.stored_index(), Some(1));
///
/// let found = resolver.search(&table, 0, &Key::Int(7)).unwrap();
/// assert_eq!(found.index, Some(1));
/// ```
pub trait CollisionResolver: Send + Sync {
    /// Returns the strategy this resolver implements.
    fn strategy(&self) -> CollisionStrategy;

    /// Places a key whose primary slot is `primary`.
    ///
    /// The key is known not to be in the table and `primary` is known to be
    /// a valid slot.
    fn place(&self, table: &mut SlotTable, primary: usize, key: Key, hash_value: i64)
        -> InsertOutcome;

    /// Walks the strategy's search path for `key` from `primary`.
    ///
    /// `primary` is known to be a valid slot.
    fn probe(&self, table: &SlotTable, primary: usize, key: &Key) -> SearchOutcome;

    /// Inserts a key whose primary index is `primary`.
    ///
    /// If the key is already anywhere in the table the table is left
    /// untouched and a duplicate outcome is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::IndexOutOfRange`](crate::HashTableError::IndexOutOfRange)
    /// if `primary` does not address a slot.
    fn insert(
        &self,
        table: &mut SlotTable,
        primary: i64,
        key: Key,
        hash_value: i64,
    ) -> Result<InsertOutcome> {
        let primary = table.slot_index(primary)?;

        if let Some(index) = table.find_key(&key) {
            tracing::debug!(strategy = %self.strategy(), %key, index, "Duplicate key ignored");
            return Ok(InsertOutcome::duplicate(
                index,
                format!("Key {} already exists in the table (slot {})", key, index),
            ));
        }

        let outcome = self.place(table, primary, key, hash_value);
        match outcome.status {
            InsertStatus::Placed { index, collisions } => {
                tracing::debug!(strategy = %self.strategy(), primary, index, collisions, "Key placed");
            }
            InsertStatus::CollisionRecorded { index, collisions } => {
                tracing::debug!(strategy = %self.strategy(), index, collisions, "Collision recorded");
            }
            InsertStatus::Overflow => {
                tracing::info!(
                    strategy = %self.strategy(),
                    primary,
                    probes = outcome.probe_path.len(),
                    "Table overflow"
                );
            }
            InsertStatus::Duplicate { .. } => {}
        }
        Ok(outcome)
    }

    /// Searches for a key whose primary index is `primary`.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::IndexOutOfRange`](crate::HashTableError::IndexOutOfRange)
    /// if `primary` does not address a slot.
    fn search(&self, table: &SlotTable, primary: i64, key: &Key) -> Result<SearchOutcome> {
        let primary = table.slot_index(primary)?;
        let outcome = self.probe(table, primary, key);
        tracing::debug!(
            strategy = %self.strategy(),
            %key,
            found = outcome.is_found(),
            probes = outcome.probe_path.len(),
            "Search finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashTableError;

    // Stores every key at its primary slot and refuses collisions
    struct PrimaryOnly;

    impl CollisionResolver for PrimaryOnly {
        fn strategy(&self) -> CollisionStrategy {
            CollisionStrategy::Linear
        }

        fn place(
            &self,
            table: &mut SlotTable,
            primary: usize,
            key: Key,
            hash_value: i64,
        ) -> InsertOutcome {
            let entry = table.entry_mut(primary);
            if entry.is_empty() {
                entry.occupy(key, hash_value, 0);
                InsertOutcome::placed(primary, 0, vec![primary])
            } else {
                InsertOutcome::overflow(vec![primary], "taken".to_string())
            }
        }

        fn probe(&self, table: &SlotTable, primary: usize, key: &Key) -> SearchOutcome {
            match table.entry(primary) {
                Some(entry) if entry.holds(key) => SearchOutcome::found(primary, vec![primary]),
                _ => SearchOutcome::not_found(vec![primary], "missing".to_string()),
            }
        }
    }

    #[test]
    fn test_insert_checks_index() {
        let mut table = SlotTable::new(5).unwrap();
        let err = PrimaryOnly
            .insert(&mut table, 5, Key::Int(5), 5)
            .unwrap_err();
        assert!(matches!(err, HashTableError::IndexOutOfRange { index: 5, .. }));

        let err = PrimaryOnly.search(&table, -1, &Key::Int(5)).unwrap_err();
        assert!(matches!(err, HashTableError::IndexOutOfRange { index: -1, .. }));
    }

    #[test]
    fn test_duplicate_policy_scans_whole_table() {
        let mut table = SlotTable::new(5).unwrap();
        PrimaryOnly.insert(&mut table, 2, Key::Int(7), 2).unwrap();

        // Same key reported at a different primary index is still a duplicate
        let outcome = PrimaryOnly.insert(&mut table, 4, Key::Int(7), 4).unwrap();
        assert!(outcome.is_duplicate());
        assert_eq!(outcome.stored_index(), Some(2));
        assert!(outcome.message.unwrap().contains("already exists"));
        assert!(table.entry(4).unwrap().is_empty());
        assert_eq!(table.occupied(), 1);
    }

    #[test]
    fn test_search_delegates_to_probe() {
        let mut table = SlotTable::new(5).unwrap();
        PrimaryOnly.insert(&mut table, 1, Key::Int(6), 1).unwrap();
        assert_eq!(PrimaryOnly.search(&table, 1, &Key::Int(6)).unwrap().index, Some(1));
        assert!(!PrimaryOnly.search(&table, 1, &Key::Int(11)).unwrap().is_found());
    }
}
