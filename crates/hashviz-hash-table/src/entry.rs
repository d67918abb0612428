//! Slot entries and the slot table used by the open-addressing strategies.

use hashviz_core::Key;
use serde::Serialize;

use crate::error::{HashTableError, Result};

/// One slot of a [`SlotTable`].
///
/// A slot is either free or holds exactly one key. Once occupied it never
/// becomes free again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    /// Position of this slot in the table.
    index: usize,
    /// The stored key, `None` while the slot is free.
    key: Option<Key>,
    /// Hash value originally computed for the stored key.
    hash_value: Option<i64>,
    /// Probe or chain steps taken to place the stored key.
    collisions: usize,
    /// Next slot of an internal chain.
    link: Option<usize>,
}

impl TableEntry {
    /// Creates a free slot at the given position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            key: None,
            hash_value: None,
            collisions: 0,
            link: None,
        }
    }

    /// Returns the position of this slot.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the stored key.
    #[inline]
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// Returns the hash value of the stored key.
    #[inline]
    pub fn hash_value(&self) -> Option<i64> {
        self.hash_value
    }

    /// Returns the number of collisions recorded for this slot.
    #[inline]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Returns the next slot of the internal chain this slot belongs to.
    #[inline]
    pub fn link(&self) -> Option<usize> {
        self.link
    }

    /// Returns `true` if the slot holds no key.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key.is_none()
    }

    /// Returns `true` if the slot holds `key`.
    #[inline]
    pub fn holds(&self, key: &Key) -> bool {
        self.key.as_ref() == Some(key)
    }

    pub(crate) fn occupy(&mut self, key: Key, hash_value: i64, collisions: usize) {
        debug_assert!(self.is_empty(), "slot {} is already occupied", self.index);
        self.key = Some(key);
        self.hash_value = Some(hash_value);
        self.collisions = collisions;
    }

    pub(crate) fn record_collision(&mut self) -> usize {
        self.collisions += 1;
        self.collisions
    }

    pub(crate) fn set_link(&mut self, next: usize) {
        self.link = Some(next);
    }
}

/// A fixed-capacity array of slots.
///
/// The table owns its entries; the collision resolvers mutate it in place.
/// A table is never resized. Building a new one is the only way to change
/// its capacity.
///
/// # Example
///
/// ```
/// use hashviz_hash_table::SlotTable;
///
/// let table = SlotTable::new(7).unwrap();
/// assert_eq!(table.capacity(), 7);
/// assert_eq!(table.occupied(), 0);
/// assert!(table.entries().iter().all(|e| e.is_empty()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlotTable {
    entries: Vec<TableEntry>,
}

impl SlotTable {
    /// Creates a table of `capacity` free slots.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(HashTableError::InvalidCapacity { capacity });
        }
        Ok(Self {
            entries: (0..capacity).map(TableEntry::new).collect(),
        })
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns all slots in index order.
    #[inline]
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Returns the slot at `index`, if it exists.
    pub fn entry(&self, index: usize) -> Option<&TableEntry> {
        self.entries.get(index)
    }

    /// Returns the number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_empty()).count()
    }

    /// Returns `true` if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.entries.iter().all(|e| !e.is_empty())
    }

    /// Returns the fraction of occupied slots.
    pub fn occupancy_rate(&self) -> f64 {
        self.occupied() as f64 / self.capacity() as f64
    }

    /// Scans the whole table for `key` and returns its slot.
    pub fn find_key(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|e| e.holds(key))
    }

    /// Converts a primary index into a slot position.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::IndexOutOfRange`] if the index is negative or
    /// not below the capacity.
    pub fn slot_index(&self, primary: i64) -> Result<usize> {
        usize::try_from(primary)
            .ok()
            .filter(|&index| index < self.capacity())
            .ok_or(HashTableError::IndexOutOfRange {
                index: primary,
                capacity: self.capacity(),
            })
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut TableEntry {
        &mut self.entries[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table() {
        let table = SlotTable::new(5).unwrap();
        assert_eq!(table.capacity(), 5);
        for (i, entry) in table.entries().iter().enumerate() {
            assert_eq!(entry.index(), i);
            assert!(entry.is_empty());
            assert_eq!(entry.hash_value(), None);
            assert_eq!(entry.collisions(), 0);
            assert_eq!(entry.link(), None);
        }
    }

    #[test]
    fn test_zero_capacity() {
        assert!(matches!(
            SlotTable::new(0),
            Err(HashTableError::InvalidCapacity { capacity: 0 })
        ));
    }

    #[test]
    fn test_occupy_and_find() {
        let mut table = SlotTable::new(7).unwrap();
        table.entry_mut(3).occupy(Key::Int(10), 3, 0);

        assert_eq!(table.find_key(&Key::Int(10)), Some(3));
        assert_eq!(table.find_key(&Key::Int(11)), None);
        assert_eq!(table.occupied(), 1);
        assert!(!table.is_full());
        assert!((table.occupancy_rate() - 1.0 / 7.0).abs() < f64::EPSILON);

        let entry = table.entry(3).unwrap();
        assert!(entry.holds(&Key::Int(10)));
        assert_eq!(entry.hash_value(), Some(3));
    }

    #[test]
    fn test_slot_index_bounds() {
        let table = SlotTable::new(7).unwrap();
        assert_eq!(table.slot_index(0).unwrap(), 0);
        assert_eq!(table.slot_index(6).unwrap(), 6);
        assert!(matches!(
            table.slot_index(7),
            Err(HashTableError::IndexOutOfRange { index: 7, capacity: 7 })
        ));
        assert!(matches!(
            table.slot_index(-2),
            Err(HashTableError::IndexOutOfRange { index: -2, .. })
        ));
    }

    #[test]
    fn test_record_collision_and_link() {
        let mut entry = TableEntry::new(2);
        entry.occupy(Key::from("Alpha"), 2, 0);
        assert_eq!(entry.record_collision(), 1);
        assert_eq!(entry.record_collision(), 2);
        entry.set_link(4);
        assert_eq!(entry.link(), Some(4));
    }

    #[test]
    fn test_serialize_entry() {
        let mut entry = TableEntry::new(1);
        entry.occupy(Key::Int(8), 1, 0);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "index": 1,
                "key": 8,
                "hashValue": 1,
                "collisions": 0,
                "link": null
            })
        );
    }
}
