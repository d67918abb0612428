//! External chaining store.
//!
//! A fixed array of slot heads, each owning a singly linked chain of nodes.
//! This is the structure behind chain visualization: unlike the slot-table
//! [`ChainModel`](crate::ChainModel), every inserted key is kept.

use hashviz_core::Key;

use crate::chain_view::ChainEntry;
use crate::error::{HashTableError, Result};
use crate::hash_functions::{division_method, polynomial_method};

#[derive(Debug)]
struct ChainNode<V> {
    key: Key,
    data: V,
    next: Option<Box<ChainNode<V>>>,
}

/// Result of [`ChainStore::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainInsert {
    /// A new node was appended at `position` of the chain at `index`.
    Inserted {
        /// Slot of the chain.
        index: usize,
        /// Zero-based position of the node in the chain.
        position: usize,
    },
    /// The key existed; its data was replaced in place.
    Updated {
        /// Slot of the chain.
        index: usize,
        /// Zero-based position of the node in the chain.
        position: usize,
    },
    /// The store already holds `capacity` elements.
    Overflow,
}

impl ChainInsert {
    /// Returns `true` unless the store refused the insert.
    pub fn success(&self) -> bool {
        !matches!(self, ChainInsert::Overflow)
    }

    /// Returns `true` if a new node was created.
    pub fn is_new_element(&self) -> bool {
        matches!(self, ChainInsert::Inserted { .. })
    }
}

/// A key found in a [`ChainStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainHit<'a, V> {
    /// Slot of the chain holding the key.
    pub index: usize,
    /// Zero-based position of the node in the chain.
    pub position: usize,
    /// Data stored with the key.
    pub data: &'a V,
}

/// A capacity-bounded array of singly linked chains.
///
/// Integer keys are hashed with the division method and string keys with the
/// polynomial method, whatever hash method the surrounding table uses.
/// Individual chains are unbounded; the store as a whole refuses new inserts
/// once it holds `capacity` elements.
///
/// # Example
///
/// ```
/// use hashviz_core::Key;
/// use hashviz_hash_table::ChainStore;
///
/// let mut store = ChainStore::new(7).unwrap();
/// store.insert(Key::Int(7), "seven").unwrap();
/// store.insert(Key::Int(14), "fourteen").unwrap();
///
/// assert_eq!(store.search(&Key::Int(14)).unwrap(), Some(&"fourteen"));
/// let chains = store.chain_entries(Some(&Key::Int(14)));
/// assert_eq!(chains.len(), 1);
/// assert_eq!(chains[0].index, 0);
/// ```
#[derive(Debug)]
pub struct ChainStore<V> {
    heads: Vec<Option<Box<ChainNode<V>>>>,
    elements_count: usize,
}

impl<V> ChainStore<V> {
    /// Creates a store with `capacity` empty chains.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(HashTableError::InvalidCapacity { capacity });
        }
        let mut heads = Vec::with_capacity(capacity);
        heads.resize_with(capacity, || None);
        Ok(Self {
            heads,
            elements_count: 0,
        })
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heads.len()
    }

    /// Returns the number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements_count
    }

    /// Returns `true` if no element is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements_count == 0
    }

    /// Returns `true` once the store holds `capacity` elements.
    pub fn is_overflowed(&self) -> bool {
        self.elements_count >= self.capacity()
    }

    /// Returns `elements / capacity`.
    pub fn occupancy_rate(&self) -> f64 {
        self.elements_count as f64 / self.capacity() as f64
    }

    /// Returns the slot a key hashes to.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::IndexOutOfRange`] for integer keys whose
    /// division hash is negative.
    pub fn slot_for(&self, key: &Key) -> Result<usize> {
        let capacity = self.capacity();
        let index = match key {
            Key::Int(_) => division_method(key, capacity)?,
            Key::Str(text) => polynomial_method(text, capacity)? as i64,
        };
        usize::try_from(index)
            .ok()
            .filter(|&i| i < capacity)
            .ok_or(HashTableError::IndexOutOfRange { index, capacity })
    }

    /// Inserts a key, or replaces the data of an existing key.
    ///
    /// New keys are appended at the tail of their chain. Once the store is
    /// overflowed every insert is refused, including updates.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::IndexOutOfRange`] if the key hashes outside
    /// the table.
    pub fn insert(&mut self, key: Key, data: V) -> Result<ChainInsert> {
        if self.is_overflowed() {
            tracing::info!(
                %key,
                elements = self.elements_count,
                capacity = self.capacity(),
                "Chain store overflowed, insert refused"
            );
            return Ok(ChainInsert::Overflow);
        }

        let index = self.slot_for(&key)?;
        let mut position = 0;
        let mut cursor = &mut self.heads[index];
        while let Some(node) = cursor {
            if node.key == key {
                node.data = data;
                tracing::debug!(%key, index, position, "Chain node updated");
                return Ok(ChainInsert::Updated { index, position });
            }
            cursor = &mut node.next;
            position += 1;
        }

        tracing::debug!(%key, index, position, "Chain node appended");
        *cursor = Some(Box::new(ChainNode {
            key,
            data,
            next: None,
        }));
        self.elements_count += 1;
        Ok(ChainInsert::Inserted { index, position })
    }

    /// Finds a key and reports where it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::IndexOutOfRange`] if the key hashes outside
    /// the table.
    pub fn find(&self, key: &Key) -> Result<Option<ChainHit<'_, V>>> {
        let index = self.slot_for(key)?;
        let hit = self
            .chain(index)
            .enumerate()
            .find(|(_, (node_key, _))| *node_key == key)
            .map(|(position, (_, data))| ChainHit {
                index,
                position,
                data,
            });
        Ok(hit)
    }

    /// Returns the data stored with a key.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::IndexOutOfRange`] if the key hashes outside
    /// the table.
    pub fn search(&self, key: &Key) -> Result<Option<&V>> {
        Ok(self.find(key)?.map(|hit| hit.data))
    }

    /// Returns `true` if the key is stored.
    pub fn contains(&self, key: &Key) -> bool {
        matches!(self.find(key), Ok(Some(_)))
    }

    /// Iterates over the chain at `index` from head to tail.
    ///
    /// An out-of-range index yields an empty iterator.
    pub fn chain(&self, index: usize) -> Chain<'_, V> {
        Chain {
            current: self.heads.get(index).and_then(|head| head.as_deref()),
        }
    }

    /// Builds a view of every non-empty chain, marking nodes whose key equals
    /// `highlight`.
    pub fn chain_entries(&self, highlight: Option<&Key>) -> Vec<ChainEntry> {
        (0..self.capacity())
            .filter_map(|index| {
                ChainEntry::from_keys(index, self.chain(index).map(|(key, _)| key), highlight)
            })
            .collect()
    }
}

impl<V> Drop for ChainStore<V> {
    fn drop(&mut self) {
        for head in &mut self.heads {
            let mut current = head.take();
            while let Some(mut node) = current {
                current = node.next.take();
            }
        }
    }
}

/// Iterator over one chain of a [`ChainStore`].
pub struct Chain<'a, V> {
    current: Option<&'a ChainNode<V>>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            (&node.key, &node.data)
        })
    }
}
