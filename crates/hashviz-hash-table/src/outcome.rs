//! Results of insert and search operations.
//!
//! Overflow, duplicate keys and misses are ordinary outcomes, not errors.
//! Every outcome carries the probe path (the slots visited, in order) and an
//! optional human-readable message for the presentation layer.

use serde::Serialize;

/// What an insert did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InsertStatus {
    /// The key was stored at `index` after `collisions` probe or chain steps.
    Placed {
        /// Slot the key was stored in.
        index: usize,
        /// Steps taken to find the slot.
        collisions: usize,
    },
    /// The key was already present; nothing changed.
    Duplicate {
        /// Slot that holds the existing key.
        index: usize,
    },
    /// The primary slot was taken and only its collision counter moved.
    /// The key was not stored.
    CollisionRecorded {
        /// The primary slot.
        index: usize,
        /// Collision counter of the primary slot after the insert.
        collisions: usize,
    },
    /// No slot could be found within the strategy's bound.
    Overflow,
}

/// Outcome of an insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    /// What happened.
    pub status: InsertStatus,
    /// Slots visited, starting with the primary index.
    pub probe_path: Vec<usize>,
    /// Message for the user, if any.
    pub message: Option<String>,
}

impl InsertOutcome {
    pub(crate) fn placed(index: usize, collisions: usize, probe_path: Vec<usize>) -> Self {
        Self {
            status: InsertStatus::Placed { index, collisions },
            probe_path,
            message: None,
        }
    }

    pub(crate) fn duplicate(index: usize, message: String) -> Self {
        Self {
            status: InsertStatus::Duplicate { index },
            probe_path: vec![index],
            message: Some(message),
        }
    }

    pub(crate) fn overflow(probe_path: Vec<usize>, message: String) -> Self {
        Self {
            status: InsertStatus::Overflow,
            probe_path,
            message: Some(message),
        }
    }

    /// Returns `true` if the insert overflowed.
    pub fn is_overflow(&self) -> bool {
        matches!(self.status, InsertStatus::Overflow)
    }

    /// Returns `true` unless the insert overflowed.
    pub fn is_success(&self) -> bool {
        !self.is_overflow()
    }

    /// Returns `true` if the key was already present.
    pub fn is_duplicate(&self) -> bool {
        matches!(self.status, InsertStatus::Duplicate { .. })
    }

    /// Returns the slot now holding the key, if the key is stored.
    pub fn stored_index(&self) -> Option<usize> {
        match self.status {
            InsertStatus::Placed { index, .. } | InsertStatus::Duplicate { index } => Some(index),
            InsertStatus::CollisionRecorded { .. } | InsertStatus::Overflow => None,
        }
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Slot holding the key, `None` if not found.
    pub index: Option<usize>,
    /// Slots visited, starting with the primary index.
    pub probe_path: Vec<usize>,
    /// Message for the user, if any.
    pub message: Option<String>,
}

impl SearchOutcome {
    pub(crate) fn found(index: usize, probe_path: Vec<usize>) -> Self {
        Self {
            index: Some(index),
            probe_path,
            message: None,
        }
    }

    pub(crate) fn not_found(probe_path: Vec<usize>, message: String) -> Self {
        Self {
            index: None,
            probe_path,
            message: Some(message),
        }
    }

    /// Returns `true` if the key was found.
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}
