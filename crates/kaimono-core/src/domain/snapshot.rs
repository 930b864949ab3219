//! In-memory list snapshot and its wire codec.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ListError;
use crate::domain::ids::ItemId;
use crate::domain::item::Item;

/// The complete ordered list of items at a point in time.
///
/// Insertion order is preserved and never re-sorted. Every save writes the
/// whole snapshot; every load replaces the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListSnapshot {
    items: Vec<Item>,
}

impl ListSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append to the end of the list.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Mark the matching item done. Returns whether a match was found
    /// (true even if the item was already done).
    pub fn mark_done(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.mark_done();
                true
            }
            None => false,
        }
    }

    /// Remove the first matching item.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Serialize the whole snapshot to the wire blob (JSON array of records).
    pub fn to_json(&self) -> Result<String, ListError> {
        serde_json::to_string(self).map_err(|source| ListError::CorruptState { source })
    }

    /// Parse a stored blob back into a snapshot.
    pub fn from_json(blob: &str) -> Result<Self, ListError> {
        serde_json::from_str(blob).map_err(|source| ListError::CorruptState { source })
    }
}
