//! Ordered list editor
//!
//! Structural edits over an owned sequence where position is meaningful
//! (display order, priority).
//!
//! # Bounds contract
//! - Operations that address an existing element require `index < len` and
//!   fail with [`ListError::IndexOutOfRange`] otherwise. Indices are never
//!   clamped.
//! - `move_up(0)` and `move_down(len - 1)` are boundary no-ops.
//! - A failed operation leaves the sequence untouched.

use crate::config::EditorConfig;
use crate::error::{ListError, ListResult};
use crate::snapshot::Snapshot;
use std::cmp::Ordering;

/// Owned ordered sequence with bounds-checked edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEditor<T> {
    items: Vec<T>,
    capacity: Option<usize>,
}

impl<T> ListEditor<T> {
    /// Create empty, unbounded editor
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    /// Create empty editor that holds at most `capacity` items
    #[inline]
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Create empty editor from configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: &EditorConfig) -> Self {
        match config.capacity {
            Some(capacity) => Self::bounded(capacity),
            None => Self::new(),
        }
    }

    /// Create unbounded editor holding an initial sequence
    #[inline]
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            capacity: None,
        }
    }

    /// Number of items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Configured maximum length
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Item at `index`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate items in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow items as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the editor, returning its items
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Add an item at the end
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if the editor is bounded and full.
    /// Unbounded editors always succeed.
    pub fn append(&mut self, item: T) -> ListResult<()> {
        self.check_room()?;
        self.items.push(item);
        tracing::debug!(len = self.items.len(), "appended item");
        Ok(())
    }

    /// Insert an item before position `index`
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index > len`,
    /// [`ListError::CapacityExceeded`] if the editor is full.
    pub fn insert_at(&mut self, index: usize, item: T) -> ListResult<()> {
        if index > self.items.len() {
            return Err(self.reject(index, "insert"));
        }
        self.check_room()?;
        self.items.insert(index, item);
        tracing::debug!(index, len = self.items.len(), "inserted item");
        Ok(())
    }

    /// Remove and return the item at `index`
    ///
    /// Later items shift down by one; relative order is preserved.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> ListResult<T> {
        self.check_index(index, "remove")?;
        let item = self.items.remove(index);
        tracing::debug!(index, len = self.items.len(), "removed item");
        Ok(item)
    }

    /// Swap the item at `index` with its predecessor
    ///
    /// The first item has no predecessor, so `move_up(0)` does nothing.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn move_up(&mut self, index: usize) -> ListResult<()> {
        self.check_index(index, "move_up")?;
        if index == 0 {
            return Ok(());
        }
        self.items.swap(index - 1, index);
        tracing::debug!(from = index, to = index - 1, "moved item up");
        Ok(())
    }

    /// Swap the item at `index` with its successor
    ///
    /// The last item has no successor, so `move_down(len - 1)` does nothing.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn move_down(&mut self, index: usize) -> ListResult<()> {
        self.check_index(index, "move_down")?;
        if index + 1 == self.items.len() {
            return Ok(());
        }
        self.items.swap(index, index + 1);
        tracing::debug!(from = index, to = index + 1, "moved item down");
        Ok(())
    }

    /// Overwrite the item at `index`, returning the previous one
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn replace_at(&mut self, index: usize, item: T) -> ListResult<T> {
        self.check_index(index, "replace")?;
        let previous = std::mem::replace(&mut self.items[index], item);
        tracing::debug!(index, "replaced item");
        Ok(previous)
    }

    /// Stable sort by a derived key
    pub fn sort_by_key<K: Ord>(&mut self, f: impl FnMut(&T) -> K) {
        self.items.sort_by_key(f);
        tracing::debug!(len = self.items.len(), "sorted items");
    }

    /// Stable sort with a comparator
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.items.sort_by(compare);
        tracing::debug!(len = self.items.len(), "sorted items");
    }

    /// Keep only items matching `keep`, returning how many were dropped
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(keep);
        let dropped = before - self.items.len();
        tracing::debug!(dropped, len = self.items.len(), "filtered items");
        dropped
    }

    fn check_index(&self, index: usize, op: &'static str) -> ListResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(self.reject(index, op))
        }
    }

    fn check_room(&self) -> ListResult<()> {
        match self.capacity {
            Some(capacity) if self.items.len() >= capacity => {
                tracing::warn!(capacity, "rejected insertion into full list");
                Err(ListError::CapacityExceeded { capacity })
            }
            _ => Ok(()),
        }
    }

    fn reject(&self, index: usize, op: &'static str) -> ListError {
        let len = self.items.len();
        tracing::warn!(op, index, len, "rejected out-of-range index");
        ListError::out_of_range(index, len)
    }
}

impl<T: Clone> ListEditor<T> {
    /// Copy of the current order
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(self.items.clone())
    }

    /// Copy of the items matching `keep`, without modifying the list
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(&T) -> bool) -> Snapshot<T> {
        Snapshot::new(self.items.iter().filter(|item| keep(item)).cloned().collect())
    }
}

impl<T> Default for ListEditor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ListEditor<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            capacity: None,
        }
    }
}

impl<T> FromIterator<T> for ListEditor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a, T> IntoIterator for &'a ListEditor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
