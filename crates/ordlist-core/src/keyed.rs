//! Keyed ordered lists
//!
//! Each item carries an [`ItemKey`] allocated by the list. Keys increase
//! monotonically and are never handed out twice by the same list, even after
//! the item holding one is removed.

use crate::editor::ListEditor;
use crate::error::{ListError, ListResult};
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an item within one [`KeyedList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(u64);

impl ItemKey {
    /// Create key from raw value
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Key plus payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem<P> {
    /// Identifying key
    pub key: ItemKey,
    /// Free-form payload
    pub payload: P,
}

/// Ordered list addressed by stable keys
#[derive(Debug, Clone)]
pub struct KeyedList<P> {
    editor: ListEditor<ListItem<P>>,
    next_key: u64,
}

impl<P> KeyedList<P> {
    /// Create empty keyed list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor: ListEditor::new(),
            next_key: 1,
        }
    }

    /// Create empty keyed list holding at most `capacity` items
    #[inline]
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            editor: ListEditor::bounded(capacity),
            next_key: 1,
        }
    }

    /// Underlying index-addressed editor
    #[inline]
    #[must_use]
    pub fn editor(&self) -> &ListEditor<ListItem<P>> {
        &self.editor
    }

    /// Number of items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.editor.len()
    }

    /// Check if the list has no items
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.editor.is_empty()
    }

    /// Append a payload, returning its new key
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if the list is bounded and full. No key
    /// is consumed on failure.
    pub fn push(&mut self, payload: P) -> ListResult<ItemKey> {
        let key = ItemKey(self.next_key);
        self.editor.append(ListItem { key, payload })?;
        self.next_key += 1;
        Ok(key)
    }

    /// Current position of `key`
    #[must_use]
    pub fn position(&self, key: ItemKey) -> Option<usize> {
        self.editor.iter().position(|item| item.key == key)
    }

    /// Payload stored under `key`
    #[must_use]
    pub fn get(&self, key: ItemKey) -> Option<&P> {
        self.editor
            .iter()
            .find(|item| item.key == key)
            .map(|item| &item.payload)
    }

    /// Remove the item under `key`, returning its payload
    ///
    /// # Errors
    ///
    /// [`ListError::KeyNotFound`] if no item carries `key`.
    pub fn remove(&mut self, key: ItemKey) -> ListResult<P> {
        let index = self.require(key)?;
        Ok(self.editor.remove_at(index)?.payload)
    }

    /// Move the item under `key` one position towards the front
    ///
    /// # Errors
    ///
    /// [`ListError::KeyNotFound`] if no item carries `key`.
    pub fn move_up(&mut self, key: ItemKey) -> ListResult<()> {
        let index = self.require(key)?;
        self.editor.move_up(index)
    }

    /// Move the item under `key` one position towards the back
    ///
    /// # Errors
    ///
    /// [`ListError::KeyNotFound`] if no item carries `key`.
    pub fn move_down(&mut self, key: ItemKey) -> ListResult<()> {
        let index = self.require(key)?;
        self.editor.move_down(index)
    }

    /// Swap in a new payload under the same key and position
    ///
    /// # Errors
    ///
    /// [`ListError::KeyNotFound`] if no item carries `key`.
    pub fn replace(&mut self, key: ItemKey, payload: P) -> ListResult<P> {
        let index = self.require(key)?;
        Ok(self.editor.replace_at(index, ListItem { key, payload })?.payload)
    }

    /// Stable sort of items by a key derived from the payload
    pub fn sort_by_key<K: Ord>(&mut self, mut f: impl FnMut(&P) -> K) {
        self.editor.sort_by_key(|item| f(&item.payload));
    }

    fn require(&self, key: ItemKey) -> ListResult<usize> {
        self.position(key).ok_or_else(|| {
            tracing::warn!(%key, "rejected unknown key");
            ListError::KeyNotFound(key)
        })
    }
}

impl<P: Clone> KeyedList<P> {
    /// Copy of the current order, keys included
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<ListItem<P>> {
        self.editor.snapshot()
    }

    /// Copy of the payloads in order
    #[must_use]
    pub fn payloads(&self) -> Snapshot<P> {
        Snapshot::new(self.editor.iter().map(|item| item.payload.clone()).collect())
    }
}

impl<P> Default for KeyedList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FromIterator<P> for KeyedList<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut next_key = 1;
        let items: Vec<_> = iter
            .into_iter()
            .map(|payload| {
                let key = ItemKey(next_key);
                next_key += 1;
                ListItem { key, payload }
            })
            .collect();
        Self {
            editor: ListEditor::from(items),
            next_key,
        }
    }
}
