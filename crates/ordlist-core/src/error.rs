//! Error types for ordered list editing
//!
//! Every variant describes a caller mistake:
//! - Index outside the current bounds
//! - Append past a configured capacity
//! - Blank task text
//! - Unknown item key

use crate::keyed::ItemKey;

/// Result alias for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Main list editing error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// Index does not address an existing element
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Length of the list at the time of the call
        len: usize,
    },

    /// List already holds `capacity` items
    #[error("list is full (capacity {capacity})")]
    CapacityExceeded {
        /// Configured maximum length
        capacity: usize,
    },

    /// Item text is empty after trimming
    #[error("item text is blank")]
    BlankItem,

    /// No item carries this key
    #[error("no item with key {0}")]
    KeyNotFound(ItemKey),
}

impl ListError {
    /// Create out-of-range error
    #[inline]
    #[must_use]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if error was caused by the caller's input
    ///
    /// Always true today: the editor has no runtime failure modes of its own.
    #[inline]
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. }
                | Self::CapacityExceeded { .. }
                | Self::BlankItem
                | Self::KeyNotFound(_)
        )
    }

    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message() {
        let err = ListError::out_of_range(3, 2);
        assert_eq!(err.to_string(), "index 3 out of range for list of length 2");
    }

    #[test]
    fn key_not_found_message() {
        let err = ListError::KeyNotFound(ItemKey::new(7));
        assert_eq!(err.to_string(), "no item with key #7");
    }

    #[test]
    fn all_errors_are_caller_errors() {
        let errors = [
            ListError::out_of_range(0, 0),
            ListError::CapacityExceeded { capacity: 1 },
            ListError::BlankItem,
            ListError::KeyNotFound(ItemKey::new(1)),
        ];

        for err in errors {
            assert!(err.is_caller_error());
            assert!(!err.is_retryable());
        }
    }
}
