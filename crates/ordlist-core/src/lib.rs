//! Ordlist Core
//!
//! Ordered list editing with a strict bounds contract.
//!
//! # Core Concepts
//!
//! - [`ListEditor`]: owned sequence with append, insert, remove, move and replace
//! - [`Snapshot`]: detached copy of a list's order
//! - [`KeyedList`]: list addressed by [`ItemKey`]s that are never reused
//! - [`TaskList`]: to-do list that rejects blank tasks
//! - [`ListError`]: caller errors, never silently clamped
//!
//! # Example
//!
//! ```rust
//! use ordlist_core::ListEditor;
//!
//! let mut list = ListEditor::from_items(["Learn", "Build", "Deploy"]);
//! list.move_down(0)?;
//! list.move_up(2)?;
//! list.remove_at(1)?;
//! assert_eq!(list.snapshot(), vec!["Build", "Learn"]);
//! # Ok::<(), ordlist_core::ListError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod editor;
pub mod error;
pub mod keyed;
pub mod records;
pub mod snapshot;
pub mod tasks;

// Re-exports
pub use config::{ConfigError, EditorConfig};
pub use editor::ListEditor;
pub use error::{ListError, ListResult};
pub use keyed::{ItemKey, KeyedList, ListItem};
pub use records::{Car, Fruit, SortOrder};
pub use snapshot::Snapshot;
pub use tasks::TaskList;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with ordered lists
    pub use crate::{
        EditorConfig, ItemKey, KeyedList, ListEditor, ListError, ListResult, Snapshot, TaskList,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
