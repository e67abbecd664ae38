//! To-do list
//!
//! A [`ListEditor`] of task text with an add-task guard: blank text is
//! rejected instead of producing empty rows.

use crate::config::EditorConfig;
use crate::editor::ListEditor;
use crate::error::{ListError, ListResult};
use crate::snapshot::Snapshot;

/// Ordered to-do list
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: ListEditor<String>,
    trim_text: bool,
}

impl TaskList {
    /// Create empty task list with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    /// Create empty task list from configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            tasks: ListEditor::with_config(config),
            trim_text: config.trim_text,
        }
    }

    /// Add a task at the end
    ///
    /// # Errors
    ///
    /// [`ListError::BlankItem`] if `text` is empty or whitespace only,
    /// [`ListError::CapacityExceeded`] if the list is full.
    pub fn add_task(&mut self, text: &str) -> ListResult<()> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::warn!("rejected blank task");
            return Err(ListError::BlankItem);
        }
        let stored = if self.trim_text { trimmed } else { text };
        self.tasks.append(stored.to_owned())
    }

    /// Delete the task at `index`
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn delete_task(&mut self, index: usize) -> ListResult<String> {
        self.tasks.remove_at(index)
    }

    /// Move the task at `index` one row up
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn move_task_up(&mut self, index: usize) -> ListResult<()> {
        self.tasks.move_up(index)
    }

    /// Move the task at `index` one row down
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn move_task_down(&mut self, index: usize) -> ListResult<()> {
        self.tasks.move_down(index)
    }

    /// Number of tasks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if there are no tasks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Underlying editor
    #[inline]
    #[must_use]
    pub fn editor(&self) -> &ListEditor<String> {
        &self.tasks
    }

    /// Copy of the tasks in order
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<String> {
        self.tasks.snapshot()
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_text() {
        let mut tasks = TaskList::new();
        assert_eq!(tasks.add_task(""), Err(ListError::BlankItem));
        assert_eq!(tasks.add_task("   \t"), Err(ListError::BlankItem));
        assert!(tasks.is_empty());
    }

    #[test]
    fn trims_by_default() {
        let mut tasks = TaskList::new();
        tasks.add_task("  Learn Rust ").unwrap();
        assert_eq!(tasks.snapshot(), vec!["Learn Rust".to_string()]);
    }

    #[test]
    fn keeps_text_when_trim_disabled() {
        let mut tasks = TaskList::with_config(&EditorConfig::new().with_trim_text(false));
        tasks.add_task(" padded ").unwrap();
        assert_eq!(tasks.snapshot(), vec![" padded ".to_string()]);
    }

    #[test]
    fn reorders_and_deletes() {
        let mut tasks = TaskList::new();
        for text in ["Eat", "Shower", "Walk"] {
            tasks.add_task(text).unwrap();
        }
        tasks.move_task_down(0).unwrap();
        tasks.move_task_up(2).unwrap();
        assert_eq!(tasks.delete_task(0), Ok("Shower".to_string()));
        assert_eq!(
            tasks.snapshot(),
            vec!["Walk".to_string(), "Eat".to_string()]
        );
    }

    #[test]
    fn unbounded_capacity_value_does_not_reserve() {
        let mut tasks = TaskList::with_config(&EditorConfig::new().with_capacity(usize::MAX));
        tasks.add_task("one").unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn respects_capacity() {
        let mut tasks = TaskList::with_config(&EditorConfig::new().with_capacity(1));
        tasks.add_task("one").unwrap();
        assert_eq!(
            tasks.add_task("two"),
            Err(ListError::CapacityExceeded { capacity: 1 })
        );
    }
}
