//! Edit script replay
//!
//! Applies parsed commands to a [`ListEditor`] in order, collecting a
//! snapshot wherever the script asks for one. The first failing command stops
//! the replay; edits before it stay applied.

use crate::script::{parse_script, EditCommand, ScriptError, ScriptLine};
use ordlist_core::{EditorConfig, ListEditor, ListError, ListResult, Snapshot};
use serde::Serialize;
use std::fmt::Write as _;

/// List state captured by a `snapshot` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotReport {
    /// Script line of the `snapshot` command
    pub line: usize,
    /// Items at that point
    pub items: Snapshot<String>,
}

/// Outcome of a full replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replay {
    /// Snapshots in script order
    pub snapshots: Vec<SnapshotReport>,
    /// Items after the last command
    pub final_items: Snapshot<String>,
}

/// Replay errors
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// Script text is malformed
    #[error("parse error: {0}")]
    Parse(#[from] ScriptError),

    /// A command was rejected by the list
    #[error("line {line}: {source}")]
    Edit {
        /// 1-based line number
        line: usize,
        /// Rejection reason
        #[source]
        source: ListError,
    },
}

impl ReplayError {
    /// Line the error refers to
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Parse(err) => err.line,
            Self::Edit { line, .. } => *line,
        }
    }
}

/// Drives a string list through edit commands
#[derive(Debug, Clone)]
pub struct Replayer {
    list: ListEditor<String>,
    trim_text: bool,
}

impl Replayer {
    /// Create replayer over an empty list
    #[inline]
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            list: ListEditor::with_config(config),
            trim_text: config.trim_text,
        }
    }

    /// Current list
    #[inline]
    #[must_use]
    pub fn list(&self) -> &ListEditor<String> {
        &self.list
    }

    /// Apply one command
    ///
    /// `Snapshot` does not change the list. Item text is trimmed when the
    /// configuration asks for it and stored verbatim otherwise.
    ///
    /// # Errors
    ///
    /// [`ListError::BlankItem`] for whitespace-only text, otherwise whatever
    /// [`ListError`] the underlying edit reports.
    pub fn apply(&mut self, command: &EditCommand) -> ListResult<()> {
        match command {
            EditCommand::Append { text } => {
                let text = self.item_text(text)?;
                self.list.append(text)
            }
            EditCommand::Insert { index, text } => {
                let text = self.item_text(text)?;
                self.list.insert_at(*index, text)
            }
            EditCommand::Remove { index } => self.list.remove_at(*index).map(drop),
            EditCommand::Up { index } => self.list.move_up(*index),
            EditCommand::Down { index } => self.list.move_down(*index),
            EditCommand::Replace { index, text } => {
                let text = self.item_text(text)?;
                self.list.replace_at(*index, text).map(drop)
            }
            EditCommand::Sort => {
                self.list.sort_by(|a, b| a.cmp(b));
                Ok(())
            }
            EditCommand::SortDesc => {
                self.list.sort_by(|a, b| b.cmp(a));
                Ok(())
            }
            EditCommand::Snapshot => Ok(()),
        }
    }

    fn item_text(&self, text: &str) -> ListResult<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::warn!("rejected blank item text");
            return Err(ListError::BlankItem);
        }
        Ok(if self.trim_text { trimmed } else { text }.to_string())
    }

    /// Apply a parsed script
    ///
    /// # Errors
    ///
    /// [`ReplayError::Edit`] for the first rejected command.
    pub fn run(&mut self, script: &[ScriptLine]) -> Result<Replay, ReplayError> {
        let mut snapshots = Vec::new();

        for ScriptLine { line, command } in script {
            self.apply(command).map_err(|source| {
                tracing::error!(line, %source, "edit rejected");
                ReplayError::Edit {
                    line: *line,
                    source,
                }
            })?;

            if *command == EditCommand::Snapshot {
                snapshots.push(SnapshotReport {
                    line: *line,
                    items: self.list.snapshot(),
                });
            }
        }

        tracing::info!(
            commands = script.len(),
            snapshots = snapshots.len(),
            len = self.list.len(),
            "replay finished"
        );

        Ok(Replay {
            snapshots,
            final_items: self.list.snapshot(),
        })
    }
}

impl Default for Replayer {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

/// Parse and replay script text against a fresh list
///
/// # Errors
///
/// [`ReplayError::Parse`] for malformed text, [`ReplayError::Edit`] for a
/// rejected command.
pub fn replay_str(text: &str, config: &EditorConfig) -> Result<Replay, ReplayError> {
    let script = parse_script(text)?;
    Replayer::new(config).run(&script)
}

/// Numbered listing of items, one per line
#[must_use]
pub fn render_items(items: &[String]) -> String {
    if items.is_empty() {
        return "  (empty)\n".to_string();
    }

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "  {}. {item}", i + 1);
    }
    out
}
