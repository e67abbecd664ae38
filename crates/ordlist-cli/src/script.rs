//! Edit script parsing
//!
//! One command per line. Blank lines and `#` comments are skipped. Item
//! text is everything after the single space that follows the command word
//! (or the index), kept verbatim; trimming is left to the replayer.
//!
//! ```text
//! append <text>
//! insert <index> <text>
//! remove <index>
//! up <index>
//! down <index>
//! replace <index> <text>
//! sort
//! sort-desc
//! snapshot
//! ```

use std::str::FromStr;

/// Single edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Add text at the end
    Append {
        /// Item text
        text: String,
    },
    /// Insert text before an index
    Insert {
        /// Target position
        index: usize,
        /// Item text
        text: String,
    },
    /// Remove the item at an index
    Remove {
        /// Target position
        index: usize,
    },
    /// Move an item one position up
    Up {
        /// Target position
        index: usize,
    },
    /// Move an item one position down
    Down {
        /// Target position
        index: usize,
    },
    /// Overwrite the item at an index
    Replace {
        /// Target position
        index: usize,
        /// Item text
        text: String,
    },
    /// Sort ascending
    Sort,
    /// Sort descending
    SortDesc,
    /// Emit the current order
    Snapshot,
}

/// Command plus the line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number
    pub line: usize,
    /// Parsed command
    pub command: EditCommand,
}

/// Script parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// First word is not a known command
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// Command needs more arguments
    #[error("`{command}` expects {expected}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// Description of the missing argument
        expected: &'static str,
    },

    /// Index is not a non-negative integer
    #[error("invalid index `{0}`")]
    InvalidIndex(String),

    /// Command takes no arguments but got some
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
}

/// Parse error with its line number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    /// What went wrong
    #[source]
    pub source: ParseError,
}

impl FromStr for EditCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = split_word(line);

        match word {
            "append" => Ok(Self::Append {
                text: require_text("append", rest)?,
            }),
            "insert" => {
                let (index, text) = split_word(rest);
                Ok(Self::Insert {
                    index: parse_index("insert", index)?,
                    text: require_text("insert", text)?,
                })
            }
            "remove" => Ok(Self::Remove {
                index: parse_only_index("remove", rest)?,
            }),
            "up" => Ok(Self::Up {
                index: parse_only_index("up", rest)?,
            }),
            "down" => Ok(Self::Down {
                index: parse_only_index("down", rest)?,
            }),
            "replace" => {
                let (index, text) = split_word(rest);
                Ok(Self::Replace {
                    index: parse_index("replace", index)?,
                    text: require_text("replace", text)?,
                })
            }
            "sort" => no_arguments("sort", rest, Self::Sort),
            "sort-desc" => no_arguments("sort-desc", rest, Self::SortDesc),
            "snapshot" => no_arguments("snapshot", rest, Self::Snapshot),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Parse a whole script
///
/// # Errors
///
/// Returns the first [`ScriptError`] encountered.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line = i + 1;
        let command = raw
            .trim_start()
            .parse()
            .map_err(|source| ScriptError { line, source })?;
        lines.push(ScriptLine { line, command });
    }

    tracing::debug!(commands = lines.len(), "parsed edit script");
    Ok(lines)
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((at, sep)) => (&text[..at], &text[at + sep.len_utf8()..]),
        None => (text, ""),
    }
}

fn require_text(command: &'static str, text: &str) -> Result<String, ParseError> {
    if text.trim().is_empty() {
        Err(ParseError::MissingArgument {
            command,
            expected: "item text",
        })
    } else {
        Ok(text.to_string())
    }
}

fn parse_index(command: &'static str, word: &str) -> Result<usize, ParseError> {
    if word.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            expected: "an index",
        });
    }
    word.parse()
        .map_err(|_| ParseError::InvalidIndex(word.to_string()))
}

fn parse_only_index(command: &'static str, rest: &str) -> Result<usize, ParseError> {
    let (word, extra) = split_word(rest);
    if !extra.trim().is_empty() {
        return Err(ParseError::UnexpectedArgument(command));
    }
    parse_index(command, word)
}

fn no_arguments(
    command: &'static str,
    rest: &str,
    parsed: EditCommand,
) -> Result<EditCommand, ParseError> {
    if rest.trim().is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::UnexpectedArgument(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_command() {
        assert_eq!(
            "append Learn Rust".parse::<EditCommand>(),
            Ok(EditCommand::Append {
                text: "Learn Rust".into()
            })
        );
        assert_eq!(
            "insert 2   Ship it ".parse::<EditCommand>(),
            Ok(EditCommand::Insert {
                index: 2,
                text: "  Ship it ".into()
            })
        );
        assert_eq!("remove 0".parse::<EditCommand>(), Ok(EditCommand::Remove { index: 0 }));
        assert_eq!("up 3".parse::<EditCommand>(), Ok(EditCommand::Up { index: 3 }));
        assert_eq!("down 1".parse::<EditCommand>(), Ok(EditCommand::Down { index: 1 }));
        assert_eq!(
            "replace 1 Deploy".parse::<EditCommand>(),
            Ok(EditCommand::Replace {
                index: 1,
                text: "Deploy".into()
            })
        );
        assert_eq!("sort".parse::<EditCommand>(), Ok(EditCommand::Sort));
        assert_eq!("sort-desc".parse::<EditCommand>(), Ok(EditCommand::SortDesc));
        assert_eq!("snapshot".parse::<EditCommand>(), Ok(EditCommand::Snapshot));
    }

    #[test]
    fn keeps_item_text_verbatim() {
        assert_eq!(
            "append   padded  ".parse::<EditCommand>(),
            Ok(EditCommand::Append {
                text: "  padded  ".into()
            })
        );
        assert_eq!("remove 0  ".parse::<EditCommand>(), Ok(EditCommand::Remove { index: 0 }));
        assert_eq!("snapshot \t".parse::<EditCommand>(), Ok(EditCommand::Snapshot));
        assert!(matches!(
            "append    ".parse::<EditCommand>(),
            Err(ParseError::MissingArgument { command: "append", .. })
        ));
    }

    #[test]
    fn negative_index_is_invalid() {
        assert_eq!(
            "remove -1".parse::<EditCommand>(),
            Err(ParseError::InvalidIndex("-1".into()))
        );
    }

    #[test]
    fn missing_arguments() {
        assert!(matches!(
            "append".parse::<EditCommand>(),
            Err(ParseError::MissingArgument { command: "append", .. })
        ));
        assert!(matches!(
            "insert 1".parse::<EditCommand>(),
            Err(ParseError::MissingArgument { command: "insert", .. })
        ));
        assert!(matches!(
            "up".parse::<EditCommand>(),
            Err(ParseError::MissingArgument { command: "up", .. })
        ));
    }

    #[test]
    fn rejects_extra_arguments() {
        assert_eq!(
            "snapshot now".parse::<EditCommand>(),
            Err(ParseError::UnexpectedArgument("snapshot"))
        );
        assert_eq!(
            "remove 1 2".parse::<EditCommand>(),
            Err(ParseError::UnexpectedArgument("remove"))
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            "shuffle".parse::<EditCommand>(),
            Err(ParseError::UnknownCommand("shuffle".into()))
        );
    }

    #[test]
    fn script_skips_comments_and_blanks() {
        let script = "# setup\nappend A\n\n   \nappend B\nsnapshot\n";
        let lines = parse_script(script).unwrap();
        let numbers: Vec<usize> = lines.iter().map(|l| l.line).collect();
        assert_eq!(numbers, vec![2, 5, 6]);
    }

    #[test]
    fn script_error_carries_line() {
        let err = parse_script("append A\nbogus\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(), "line 2: unknown command `bogus`");
    }
}
