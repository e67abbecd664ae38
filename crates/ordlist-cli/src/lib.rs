//! Ordlist CLI
//!
//! Stands in for the interactive front end: replays edit scripts against an
//! ordered list and prints the snapshots they request.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod logging;
pub mod replay;
pub mod script;

pub use replay::{render_items, replay_str, Replay, ReplayError, Replayer, SnapshotReport};
pub use script::{parse_script, EditCommand, ParseError, ScriptError, ScriptLine};

/// Script for the built-in walkthrough
pub const DEMO_SCRIPT: &str = "\
# starting order
append Learn
append Build
append Deploy
snapshot
down 0
snapshot
up 2
snapshot
remove 1
snapshot
";
