//! Ordlist Stopwatch
//!
//! Elapsed-time tracking with an injectable [`Clock`] and `MM:SS:CC`
//! formatting.
//!
//! # Example
//!
//! ```rust
//! use ordlist_stopwatch::{ManualClock, Stopwatch};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut watch = Stopwatch::with_clock(clock.clone());
//! watch.start();
//! clock.advance(Duration::from_millis(61_500));
//! assert_eq!(watch.display(), "01:01:50");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod clock;
mod format;
mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::format_elapsed;
pub use stopwatch::Stopwatch;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
