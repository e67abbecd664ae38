//! Elapsed-time display

use std::time::Duration;

/// Render `elapsed` as `MM:SS:CC`
///
/// Minutes wrap at 60 and `CC` is hundredths of a second. Each field is
/// zero-padded to two digits.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1_000) % 60;
    let centis = (millis % 1_000) / 10;
    format!("{minutes:02}:{seconds:02}:{centis:02}")
}
