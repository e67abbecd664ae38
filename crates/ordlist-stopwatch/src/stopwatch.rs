//! Start/stop/reset stopwatch
//!
//! The stopwatch never schedules anything; callers poll [`Stopwatch::elapsed`]
//! on their own refresh tick.

use crate::clock::{Clock, SystemClock};
use crate::format::format_elapsed;
use std::time::Duration;

/// Accumulating stopwatch over a [`Clock`]
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    accumulated: Duration,
    started_at: Option<Duration>,
}

impl Stopwatch<SystemClock> {
    /// Create stopped stopwatch on the system clock
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Create stopped stopwatch on `clock`
    #[inline]
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            accumulated: Duration::ZERO,
            started_at: None,
        }
    }

    /// Check if time is being counted
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Begin or resume counting; no effect while running
    ///
    /// Starting after [`stop`](Self::stop) continues from the accumulated
    /// time rather than from zero. Use [`reset`](Self::reset) to clear it.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
            tracing::debug!(accumulated_ms = self.accumulated.as_millis(), "stopwatch started");
        }
    }

    /// Pause counting, keeping the elapsed time
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += self.clock.now().saturating_sub(started_at);
            tracing::debug!(accumulated_ms = self.accumulated.as_millis(), "stopwatch stopped");
        }
    }

    /// Stop and clear the elapsed time
    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        tracing::debug!("stopwatch reset");
    }

    /// Total counted time
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let running = self
            .started_at
            .map_or(Duration::ZERO, |started_at| {
                self.clock.now().saturating_sub(started_at)
            });
        self.accumulated + running
    }

    /// Elapsed time as `MM:SS:CC`
    #[must_use]
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn stopwatch() -> (Stopwatch<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Stopwatch::with_clock(clock.clone()), clock)
    }

    #[test]
    fn starts_stopped_at_zero() {
        let (watch, _) = stopwatch();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(), Duration::ZERO);
        assert_eq!(watch.display(), "00:00:00");
    }

    #[test]
    fn counts_while_running() {
        let (mut watch, clock) = stopwatch();
        clock.advance(Duration::from_secs(5));
        watch.start();
        clock.advance(Duration::from_millis(1_230));
        assert_eq!(watch.elapsed(), Duration::from_millis(1_230));
        assert_eq!(watch.display(), "00:01:23");
    }

    #[test]
    fn stop_freezes_elapsed() {
        let (mut watch, clock) = stopwatch();
        watch.start();
        clock.advance(Duration::from_secs(2));
        watch.stop();
        clock.advance(Duration::from_secs(10));
        assert_eq!(watch.elapsed(), Duration::from_secs(2));
        assert!(!watch.is_running());
    }

    #[test]
    fn restart_resumes() {
        let (mut watch, clock) = stopwatch();
        watch.start();
        clock.advance(Duration::from_secs(2));
        watch.stop();
        clock.advance(Duration::from_secs(60));
        watch.start();
        clock.advance(Duration::from_secs(3));
        assert_eq!(watch.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn double_start_keeps_origin() {
        let (mut watch, clock) = stopwatch();
        watch.start();
        clock.advance(Duration::from_secs(1));
        watch.start();
        clock.advance(Duration::from_secs(1));
        assert_eq!(watch.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn reset_clears_and_stops() {
        let (mut watch, clock) = stopwatch();
        watch.start();
        clock.advance(Duration::from_secs(4));
        watch.reset();
        clock.advance(Duration::from_secs(4));
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn system_clock_default() {
        let watch: Stopwatch = Stopwatch::default();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(), Duration::ZERO);
    }
}
