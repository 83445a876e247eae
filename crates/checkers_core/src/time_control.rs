//! Time control and search limits for the engine.
//!
//! The search polls the clock at every node; there is no preemption. Once the
//! budget is spent the stop flag latches and every later poll reports it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Search limits that control when the engine should stop searching.
///
/// `depth` is the nominal iterative-deepening ceiling (exclusive). In normal
/// play it is never reached and the time budget ends the search.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Iterative deepening runs depths `0..depth`
    pub depth: u16,
    /// Time controller for checking if search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u16) -> Self {
        Self {
            depth,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u16, move_time: Duration) -> Self {
        Self {
            depth,
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Create limits with only time constraint (nominal depth ceiling).
    pub fn time(move_time: Duration) -> Self {
        Self::depth_and_time(crate::config::DEFAULT_MAX_DEPTH, move_time)
    }

    /// Check if search should stop due to time limit.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the time control clock.
    pub fn start(&mut self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::time(Duration::from_millis(crate::config::DEFAULT_TIME_BUDGET_MS))
    }
}

/// Wall-clock budget tracker.
///
/// Clones share the stop flag, so a clone can be used to stop a search
/// from elsewhere.
#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Shared stop flag
    stopped: Arc<AtomicBool>,
    /// Reference instant the budget is measured from
    start_time: Option<Instant>,
    /// Time limit for this search (None = infinite)
    time_limit: Option<Duration>,
}

impl TimeControl {
    /// Create a new time controller.
    ///
    /// # Arguments
    /// * `time_limit` - Maximum time allowed for search (None = infinite)
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: None,
            time_limit,
        }
    }

    /// Record the reference instant and clear any previous stop.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Start the clock unless it is already running.
    pub fn ensure_started(&mut self) {
        if self.start_time.is_none() {
            self.start();
        }
    }

    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Fast atomic load of the stop flag.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// True once elapsed time strictly exceeds the budget (or after `stop`).
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && let Some(start) = self.start_time
            && start.elapsed() > limit
        {
            self.stop();
            return true;
        }

        false
    }

    /// Get elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
