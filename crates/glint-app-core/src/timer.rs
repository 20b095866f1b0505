// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame-rate timer: counts frames and reports once per interval.

use std::time::{Duration, Instant};

/// One frame-rate report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate {
    /// Frames counted in the window.
    pub frames: u64,
    /// Actual window length (at least the configured interval).
    pub elapsed: Duration,
}

impl FrameRate {
    /// Frames per second over the window.
    #[allow(clippy::cast_precision_loss)]
    pub fn fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

/// Counts [`FrameTimer::update`] calls and yields a [`FrameRate`] each time
/// `interval` has elapsed since the window opened.
///
/// Time is passed in by the caller so the frame loop (and tests) own the
/// clock.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    interval: Duration,
    window_start: Option<Instant>,
    frames: u64,
}

impl FrameTimer {
    /// Timer reporting every `interval`.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
            frames: 0,
        }
    }

    /// Open the first window at `now`.
    pub fn start(&mut self, now: Instant) {
        self.window_start = Some(now);
        self.frames = 0;
    }

    /// Whether [`FrameTimer::start`] has been called.
    pub const fn is_running(&self) -> bool {
        self.window_start.is_some()
    }

    /// Count one frame at `now`; returns a report when the window closes.
    ///
    /// Frames before [`FrameTimer::start`] are ignored.
    pub fn update(&mut self, now: Instant) -> Option<FrameRate> {
        let start = self.window_start?;
        self.frames += 1;
        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.interval {
            return None;
        }
        let report = FrameRate {
            frames: self.frames,
            elapsed,
        };
        self.window_start = Some(now);
        self.frames = 0;
        Some(report)
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}
