// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hold-to-repeat: an action that fires on press and then at a fixed cadence
//! until the pointer is released or leaves the element.

use std::time::{Duration, Instant};

/// Default spacing between repeats.
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(25);

/// Schedules repeats for a held pointer; the caller runs the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldRepeater {
    interval: Duration,
    next_fire: Option<Instant>,
}

impl HoldRepeater {
    /// Repeater firing every `interval` while held.
    ///
    /// A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_fire: None,
        }
    }

    /// Pointer went down at `now`. Returns `true` when the action should fire
    /// immediately; a press while already held starts nothing new.
    pub fn press(&mut self, now: Instant) -> bool {
        if self.next_fire.is_some() {
            return false;
        }
        self.next_fire = Some(now + self.interval);
        true
    }

    /// Number of repeats due at `now` (zero when not held).
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_fire else {
            return 0;
        };
        let mut due = 0;
        while next <= now {
            due += 1;
            next += self.interval;
        }
        self.next_fire = Some(next);
        due
    }

    /// Pointer released or left the element.
    pub fn release(&mut self) {
        self.next_fire = None;
    }

    /// Whether the pointer is held.
    pub const fn is_held(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Spacing between repeats.
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for HoldRepeater {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_press_then_per_interval() {
        let t0 = Instant::now();
        let mut r = HoldRepeater::default();
        assert!(r.press(t0));
        assert_eq!(r.poll(t0 + Duration::from_millis(10)), 0);
        assert_eq!(r.poll(t0 + Duration::from_millis(25)), 1);
        assert_eq!(r.poll(t0 + Duration::from_millis(110)), 3);
        assert_eq!(r.poll(t0 + Duration::from_millis(120)), 0);
    }

    #[test]
    fn second_press_does_not_restart() {
        let t0 = Instant::now();
        let mut r = HoldRepeater::default();
        assert!(r.press(t0));
        assert!(!r.press(t0 + Duration::from_millis(5)));
        r.release();
        assert!(!r.is_held());
        assert_eq!(r.poll(t0 + Duration::from_secs(1)), 0);
        assert!(r.press(t0 + Duration::from_secs(1)));
    }
}
