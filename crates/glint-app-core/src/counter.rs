// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Monotonic event counter.

/// Counts updates since creation or the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    /// New counter at zero.
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Increment by one.
    pub fn update(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Current count.
    pub const fn get(&self) -> u64 {
        self.count
    }
}
