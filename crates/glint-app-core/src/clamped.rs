// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Values confined to a range, either by clamping or by wrapping.

/// How out-of-range values are brought back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Saturate at the nearest limit.
    Clamp,
    /// Shift once by the range width (`max - min`).
    Periodic,
}

/// A scalar kept within `[min, max]`.
///
/// Periodic values are shifted by a single period, so an input more than one
/// period outside the range stays outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedValue {
    bounds: Bounds,
    min: f64,
    max: f64,
    value: f64,
}

impl ClampedValue {
    /// New value; `default` is brought into range immediately.
    pub fn new(bounds: Bounds, min: f64, max: f64, default: f64) -> Self {
        let mut v = Self {
            bounds,
            min,
            max,
            value: default,
        };
        v.update(default);
        v
    }

    /// Replace the value, then bring it into range.
    pub fn update(&mut self, new_value: f64) {
        self.value = match self.bounds {
            Bounds::Clamp => new_value.min(self.max).max(self.min),
            Bounds::Periodic => {
                let period = self.max - self.min;
                if new_value < self.min {
                    new_value + period
                } else if self.max < new_value {
                    new_value - period
                } else {
                    new_value
                }
            }
        };
    }

    /// Current value.
    pub const fn get(&self) -> f64 {
        self.value
    }

    /// Lower limit.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper limit.
    pub const fn max(&self) -> f64 {
        self.max
    }
}
