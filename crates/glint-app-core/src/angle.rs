// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Phase accumulator for animations that spin at a fixed rate.

use std::f64::consts::TAU;

/// Angle advancing by a fixed increment per update, kept within `(-2π, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    value: f64,
    increment: f64,
}

impl Angle {
    /// Starts at zero; `increment` may be negative.
    pub const fn new(increment: f64) -> Self {
        Self {
            value: 0.0,
            increment,
        }
    }

    /// Advance one step, wrapping by a full turn in either direction.
    pub fn update(&mut self) {
        self.value += self.increment;
        if TAU < self.value {
            self.value -= TAU;
        } else if self.value < -TAU {
            self.value += TAU;
        }
    }

    /// Current phase in radians.
    pub const fn get(&self) -> f64 {
        self.value
    }
}
