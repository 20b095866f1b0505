// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use glint_app_core::clamped::{Bounds, ClampedValue};
use glint_app_core::prefs::ZoomPrefs;

/// Wheel-driven model scale, saturating at the configured limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomController {
    scale: ClampedValue,
    sensitivity: f64,
}

impl ZoomController {
    /// Controller seeded from viewer prefs.
    pub fn from_prefs(prefs: &ZoomPrefs) -> Self {
        Self {
            scale: ClampedValue::new(
                Bounds::Clamp,
                prefs.min_scale,
                prefs.max_scale,
                prefs.default_scale,
            ),
            sensitivity: prefs.wheel_sensitivity,
        }
    }

    /// Apply a wheel event; positive `delta_y` (scrolling down) shrinks.
    pub fn wheel(&mut self, delta_y: f64) {
        self.scale
            .update(self.scale.get() - delta_y * self.sensitivity);
    }

    /// Current uniform model scale.
    pub const fn scale(&self) -> f64 {
        self.scale.get()
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::from_prefs(&ZoomPrefs::default())
    }
}
