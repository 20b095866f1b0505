// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed camera looking at the origin.

use glint_app_core::prefs::CameraPrefs;
use glint_math::{Mat4, MathError, Vec3};
use std::f64::consts::PI;

/// Camera at `position`, always aimed at the world origin.
///
/// The clip planes follow the camera: `near = |position|` and
/// `far = 2 |position|`, so the origin sits exactly on the near plane and the
/// narrow field of view does the framing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// World-space position.
    pub position: Vec3,
    /// Vertical field of view (radians).
    pub field_of_view: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 8.0),
            field_of_view: PI / 256.0,
        }
    }
}

impl Camera {
    /// Camera from saved preferences.
    pub fn from_prefs(prefs: &CameraPrefs) -> Self {
        Self {
            position: Vec3::from(prefs.position),
            field_of_view: prefs.field_of_view,
        }
    }

    /// View matrix: translate the world by `-position`.
    pub fn view(&self) -> Mat4 {
        Mat4::translate(-self.position)
    }

    /// Perspective projection for a viewport of the given aspect ratio.
    pub fn projection(&self, aspect_ratio: f64) -> Mat4 {
        let distance = self.position.norm();
        Mat4::perspective(self.field_of_view, aspect_ratio, distance, 2.0 * distance)
    }

    /// Unit direction from the camera towards the origin.
    pub fn line_of_sight(&self) -> Result<Vec3, MathError> {
        Ok(-self.position.normalize()?)
    }
}
