// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Viewer preferences shared by Glint scenes (camera, zoom, drag, lights and
//! the last committed orientation).

use serde::{Deserialize, Serialize};

/// Config key the preferences are stored under.
pub const PREFS_KEY: &str = "viewer_prefs";

/// Identity quaternion `(r, i, j, k)`, the orientation of a scene nobody has
/// dragged yet.
pub const IDENTITY_ORIENTATION: [f64; 4] = [1.0, 0.0, 0.0, 0.0];

/// Saved preferences for a viewer surface.
///
/// Every section defaults independently, so a file written by an older build
/// with fewer fields still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerPrefs {
    /// Camera pose and projection.
    pub camera: CameraPrefs,
    /// Wheel zoom limits.
    pub zoom: ZoomPrefs,
    /// Pointer drag tuning.
    pub drag: DragPrefs,
    /// Lighting toggles.
    pub lights: LightPrefs,
    /// Committed model rotation as a quaternion `(r, i, j, k)`.
    pub orientation: [f64; 4],
}

impl Default for ViewerPrefs {
    fn default() -> Self {
        Self {
            camera: CameraPrefs::default(),
            zoom: ZoomPrefs::default(),
            drag: DragPrefs::default(),
            lights: LightPrefs::default(),
            orientation: IDENTITY_ORIENTATION,
        }
    }
}

/// Camera position and projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPrefs {
    /// World-space camera position; the camera looks at the origin.
    pub position: [f64; 3],
    /// Vertical field of view (radians).
    pub field_of_view: f64,
}

impl Default for CameraPrefs {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 8.0],
            field_of_view: std::f64::consts::PI / 256.0,
        }
    }
}

/// Model scale range driven by the mouse wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomPrefs {
    /// Scale at startup.
    pub default_scale: f64,
    /// Smallest reachable scale.
    pub min_scale: f64,
    /// Largest reachable scale.
    pub max_scale: f64,
    /// Scale change per unit of wheel `delta_y`.
    pub wheel_sensitivity: f64,
}

impl Default for ZoomPrefs {
    fn default() -> Self {
        Self {
            default_scale: 1.0,
            min_scale: 0.2,
            max_scale: 50.0,
            wheel_sensitivity: 0.005,
        }
    }
}

/// Drag-to-rotate tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragPrefs {
    /// Radians of rotation per pixel of drag distance.
    pub sensitivity: f64,
    /// Interval between repeats while a pointer is held (milliseconds).
    pub repeat_interval_ms: u64,
}

impl Default for DragPrefs {
    fn default() -> Self {
        Self {
            sensitivity: 0.01,
            repeat_interval_ms: 25,
        }
    }
}

/// Lighting terms the shading uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightPrefs {
    /// Lambertian term.
    pub diffuse: bool,
    /// Constant ambient term.
    pub ambient: bool,
    /// Specular highlight.
    pub specular: bool,
}

impl Default for LightPrefs {
    fn default() -> Self {
        Self {
            diffuse: true,
            ambient: true,
            specular: true,
        }
    }
}
