// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame uniform values.

use glint_app_core::prefs::LightPrefs;
use glint_math::{Mat4, UniformMat4, Vec3};

use crate::{model_matrix, Camera, SceneError};

/// Unnormalised direction of the diffuse light.
pub const DIFFUSE_LIGHT_DIRECTION: [f64; 3] = [2.0, 2.0, -1.0];

/// RGBA of the ambient term.
pub const AMBIENT_LIGHT_COLOR: [f32; 4] = [0.05, 0.05, 0.05, 0.0];

/// Which lighting terms the shader evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightToggles {
    /// Lambertian term.
    pub diffuse: bool,
    /// Constant ambient term.
    pub ambient: bool,
    /// Specular highlight.
    pub specular: bool,
}

impl LightToggles {
    /// `(diffuse, ambient, specular)` as the `0`/`1` integers the shader
    /// reads.
    pub fn as_uniforms(&self) -> [i32; 3] {
        [
            i32::from(self.diffuse),
            i32::from(self.ambient),
            i32::from(self.specular),
        ]
    }
}

impl Default for LightToggles {
    fn default() -> Self {
        Self::from(&LightPrefs::default())
    }
}

impl From<&LightPrefs> for LightToggles {
    fn from(prefs: &LightPrefs) -> Self {
        Self {
            diffuse: prefs.diffuse,
            ambient: prefs.ambient,
            specular: prefs.specular,
        }
    }
}

/// Everything the shaders read for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// `projection · view · model`, ready for upload.
    pub mvp: UniformMat4,
    /// Inverse of the model matrix, for bringing light and view directions
    /// into model space.
    pub inverse_model: UniformMat4,
    /// Unit direction the camera looks along.
    pub line_of_sight: [f32; 3],
    /// Unit diffuse light direction.
    pub diffuse_light: [f32; 3],
    /// Ambient RGBA.
    pub ambient_color: [f32; 4],
    /// Enabled lighting terms.
    pub lights: LightToggles,
}

impl FrameUniforms {
    /// Build the uniforms for a model at the origin with the given rotation
    /// and uniform scale.
    ///
    /// Fails with [`SceneError::Math`] when the model matrix is singular
    /// (zero scale) or the camera sits at the origin, and with
    /// [`SceneError::NonFinite`] when the MVP has NaN or infinite entries
    /// (a zero aspect ratio, a non-finite rotation).
    pub fn build(
        rotation: &Mat4,
        scale: f64,
        camera: &Camera,
        aspect_ratio: f64,
        lights: LightToggles,
    ) -> Result<Self, SceneError> {
        let model = model_matrix(rotation, scale, Vec3::ZERO);
        let inverse_model = model.try_inv()?;
        let mvp = camera
            .projection(aspect_ratio)
            .matmul(&camera.view())
            .matmul(&model);
        if !mvp.is_finite() {
            return Err(SceneError::NonFinite);
        }
        let line_of_sight = camera.line_of_sight()?;
        let diffuse_light = Vec3::from(DIFFUSE_LIGHT_DIRECTION).normalize()?;
        Ok(Self {
            mvp: UniformMat4::from(&mvp),
            inverse_model: UniformMat4::from(&inverse_model),
            line_of_sight: to_f32(line_of_sight),
            diffuse_light: to_f32(diffuse_light),
            ambient_color: AMBIENT_LIGHT_COLOR,
            lights,
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_f32(v: Vec3) -> [f32; 3] {
    v.to_array().map(|c| c as f32)
}
