// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tube mesh around a `(P, Q)` torus knot.
//!
//! The centre curve, for `s` in `[0, 1)`:
//!
//! ```text
//! r = 1 + 0.5 cos(2π P s)
//! t = 2π Q s
//! z = sin(2π P s)
//! (x, y) = (r cos t, r sin t)
//! ```
//!
//! Each ring is a circle in the `z = 0` plane, rotated so its normal matches
//! the curve tangent and moved onto the curve.

use glint_math::{Mat4, Vec3};
use rand::Rng;
use std::f64::consts::{PI, TAU};
use tracing::debug;

use crate::SceneError;

/// Primes the knot winding numbers are drawn from.
pub const KNOT_PRIMES: [u32; 4] = [2, 3, 5, 7];

/// Winding numbers of the knot; distinct primes, hence coprime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnotParams {
    /// Turns around the tube axis.
    pub p: u32,
    /// Turns around the torus hole.
    pub q: u32,
}

impl KnotParams {
    /// Two distinct primes from [`KNOT_PRIMES`].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        loop {
            let p = KNOT_PRIMES[rng.gen_range(0..KNOT_PRIMES.len())];
            let q = KNOT_PRIMES[rng.gen_range(0..KNOT_PRIMES.len())];
            if p != q {
                return Self { p, q };
            }
        }
    }
}

impl Default for KnotParams {
    fn default() -> Self {
        Self { p: 2, q: 3 }
    }
}

/// Indexed triangle mesh with per-vertex normals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Unit normals, parallel to `vertices`.
    pub normals: Vec<Vec3>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Positions flattened to `x, y, z, x, y, z, ...` for a vertex buffer.
    pub fn position_buffer(&self) -> Vec<f32> {
        flatten(&self.vertices)
    }

    /// Normals flattened like [`Mesh::position_buffer`].
    pub fn normal_buffer(&self) -> Vec<f32> {
        flatten(&self.normals)
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[allow(clippy::cast_possible_truncation)]
fn flatten(vs: &[Vec3]) -> Vec<f32> {
    vs.iter()
        .flat_map(|v| v.to_array())
        .map(|c| c as f32)
        .collect()
}

/// Mesh generator settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusKnot {
    /// Winding numbers.
    pub params: KnotParams,
    /// Rings along the curve.
    pub rings: usize,
    /// Samples around each ring.
    pub samples: usize,
    /// Radius of the tube.
    pub tube_radius: f64,
}

impl TorusKnot {
    /// Default resolution (256 rings of 32 samples, tube radius 0.1).
    pub const fn new(params: KnotParams) -> Self {
        Self {
            params,
            rings: 256,
            samples: 32,
            tube_radius: 0.1,
        }
    }

    /// Centre point and unit tangent at curve parameter `s`.
    fn frame_at(&self, s: f64) -> Result<(Vec3, Vec3), SceneError> {
        let p = f64::from(self.params.p);
        let q = f64::from(self.params.q);
        let phase = TAU * p * s;
        let r = 1.0 + 0.5 * phase.cos();
        let t = TAU * q * s;
        let (sin_t, cos_t) = t.sin_cos();
        let center = Vec3::new(r * cos_t, r * sin_t, phase.sin());

        let dr = -PI * p * phase.sin();
        let dt = TAU * q;
        let dz = TAU * p * phase.cos();
        let tangent = Vec3::new(
            dr * cos_t - r * dt * sin_t,
            dr * sin_t + r * dt * cos_t,
            dz,
        )
        .normalize()?;
        Ok((center, tangent))
    }

    /// Rotation carrying `+z` onto `tangent` via the half-way quaternion
    /// `(1 + ẑ·t, ẑ × t)`.
    fn align_z_to(tangent: &Vec3) -> Result<Mat4, SceneError> {
        let r = 1.0 + Vec3::UNIT_Z.dot(tangent);
        let axis = Vec3::UNIT_Z.cross(tangent);
        let norm = r.hypot(axis.norm());
        let angle = 2.0 * (r / norm).acos();
        Ok(Mat4::rotate(angle, &axis)?)
    }

    /// Generate the mesh.
    ///
    /// Fails with [`SceneError::IndexOverflow`] when `rings * samples`
    /// exceeds the `u16` index range.
    #[allow(clippy::cast_precision_loss)]
    pub fn build(&self) -> Result<Mesh, SceneError> {
        let (rings, samples) = (self.rings, self.samples);
        let count = rings.saturating_mul(samples);
        if count > usize::from(u16::MAX) + 1 {
            return Err(SceneError::IndexOverflow { vertices: count });
        }

        let mut vertices = Vec::with_capacity(count);
        let mut normals = Vec::with_capacity(count);
        for ring in 0..rings {
            let (center, tangent) = self.frame_at(ring as f64 / rings as f64)?;
            let align = Self::align_z_to(&tangent)?;
            for sample in 0..samples {
                let angle = TAU * sample as f64 / samples as f64;
                let (sin_a, cos_a) = angle.sin_cos();
                let normal = align.dot(&Vec3::new(cos_a, sin_a, 0.0));
                vertices.push(center + normal * self.tube_radius);
                normals.push(normal);
            }
        }

        let index = |ring: usize, sample: usize| -> Result<u16, SceneError> {
            let i = (ring % rings) * samples + sample % samples;
            u16::try_from(i).map_err(|_| SceneError::IndexOverflow { vertices: count })
        };
        let mut indices = Vec::with_capacity(count * 6);
        for ring in 0..rings {
            for sample in 0..samples {
                let a = index(ring, sample)?;
                let b = index(ring, sample + 1)?;
                let c = index(ring + 1, sample)?;
                let d = index(ring + 1, sample + 1)?;
                indices.extend_from_slice(&[a, b, c, b, d, c]);
            }
        }

        debug!(
            p = self.params.p,
            q = self.params.q,
            vertices = vertices.len(),
            triangles = indices.len() / 3,
            "built torus knot mesh"
        );
        Ok(Mesh {
            vertices,
            normals,
            indices,
        })
    }
}

impl Default for TorusKnot {
    fn default() -> Self {
        Self::new(KnotParams::default())
    }
}
