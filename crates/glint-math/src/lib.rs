// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! glint-math: value-type linear algebra for the Glint sample scenes.
//!
//! Everything here is `Copy` and pure: operations return new values and never
//! mutate in place. Matrices are stored row-major (`data[row * 4 + col]`); the
//! only conversion to the column-major layout a GPU uniform upload expects is
//! [`UniformMat4`].
//!
//! ```
//! use glint_math::{Mat4, Vec3};
//! let t = Mat4::translate(Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(t.dot(&Vec3::ZERO).to_array(), [1.0, 2.0, 3.0]);
//! ```

mod error;
mod mat4;
mod quat;
mod uniform;
mod vec3;

pub use error::MathError;
pub use mat4::{Mat4, MatrixSpec};
pub use quat::Quat;
pub use uniform::UniformMat4;
pub use vec3::Vec3;

use std::f64::consts::TAU;

/// Degeneracy threshold for vector normalisation (`2^-52`).
///
/// A vector whose norm is below this value is treated as the zero vector.
pub const EPSILON: f64 = f64::EPSILON;

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value * (360.0 / TAU)
}
