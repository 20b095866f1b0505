// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use glint_math::{Mat4, Vec3};

/// Model matrix `translate(offset) · rotation · scale(s, s, s)`.
///
/// Points are scaled first, then rotated, then moved.
pub fn model_matrix(rotation: &Mat4, scale: f64, offset: Vec3) -> Mat4 {
    let s = Mat4::scale(Vec3::new(scale, scale, scale));
    Mat4::translate(offset).matmul(&rotation.matmul(&s))
}
