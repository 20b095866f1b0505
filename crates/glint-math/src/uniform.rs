// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Boundary between the row-major [`Mat4`] and GPU uniform uploads.
//!
//! `uniformMatrix4fv` (with `transpose = false`) reads sixteen floats in
//! column-major order. Converting through [`UniformMat4`] is the one place
//! that transpose happens; callers never call [`Mat4::transpose`] for upload.

use crate::Mat4;

/// Column-major `f32` matrix ready for a uniform upload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UniformMat4 {
    data: [f32; 16],
}

impl UniformMat4 {
    /// Column-major components, `data[col * 4 + row]`.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Column-major components as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl From<&Mat4> for UniformMat4 {
    #[allow(clippy::cast_possible_truncation)]
    fn from(m: &Mat4) -> Self {
        let rows = m.transpose().flat();
        Self {
            data: rows.map(|v| v as f32),
        }
    }
}

impl From<Mat4> for UniformMat4 {
    fn from(m: Mat4) -> Self {
        Self::from(&m)
    }
}
