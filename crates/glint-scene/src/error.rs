// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use glint_math::MathError;
use thiserror::Error;

/// Errors produced while building scene data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Underlying math failure (zero vector, singular matrix).
    #[error(transparent)]
    Math(#[from] MathError),
    /// Mesh has more vertices than a 16-bit index can address.
    #[error("mesh has {vertices} vertices; u16 indices address at most 65536")]
    IndexOverflow {
        /// Vertex count requested.
        vertices: usize,
    },
    /// Frame inputs produced NaN or infinite uniforms.
    #[error("frame uniforms are not finite")]
    NonFinite,
}
