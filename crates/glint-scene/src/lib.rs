// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! glint-scene: everything a Glint scene computes on the CPU before a draw.
//!
//! The model matrix is `translate · rotation · scale`, the camera sits on a
//! fixed position looking at the origin, and [`FrameUniforms`] bundles what
//! the shaders read each frame. Meshes are generated here too, with 16-bit
//! indices so they fit a WebGL 1 element buffer.

mod camera;
mod error;
mod frame;
mod model;
mod torus_knot;

pub use camera::Camera;
pub use error::SceneError;
pub use frame::{FrameUniforms, LightToggles, AMBIENT_LIGHT_COLOR, DIFFUSE_LIGHT_DIRECTION};
pub use model::model_matrix;
pub use torus_knot::{KnotParams, Mesh, TorusKnot, KNOT_PRIMES};
