// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use glint_math::MathError;
use thiserror::Error;

/// Errors raised while applying pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Building a rotation from the drag failed.
    #[error("drag rotation: {0}")]
    Math(#[from] MathError),
}
