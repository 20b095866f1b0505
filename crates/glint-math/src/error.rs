// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by the math primitives.

use thiserror::Error;

/// Failures raised by degenerate math inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Normalising a vector whose norm is below [`crate::EPSILON`].
    #[error("cannot normalize zero vector")]
    ZeroVector,
    /// Inverting a matrix with no usable pivot in some column.
    #[error("singular matrix: no usable pivot in column {column}")]
    SingularMatrix {
        /// Column at which elimination ran out of pivots.
        column: usize,
    },
}
