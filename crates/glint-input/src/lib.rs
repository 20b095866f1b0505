// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! glint-input: turns pointer events into scene state.
//!
//! - [`RotationController`] composes drag rotations onto a running history.
//! - [`ZoomController`] maps wheel deltas onto a clamped model scale.
//! - [`HoldRepeater`] fires at a fixed cadence while a pointer is held.
//! - [`InputState`] routes [`PointerEvent`]s to all three.

mod error;
mod event;
mod repeat;
mod rotation;
mod zoom;

pub use error::InputError;
pub use event::{InputOutcome, InputState, PointerEvent};
pub use repeat::HoldRepeater;
pub use rotation::{DragState, PointerPosition, RotationController};
pub use zoom::ZoomController;
