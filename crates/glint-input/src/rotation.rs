// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Drag-to-rotate composition.
//!
//! A drag is measured from where the pointer went down, never incrementally:
//! each move rebuilds the in-progress rotation from the start position, and
//! releasing the pointer folds it into the committed history once.

use glint_math::{Mat4, Quat, Vec3};
use tracing::{debug, warn};

use crate::InputError;

/// Radians of rotation per pixel of drag distance.
pub const DEFAULT_SENSITIVITY: f64 = 0.01;

/// Keeps the drag axis non-zero when the pointer has not moved.
const AXIS_Z_BIAS: f64 = 1.0e-8;

/// Pointer position in surface pixels (`y` grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
}

impl PointerPosition {
    /// Position at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No pointer held.
    Idle,
    /// Pointer held since `start`; `current` is the rotation it implies so far.
    Dragging {
        /// Where the pointer went down.
        start: PointerPosition,
        /// Rotation from `start` to the latest pointer position.
        current: Mat4,
    },
}

/// Composes pointer drags into a model rotation.
///
/// Horizontal motion turns the model about the screen's vertical axis and
/// vertical motion about the horizontal one. The exposed [`rotation`] is the
/// in-progress drag applied after everything committed before it.
///
/// [`rotation`]: RotationController::rotation
#[derive(Debug, Clone, PartialEq)]
pub struct RotationController {
    historical: Mat4,
    drag: DragState,
    sensitivity: f64,
}

impl RotationController {
    /// Controller with no rotation and the default sensitivity.
    pub const fn new() -> Self {
        Self::with_sensitivity(DEFAULT_SENSITIVITY)
    }

    /// Controller with no rotation; `sensitivity` is radians per pixel.
    pub const fn with_sensitivity(sensitivity: f64) -> Self {
        Self {
            historical: Mat4::identity(),
            drag: DragState::Idle,
            sensitivity,
        }
    }

    /// Replace the committed rotation (e.g. one restored from prefs).
    ///
    /// Any drag in progress is dropped.
    pub fn restore(&mut self, historical: Mat4) {
        self.historical = historical;
        self.drag = DragState::Idle;
    }

    /// Replace the committed rotation with the one `q` represents.
    ///
    /// `q` need not be unit length; a zero vector part restores identity.
    pub fn restore_orientation(&mut self, q: Quat) -> Result<(), InputError> {
        let historical = match q.to_axis_angle() {
            Some((angle, axis)) => Mat4::rotate(angle, &axis)?,
            None => Mat4::identity(),
        };
        self.restore(historical);
        Ok(())
    }

    /// Committed rotation as a unit quaternion, for persistence.
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation(&self.historical)
    }

    /// Begin a drag at `position`.
    ///
    /// A second start while already dragging restarts from the new position
    /// and discards the uncommitted rotation.
    pub fn drag_start(&mut self, position: PointerPosition) {
        self.drag = DragState::Dragging {
            start: position,
            current: Mat4::identity(),
        };
    }

    /// Update the in-progress rotation for the pointer now at `position`.
    ///
    /// Ignored when no drag is active.
    pub fn drag_move(&mut self, position: PointerPosition) -> Result<(), InputError> {
        let DragState::Dragging { start, current } = &mut self.drag else {
            return Ok(());
        };
        let axis = Vec3::new(position.y - start.y, position.x - start.x, AXIS_Z_BIAS);
        let angle = self.sensitivity * axis.norm();
        *current = Mat4::rotate(angle, &axis)?;
        Ok(())
    }

    /// Commit the in-progress rotation and return to idle.
    ///
    /// No-op without an active drag, so a stray release cannot apply the
    /// same rotation twice. A non-finite drag rotation (from NaN or infinite
    /// pointer coordinates) is dropped and the committed rotation kept.
    pub fn drag_end(&mut self) {
        let DragState::Dragging { current, .. } = self.drag else {
            return;
        };
        self.drag = DragState::Idle;
        let committed = current.matmul(&self.historical);
        if !committed.is_finite() {
            warn!("dropping non-finite drag rotation");
            return;
        }
        self.historical = committed;
        debug!(orientation = ?self.orientation().to_array(), "committed drag rotation");
    }

    /// Rotation to draw with: `current · historical` while dragging.
    pub fn rotation(&self) -> Mat4 {
        match self.drag {
            DragState::Idle => self.historical,
            DragState::Dragging { current, .. } => current.matmul(&self.historical),
        }
    }

    /// Everything committed by finished drags.
    pub const fn historical(&self) -> Mat4 {
        self.historical
    }

    /// Current drag state.
    pub const fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether a drag is in progress.
    pub const fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Mat4, b: &Mat4) {
        for (x, y) in a.flat().iter().zip(b.flat()) {
            assert!((x - y).abs() < 1e-12, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn click_without_move_commits_identity() {
        let mut c = RotationController::new();
        c.drag_start(PointerPosition::new(10.0, 10.0));
        assert!(c.is_dragging());
        c.drag_end();
        assert_eq!(c.drag_state(), DragState::Idle);
        assert_close(&c.historical(), &Mat4::identity());
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut c = RotationController::new();
        c.drag_move(PointerPosition::new(50.0, 0.0)).unwrap();
        assert_eq!(c.rotation(), Mat4::identity());
    }

    #[test]
    fn horizontal_drag_turns_about_screen_y() {
        let mut c = RotationController::new();
        c.drag_start(PointerPosition::new(0.0, 0.0));
        c.drag_move(PointerPosition::new(100.0, 0.0)).unwrap();
        let expected = Mat4::rotate(1.0, &Vec3::new(0.0, 100.0, 1.0e-8)).unwrap();
        assert_close(&c.rotation(), &expected);
    }

    #[test]
    fn orientation_restores_committed_rotation() {
        let mut c = RotationController::new();
        c.drag_start(PointerPosition::new(0.0, 0.0));
        c.drag_move(PointerPosition::new(-70.0, 120.0)).unwrap();
        c.drag_end();

        let mut restored = RotationController::new();
        restored.restore_orientation(c.orientation()).unwrap();
        assert_close(&restored.rotation(), &c.rotation());

        restored
            .restore_orientation(Quat::new(1.0, 0.0, 0.0, 0.0))
            .unwrap();
        assert_close(&restored.rotation(), &Mat4::identity());
    }

    #[test]
    fn non_finite_drag_is_not_committed() {
        let mut c = RotationController::new();
        c.drag_start(PointerPosition::new(0.0, 0.0));
        c.drag_move(PointerPosition::new(30.0, 0.0)).unwrap();
        c.drag_end();
        let before = c.historical();

        c.drag_start(PointerPosition::new(0.0, 0.0));
        c.drag_move(PointerPosition::new(f64::NAN, 0.0)).unwrap();
        c.drag_end();
        assert!(!c.is_dragging());
        assert_eq!(c.historical(), before);

        c.drag_start(PointerPosition::new(0.0, 0.0));
        c.drag_move(PointerPosition::new(f64::INFINITY, 0.0)).unwrap();
        c.drag_end();
        assert_eq!(c.historical(), before);
    }

    #[test]
    fn restore_drops_active_drag() {
        let mut c = RotationController::new();
        c.drag_start(PointerPosition::default());
        let turned = Mat4::rotate(0.5, &Vec3::UNIT_Z).unwrap();
        c.restore(turned);
        assert!(!c.is_dragging());
        assert_eq!(c.rotation(), turned);
    }
}
