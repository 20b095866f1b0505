// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Route pointer events into the input controllers.

use std::time::{Duration, Instant};

use glint_app_core::prefs::ViewerPrefs;
use glint_math::Quat;
use tracing::warn;

use crate::{HoldRepeater, InputError, PointerPosition, RotationController, ZoomController};

/// Pointer events a scene surface can deliver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at a position.
    Down(PointerPosition),
    /// Pointer moved to a position.
    Move(PointerPosition),
    /// Button released.
    Up,
    /// Pointer left the surface; ends any drag.
    Leave,
    /// Wheel scrolled by `delta_y` (positive scrolls down).
    Wheel {
        /// Vertical scroll amount.
        delta_y: f64,
    },
}

/// What the frame driver should do after an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputOutcome {
    /// Visible state changed; draw another frame.
    pub redraw: bool,
    /// The hold-repeat action should run once now.
    pub fire: bool,
}

/// All pointer-driven state of one scene.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Drag-to-rotate.
    pub rotation: RotationController,
    /// Wheel zoom.
    pub zoom: ZoomController,
    /// Hold-to-repeat.
    pub repeater: HoldRepeater,
}

impl InputState {
    /// State seeded from viewer prefs, including the saved orientation.
    ///
    /// A non-finite saved orientation is logged and replaced by identity.
    pub fn from_prefs(prefs: &ViewerPrefs) -> Result<Self, InputError> {
        let mut state = Self::unrotated(prefs);
        if prefs.orientation.iter().all(|c| c.is_finite()) {
            state
                .rotation
                .restore_orientation(Quat::from(prefs.orientation))?;
        } else {
            warn!(orientation = ?prefs.orientation, "ignoring non-finite saved orientation");
        }
        Ok(state)
    }

    fn unrotated(prefs: &ViewerPrefs) -> Self {
        Self {
            rotation: RotationController::with_sensitivity(prefs.drag.sensitivity),
            zoom: ZoomController::from_prefs(&prefs.zoom),
            repeater: HoldRepeater::new(Duration::from_millis(prefs.drag.repeat_interval_ms)),
        }
    }

    /// Apply one event received at `now`.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        now: Instant,
    ) -> Result<InputOutcome, InputError> {
        let outcome = match event {
            PointerEvent::Down(pos) => {
                self.rotation.drag_start(pos);
                InputOutcome {
                    redraw: false,
                    fire: self.repeater.press(now),
                }
            }
            PointerEvent::Move(pos) => {
                let redraw = self.rotation.is_dragging();
                self.rotation.drag_move(pos)?;
                InputOutcome {
                    redraw,
                    fire: false,
                }
            }
            PointerEvent::Up | PointerEvent::Leave => {
                let redraw = self.rotation.is_dragging();
                self.rotation.drag_end();
                self.repeater.release();
                InputOutcome {
                    redraw,
                    fire: false,
                }
            }
            PointerEvent::Wheel { delta_y } => {
                self.zoom.wheel(delta_y);
                InputOutcome {
                    redraw: true,
                    fire: false,
                }
            }
        };
        Ok(outcome)
    }

    /// Write the committed orientation back into `prefs`.
    ///
    /// A non-finite orientation cannot be saved as JSON and would make the
    /// whole prefs file unreadable; it is logged and `prefs` left as is.
    pub fn store_into(&self, prefs: &mut ViewerPrefs) {
        let orientation = self.rotation.orientation().to_array();
        if orientation.iter().all(|c| c.is_finite()) {
            prefs.orientation = orientation;
        } else {
            warn!(?orientation, "not saving non-finite orientation");
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::unrotated(&ViewerPrefs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_app_core::prefs::IDENTITY_ORIENTATION;

    #[test]
    fn wheel_always_redraws_moves_only_while_dragging() {
        let now = Instant::now();
        let mut s = InputState::default();
        let idle_move = s.handle(PointerEvent::Move(PointerPosition::new(3.0, 4.0)), now);
        assert_eq!(idle_move, Ok(InputOutcome::default()));
        let wheel = s.handle(PointerEvent::Wheel { delta_y: 20.0 }, now).unwrap();
        assert!(wheel.redraw);
        assert!((s.zoom.scale() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn down_fires_repeat_and_leave_stops_it() {
        let now = Instant::now();
        let mut s = InputState::default();
        let down = s.handle(PointerEvent::Down(PointerPosition::default()), now).unwrap();
        assert!(down.fire);
        assert!(s.repeater.is_held());
        s.handle(PointerEvent::Leave, now).unwrap();
        assert!(!s.repeater.is_held());
        assert!(!s.rotation.is_dragging());
    }

    #[test]
    fn orientation_round_trips_through_prefs() {
        let now = Instant::now();
        let mut s = InputState::default();
        s.handle(PointerEvent::Down(PointerPosition::new(0.0, 0.0)), now).unwrap();
        s.handle(PointerEvent::Move(PointerPosition::new(30.0, -12.0)), now).unwrap();
        s.handle(PointerEvent::Up, now).unwrap();

        let mut prefs = ViewerPrefs::default();
        s.store_into(&mut prefs);
        let restored = InputState::from_prefs(&prefs).unwrap();
        let (a, b) = (restored.rotation.rotation(), s.rotation.rotation());
        for (x, y) in a.flat().iter().zip(b.flat()) {
            assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn non_finite_state_is_never_saved() {
        let now = Instant::now();
        let mut s = InputState::default();
        s.handle(PointerEvent::Down(PointerPosition::new(0.0, 0.0)), now).unwrap();
        s.handle(PointerEvent::Move(PointerPosition::new(f64::NAN, 0.0)), now).unwrap();
        s.handle(PointerEvent::Up, now).unwrap();
        let mut prefs = ViewerPrefs::default();
        s.store_into(&mut prefs);
        assert_eq!(prefs.orientation, IDENTITY_ORIENTATION);

        let nan = glint_math::Mat4::rotate(f64::NAN, &glint_math::Vec3::UNIT_X).unwrap();
        s.rotation.restore(nan);
        prefs.orientation = [0.0, 1.0, 0.0, 0.0];
        s.store_into(&mut prefs);
        assert_eq!(prefs.orientation, [0.0, 1.0, 0.0, 0.0]);
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(serde_json::from_str::<ViewerPrefs>(&json).is_ok());
    }

    #[test]
    fn prefs_set_repeat_interval_and_zoom_range() {
        let mut prefs = ViewerPrefs::default();
        prefs.drag.repeat_interval_ms = 40;
        prefs.zoom.max_scale = 3.0;
        let mut s = InputState::from_prefs(&prefs).unwrap();
        assert_eq!(s.repeater.interval(), Duration::from_millis(40));
        s.handle(PointerEvent::Wheel { delta_y: -1.0e6 }, Instant::now())
            .unwrap();
        assert_eq!(s.zoom.scale(), 3.0);
    }

    #[test]
    fn non_finite_orientation_falls_back_to_identity() {
        let mut prefs = ViewerPrefs::default();
        prefs.orientation = [f64::NAN, 0.0, 1.0, 0.0];
        let s = InputState::from_prefs(&prefs).unwrap();
        assert_eq!(s.rotation.rotation(), glint_math::Mat4::identity());
    }
}
