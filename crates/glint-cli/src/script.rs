// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted pointer input replayed across the frames of a headless run.

use std::str::FromStr;

use glint_input::{PointerEvent, PointerPosition};

/// Where the scripted pointer goes down, in surface pixels.
pub const DRAG_ORIGIN: PointerPosition = PointerPosition::new(400.0, 300.0);

/// Total pointer travel of a scripted drag, `--drag DX,DY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragVector {
    pub dx: f64,
    pub dy: f64,
}

impl FromStr for DragVector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dx, dy) = s
            .split_once(',')
            .ok_or_else(|| format!("expected DX,DY, got {s:?}"))?;
        let parse =
            |v: &str| parse_finite(v.trim()).map_err(|err| format!("drag component: {err}"));
        Ok(Self {
            dx: parse(dx)?,
            dy: parse(dy)?,
        })
    }
}

/// Parses a finite number; NaN and infinities are rejected.
pub fn parse_finite(s: &str) -> Result<f64, String> {
    let v = s
        .parse::<f64>()
        .map_err(|err| format!("invalid number {s:?}: {err}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("{s:?} is not a finite number"))
    }
}

/// Parses a finite number greater than zero.
pub fn parse_positive(s: &str) -> Result<f64, String> {
    let v = parse_finite(s)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(format!("{s:?} must be greater than zero"))
    }
}

/// Events delivered before drawing `frame` of `frames`.
///
/// The pointer goes down on frame 0, travels linearly to the full drag
/// vector, and is released on the last frame.
pub fn events_for_frame(frame: u32, frames: u32, drag: DragVector) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(2);
    if frame == 0 {
        events.push(PointerEvent::Down(DRAG_ORIGIN));
    } else {
        let t = f64::from(frame) / f64::from(frames.saturating_sub(1).max(1));
        events.push(PointerEvent::Move(PointerPosition::new(
            DRAG_ORIGIN.x + drag.dx * t,
            DRAG_ORIGIN.y + drag.dy * t,
        )));
    }
    if frame + 1 == frames {
        events.push(PointerEvent::Up);
    }
    events
}
