// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Glint scenes: config storage, viewer
//! preferences, and the small per-frame helpers every scene loop reaches for.
//!
//! None of these hold global state; the frame driver owns each value and
//! passes it where it is needed.

pub mod angle;
pub mod clamped;
pub mod config;
pub mod config_port;
pub mod counter;
pub mod prefs;
pub mod timer;
pub mod toggle;
