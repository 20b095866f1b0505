// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Boolean switch with enable/disable hooks (checkbox-style scene options).

/// A boolean that runs a hook every time it is updated.
///
/// The hook matching the *new* state fires after each [`Toggle::update`],
/// even when the state did not change.
pub struct Toggle {
    enabled: bool,
    on_enabled: Box<dyn FnMut()>,
    on_disabled: Box<dyn FnMut()>,
}

impl Toggle {
    /// Toggle starting in `default_state` with the given hooks.
    pub fn new(
        default_state: bool,
        on_enabled: impl FnMut() + 'static,
        on_disabled: impl FnMut() + 'static,
    ) -> Self {
        Self {
            enabled: default_state,
            on_enabled: Box::new(on_enabled),
            on_disabled: Box::new(on_disabled),
        }
    }

    /// Toggle without hooks.
    pub fn plain(default_state: bool) -> Self {
        Self::new(default_state, || {}, || {})
    }

    /// `None` flips the state, `Some(b)` sets it; then the matching hook runs.
    pub fn update(&mut self, new_state: Option<bool>) {
        self.enabled = new_state.unwrap_or(!self.enabled);
        if self.enabled {
            (self.on_enabled)();
        } else {
            (self.on_disabled)();
        }
    }

    /// Current state.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl std::fmt::Debug for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toggle")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
