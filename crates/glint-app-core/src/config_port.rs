// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port the frame driver talks to for viewer preferences.

use tracing::warn;

use crate::config::{ConfigService, ConfigStore};
use crate::prefs::{ViewerPrefs, PREFS_KEY};

/// Config-facing port for loading/saving viewer preferences.
pub trait ConfigPort {
    /// Load viewer preferences (None if missing or unreadable).
    fn load_prefs(&self) -> Option<ViewerPrefs>;
    /// Persist viewer preferences; failures are logged, never raised.
    fn save_prefs(&self, prefs: &ViewerPrefs);
}

/// [`ConfigPort`] backed by any [`ConfigStore`].
pub struct PrefsConfig<S> {
    service: ConfigService<S>,
}

impl<S> PrefsConfig<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self {
            service: ConfigService::new(store),
        }
    }
}

impl<S: ConfigStore> ConfigPort for PrefsConfig<S> {
    fn load_prefs(&self) -> Option<ViewerPrefs> {
        match self.service.load(PREFS_KEY) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(?err, key = PREFS_KEY, "ignoring unreadable viewer prefs");
                None
            }
        }
    }

    fn save_prefs(&self, prefs: &ViewerPrefs) {
        if let Err(err) = self.service.save(PREFS_KEY, prefs) {
            warn!(?err, key = PREFS_KEY, "failed to save viewer prefs");
        }
    }
}
