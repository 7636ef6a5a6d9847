//! Sudo mode — the time-boxed elevated-trust window after a sensitive
//! re-authentication (currently armed by the finish-setup confirmation).

#[cfg(test)]
#[path = "sudo_test.rs"]
mod tests;

use crate::util::clock;
use crate::util::storage::StorageBackend;

pub const SUDO_EXPIRY_KEY: &str = "sudoModeExpiry";

/// Window length: four hours, in milliseconds.
pub const SUDO_WINDOW_MS: i64 = 4 * 60 * 60 * 1000;

/// Store for the sudo-mode expiry timestamp (epoch milliseconds).
#[derive(Clone, Debug)]
pub struct SudoMode<S: StorageBackend> {
    storage: S,
}

impl<S: StorageBackend> SudoMode<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Arm the window starting at `now_ms`.
    pub fn enter_at(&self, now_ms: i64) {
        self.storage.set(SUDO_EXPIRY_KEY, &(now_ms + SUDO_WINDOW_MS).to_string());
    }

    /// Arm the window starting now.
    pub fn enter(&self) {
        self.enter_at(clock::now_ms());
    }

    /// True while the window is armed and unexpired at `now_ms`. An
    /// unparseable stored value reads as inactive.
    pub fn is_active_at(&self, now_ms: i64) -> bool {
        self.storage
            .get(SUDO_EXPIRY_KEY)
            .and_then(|raw| raw.parse::<i64>().ok())
            .is_some_and(|expiry| now_ms < expiry)
    }

    /// [`Self::is_active_at`] against the live clock.
    pub fn is_active(&self) -> bool {
        self.is_active_at(clock::now_ms())
    }

    /// Disarm the window.
    pub fn clear(&self) {
        self.storage.remove(SUDO_EXPIRY_KEY);
    }
}
