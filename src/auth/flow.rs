//! Flow-scoped storage keys for the OTP screens.
//!
//! The OTP page serves two flows — post-signup email verification and
//! password reset — and tells them apart by which email key is present.
//! Both keys live in sessionStorage so an abandoned flow dies with the tab.

#[cfg(test)]
#[path = "flow_test.rs"]
mod tests;

use crate::util::storage::StorageBackend;

pub const VERIFICATION_EMAIL_KEY: &str = "verificationEmail";
pub const RESET_EMAIL_KEY: &str = "resetEmail";

/// Store for the pending-flow email addresses.
#[derive(Clone, Debug)]
pub struct FlowStore<S: StorageBackend> {
    storage: S,
}

impl<S: StorageBackend> FlowStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Mark a signup as awaiting email verification for `email`.
    pub fn begin_verification(&self, email: &str) {
        self.storage.set(VERIFICATION_EMAIL_KEY, email);
    }

    /// The email awaiting verification, if any.
    pub fn verification_email(&self) -> Option<String> {
        self.storage.get(VERIFICATION_EMAIL_KEY)
    }

    /// Drop the pending verification marker (flow finished or abandoned).
    pub fn clear_verification(&self) {
        self.storage.remove(VERIFICATION_EMAIL_KEY);
    }

    /// Mark a password reset as in progress for `email`.
    pub fn begin_reset(&self, email: &str) {
        self.storage.set(RESET_EMAIL_KEY, email);
    }

    /// The email with a reset in progress, if any.
    pub fn reset_email(&self) -> Option<String> {
        self.storage.get(RESET_EMAIL_KEY)
    }

    /// Drop the pending reset marker.
    pub fn clear_reset(&self) {
        self.storage.remove(RESET_EMAIL_KEY);
    }
}
