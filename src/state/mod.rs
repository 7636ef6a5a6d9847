//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so pages depend on small focused models: `auth`
//! reconciles the two session representations into one view, `onboarding`
//! owns the multi-step organization-setup draft.

pub mod auth;
pub mod onboarding;
