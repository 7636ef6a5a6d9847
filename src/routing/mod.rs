//! Route classification and the pre-render navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `paths` owns the static route surface and the pure path classifier;
//! `guard` turns a classification plus the current auth state into an
//! allow/redirect decision. Both are pure and run on every navigation, so
//! neither may touch the network.

pub mod guard;
pub mod paths;
