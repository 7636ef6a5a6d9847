//! Authentication subsystem: credential persistence, session flows, and
//! the cookie-backed server session.
//!
//! ARCHITECTURE
//! ============
//! `credentials` owns the persisted token bundle and the single
//! `is_authenticated` predicate every guard agrees on. `service` drives the
//! backend auth flows and the 401→refresh→retry pipeline. `session` models
//! the independent cookie-backed server session. `flow` and `sudo` cover
//! the small flow-scoped storage keys around OTP/reset and the post-setup
//! elevated-trust window.

pub mod credentials;
pub mod flow;
pub mod service;
pub mod session;
pub mod sudo;
