//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema shared with the backend; `api` owns the
//! transport seam (`HttpClient`) plus the browser implementation.

pub mod api;
pub mod types;
