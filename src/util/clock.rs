//! Wall-clock seam.
//!
//! Time-based predicates (token expiry, sudo window) take an explicit
//! `now_ms` so they stay pure and testable; this module supplies the live
//! value — `Date.now()` in the browser, `SystemTime` natively.

/// Current time in milliseconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as i64)
    }
}
