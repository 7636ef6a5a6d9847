//! Reusable components shared by route-level pages.

pub mod protected_layout;
