//! Utility helpers shared across handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `cookie` and `html` are pure string helpers. `dom` wraps the handful of
//! web-sys calls the handlers repeat and only exists in browser builds.

pub mod cookie;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod html;
