//! Pure UI state transitions.
//!
//! DESIGN
//! ======
//! Handlers read attributes and responses, ask these modules what should
//! change, then apply the answer to the DOM. Keeping the decisions here makes
//! them testable without a browser.

pub mod bookmark;
pub mod refresh;
pub mod summary;
pub mod toast;
