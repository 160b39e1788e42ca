//! # newsroom-ui
//!
//! WASM glue for the server-rendered news site: bookmark toggles, the
//! admin "refresh news" control, summary-fetch forms and toast notices.
//!
//! Pure request building and UI state transitions live in `net`, `state`
//! and `util` and compile everywhere. DOM wiring in `handlers` and the
//! `boot` entry point need a browser and sit behind the `hydrate` feature.

pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod handlers;

pub use config::NewsroomConfig;
pub use error::NewsroomError;
