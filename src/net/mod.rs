//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON bodies the server returns; `api` builds the
//! requests and sends them through `gloo-net` in browser builds.

pub mod api;
pub mod types;
