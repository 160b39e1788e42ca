//! DOM event wiring (browser only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule finds its elements, attaches listeners that live for the
//! page's lifetime, and spawns one request per user action. Decisions about
//! what to change come from `crate::state`; this layer only touches the DOM.

pub mod bookmark;
pub mod refresh;
pub mod summary;
pub mod toast;

use std::rc::Rc;

use crate::config::NewsroomConfig;

/// Wire every handler the current page has elements for.
pub fn install_all(config: &Rc<NewsroomConfig>) {
    match bookmark::install(config) {
        Ok(count) => log::debug!("wired {count} bookmark buttons"),
        Err(err) => log::error!("bookmark wiring failed: {err}"),
    }
    match refresh::install(config) {
        Ok(true) => log::debug!("wired refresh control #{}", config.refresh.button_id),
        Ok(false) => {}
        Err(err) => log::error!("refresh wiring failed: {err}"),
    }
    match summary::install(config) {
        Ok(count) => log::debug!("wired {count} summary forms"),
        Err(err) => log::error!("summary form wiring failed: {err}"),
    }
    if let Err(err) = summary::request_missing(config) {
        log::warn!("missing-summary trigger failed: {err}");
    }
}
