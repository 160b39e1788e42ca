//! WASM entry point.
//!
//! Runs once when the module is instantiated: panic hook, console logger,
//! page config, then handler wiring as soon as the DOM is parsed.

use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::{CONFIG_ELEMENT_ID, NewsroomConfig};
use crate::error::NewsroomError;
use crate::handlers;
use crate::util::dom;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = load_config();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => NewsroomConfig::default(),
    };
    if console_log::init_with_level(config.log_level()).is_err() {
        log::debug!("logger already installed");
    }
    if let Err(err) = loaded {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }

    let config = Rc::new(config);
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("newsroom-ui not started: {err}");
            return;
        }
    };
    if document.ready_state() == "loading" {
        let config = Rc::clone(&config);
        let wired = dom::listen(&document, "DOMContentLoaded", move |_| {
            handlers::install_all(&config);
        });
        if let Err(err) = wired {
            log::error!("cannot wait for DOMContentLoaded: {err}");
        }
    } else {
        handlers::install_all(&config);
    }
}

/// Read the inline JSON config block; defaults when the page has none.
fn load_config() -> Result<NewsroomConfig, NewsroomError> {
    let raw = dom::document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) => NewsroomConfig::from_json(&raw),
        None => Ok(NewsroomConfig::default()),
    }
}
