//! Bookmark toggle buttons.

use std::rc::Rc;

use web_sys::Element;

use crate::config::{BookmarkConfig, NewsroomConfig};
use crate::error::NewsroomError;
use crate::net::api;
use crate::net::types::ToggleBookmarkResponse;
use crate::state::bookmark::{BookmarkButton, plan_toggle};
use crate::util::{cookie, dom};

const ARTICLE_ID_ATTR: &str = "data-article-id";
const BOOKMARKED_ATTR: &str = "data-bookmarked";

/// Attach click handlers to every bookmark button. Returns how many were wired.
///
/// # Errors
///
/// Fails when the selector is invalid or a listener cannot be attached.
pub fn install(config: &Rc<NewsroomConfig>) -> Result<usize, NewsroomError> {
    let mut wired = 0;
    for button in dom::query_all(&config.bookmark.button_selector)? {
        if !button.has_attribute(ARTICLE_ID_ATTR) {
            log::warn!("bookmark button without {ARTICLE_ID_ATTR}; skipping");
            continue;
        }
        let config = Rc::clone(config);
        let target = button.clone();
        dom::listen(&button, "click", move |_| on_click(&config, &target))?;
        wired += 1;
    }
    Ok(wired)
}

fn on_click(config: &Rc<NewsroomConfig>, button: &Element) {
    let state = BookmarkButton::from_attributes(
        button.get_attribute(ARTICLE_ID_ATTR).as_deref(),
        button.get_attribute(BOOKMARKED_ATTR).as_deref(),
    );
    let Some(state) = state else {
        log::warn!("bookmark button lost its article id");
        return;
    };
    log::debug!(
        "toggling bookmark for article {} (currently {})",
        state.article_id,
        state.bookmarked
    );

    let token = cookie::document_cookie(&config.csrf.cookie_name);
    let request = api::toggle_bookmark_request(config, token.as_deref(), &state.article_id);
    let config = Rc::clone(config);
    let button = button.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let applied = match api::send_json::<ToggleBookmarkResponse>(request).await {
            Ok(resp) => apply_response(&config.bookmark, &button, &resp, &dom::pathname()),
            Err(err) => Err(err),
        };
        if let Err(err) = applied {
            log::error!("Error toggling bookmark: {err}");
        }
    });
}

/// Apply a toggle response to `button` as seen from `pathname`.
///
/// # Errors
///
/// Fails when an attribute, class or selector operation is rejected.
pub fn apply_response(
    config: &BookmarkConfig,
    button: &Element,
    resp: &ToggleBookmarkResponse,
    pathname: &str,
) -> Result<(), NewsroomError> {
    let Some(patch) = plan_toggle(config, resp, pathname) else {
        log::debug!("toggle response without bookmark flag; button unchanged");
        return Ok(());
    };
    dom::set_attr(button, BOOKMARKED_ATTR, patch.attribute_value())?;
    dom::swap_class(button, &patch.remove_class, &patch.add_class)?;
    if let Some(label) = dom::query_in(button, &config.label_selector)? {
        label.set_text_content(Some(patch.label.as_str()));
    }
    if patch.remove_card {
        if let Some(card) = button.closest(&config.card_selector).map_err(dom::js_error)? {
            card.remove();
        }
    }
    Ok(())
}
