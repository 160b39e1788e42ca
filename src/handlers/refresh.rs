//! The admin "refresh news" control.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::config::NewsroomConfig;
use crate::error::NewsroomError;
use crate::handlers::toast;
use crate::net::api;
use crate::net::types::RefreshNewsResponse;
use crate::state::refresh::{ControlView, RefreshControl, RefreshOutcome};
use crate::util::{cookie, dom};

/// Wire the refresh control if the page has one.
///
/// # Errors
///
/// Fails when the document is unavailable or the listener cannot be attached.
pub fn install(config: &Rc<NewsroomConfig>) -> Result<bool, NewsroomError> {
    let Some(button) = dom::document()?.get_element_by_id(&config.refresh.button_id) else {
        return Ok(false);
    };
    let control = Rc::new(RefCell::new(RefreshControl::default()));
    let config = Rc::clone(config);
    let target = button.clone();
    dom::listen(&button, "click", move |_| on_click(&config, &target, &control))?;
    Ok(true)
}

fn on_click(
    config: &Rc<NewsroomConfig>,
    button: &Element,
    control: &Rc<RefCell<RefreshControl>>,
) {
    let original_html = button.inner_html();
    let Some(busy) = control.borrow_mut().begin(&config.refresh, &original_html) else {
        return;
    };
    if let Err(err) = render(button, &busy) {
        log::warn!("cannot show refresh busy state: {err}");
    }

    let token = cookie::document_cookie(&config.csrf.cookie_name);
    let request = api::refresh_news_request(config, token.as_deref());
    let config = Rc::clone(config);
    let button = button.clone();
    let control = Rc::clone(control);
    wasm_bindgen_futures::spawn_local(async move {
        let result = api::send_json::<RefreshNewsResponse>(request).await;
        let outcome = control.borrow_mut().finish(&config.refresh, result);
        toast::notify(
            &config,
            config.refresh.notify,
            outcome.message(),
            outcome.severity(),
        );
        match outcome {
            RefreshOutcome::Triggered { reload_after_ms, .. } => {
                gloo_timers::future::TimeoutFuture::new(reload_after_ms).await;
                dom::reload();
            }
            RefreshOutcome::Failed { restore, .. } => {
                if let Err(err) = render(&button, &restore) {
                    log::error!("cannot restore refresh control: {err}");
                }
            }
        }
    });
}

/// Make `button` look like `view`.
///
/// # Errors
///
/// Fails when the disabled attribute or class list cannot be updated.
pub fn render(button: &Element, view: &ControlView) -> Result<(), NewsroomError> {
    button.set_inner_html(&view.html);
    dom::set_disabled(button, view.disabled)?;
    dom::swap_class(button, &view.remove_class, &view.add_class)
}
