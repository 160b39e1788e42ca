//! Toast rendering and the alert/toast notifier switch.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::{NewsroomConfig, NotifyStyle, ToastConfig};
use crate::error::NewsroomError;
use crate::state::toast::{
    CLOSE_BUTTON_SELECTOR, Severity, TOAST_ATTRIBUTES, ToastRegistry, ToastSpec,
};
use crate::util::dom;

thread_local! {
    static TOASTS: RefCell<ToastRegistry<Element>> =
        const { RefCell::new(ToastRegistry::new()) };
}

/// Report `message` the way `style` asks.
pub fn notify(config: &NewsroomConfig, style: NotifyStyle, message: &str, severity: Severity) {
    match style {
        NotifyStyle::Alert => dom::alert(message),
        NotifyStyle::Toast => show_toast(&config.toast, &ToastSpec::new(message, severity)),
    }
}

/// Append a toast to `<body>` and schedule its removal.
pub fn show_toast(config: &ToastConfig, spec: &ToastSpec) {
    if let Err(err) = render(config, spec) {
        log::warn!("cannot show toast ({}): {err}", spec.message);
    }
}

fn render(config: &ToastConfig, spec: &ToastSpec) -> Result<(), NewsroomError> {
    let document = dom::document()?;
    let body = document.body().ok_or_else(|| NewsroomError::Dom("no body".to_owned()))?;

    let toast = document.create_element("div").map_err(dom::js_error)?;
    toast.set_class_name(&spec.class_name());
    for (name, value) in TOAST_ATTRIBUTES {
        dom::set_attr(&toast, name, value)?;
    }
    toast.set_inner_html(&spec.body_html());
    body.append_child(&toast).map_err(dom::js_error)?;

    let now_ms = js_sys::Date::now();
    let (id, due) = TOASTS.with(|toasts| {
        toasts
            .borrow_mut()
            .open(toast.clone(), now_ms, config.delay_ms)
    });
    Timeout::new(config.delay_ms, move || {
        let expired = TOASTS.with(|toasts| toasts.borrow_mut().take_expired(due));
        for element in expired {
            element.remove();
        }
    })
    .forget();

    if let Some(close) = dom::query_in(&toast, CLOSE_BUTTON_SELECTOR)? {
        dom::listen(&close, "click", move |_| {
            if let Some(element) = TOASTS.with(|toasts| toasts.borrow_mut().dismiss(id)) {
                element.remove();
            }
        })?;
    }
    Ok(())
}
