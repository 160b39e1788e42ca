//! Toast content and the registry of toasts currently on screen.
//!
//! DESIGN
//! ======
//! A toast can disappear two ways: its display timer runs out or the user
//! clicks its close button. The registry hands each toast's handle back
//! exactly once, whichever path gets there first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use serde::{Deserialize, Serialize};

use crate::util::html;

/// Toast severity tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn background_class(self) -> &'static str {
        match self {
            Self::Success => "bg-success",
            Self::Error => "bg-danger",
        }
    }
}

/// ARIA attributes set on every toast element.
pub const TOAST_ATTRIBUTES: [(&str, &str); 3] =
    [("role", "alert"), ("aria-live", "assertive"), ("aria-atomic", "true")];

/// Selector for the close button inside a toast body.
pub const CLOSE_BUTTON_SELECTOR: &str = ".btn-close";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastSpec {
    pub message: String,
    pub severity: Severity,
}

impl ToastSpec {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn class_name(&self) -> String {
        format!(
            "toast show align-items-center text-white {} border-0",
            self.severity.background_class()
        )
    }

    /// Inner markup; the message is escaped.
    pub fn body_html(&self) -> String {
        format!(
            concat!(
                r#"<div class="d-flex">"#,
                r#"<div class="toast-body">{}</div>"#,
                r#"<button type="button" class="btn-close btn-close-white me-2 m-auto" "#,
                r#"aria-label="Close"></button>"#,
                "</div>"
            ),
            html::escape(&self.message)
        )
    }
}

pub type ToastId = u64;

#[derive(Debug)]
struct LiveToast<H> {
    id: ToastId,
    expires_at_ms: f64,
    handle: H,
}

/// Live toasts keyed by id, each holding a handle `H` (the DOM element in
/// the browser).
#[derive(Debug)]
pub struct ToastRegistry<H> {
    next_id: ToastId,
    live: Vec<LiveToast<H>>,
}

impl<H> Default for ToastRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ToastRegistry<H> {
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            live: Vec::new(),
        }
    }

    /// Register a toast shown at `now_ms` for `delay_ms`. Returns its id and
    /// the instant it is due for removal.
    pub fn open(&mut self, handle: H, now_ms: f64, delay_ms: u32) -> (ToastId, f64) {
        let id = self.next_id;
        self.next_id += 1;
        let expires_at_ms = now_ms + f64::from(delay_ms);
        self.live.push(LiveToast {
            id,
            expires_at_ms,
            handle,
        });
        (id, expires_at_ms)
    }

    /// Close a toast early. `None` if it is already gone.
    pub fn dismiss(&mut self, id: ToastId) -> Option<H> {
        let index = self.live.iter().position(|toast| toast.id == id)?;
        Some(self.live.remove(index).handle)
    }

    /// Remove and return every toast whose display time is over at `at_ms`.
    pub fn take_expired(&mut self, at_ms: f64) -> Vec<H> {
        let (expired, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.live)
            .into_iter()
            .partition(|toast| toast.expires_at_ms <= at_ms);
        self.live = live;
        expired.into_iter().map(|toast| toast.handle).collect()
    }

    #[cfg(test)]
    pub fn is_live(&self, id: ToastId) -> bool {
        self.live.iter().any(|toast| toast.id == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
