//! Page configuration: endpoints, selectors, CSS classes, labels, delays.
//!
//! DESIGN
//! ======
//! Templates used to ship near-identical script variants that differed only
//! in endpoint, HTTP method, notifier and delay. All of those knobs live here
//! instead. Defaults match the main site; a page overrides any subset with an
//! inline JSON block:
//!
//! ```html
//! <script type="application/json" id="newsroom-config">
//!   {"refresh": {"method": "GET", "notify": "alert"}}
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::NewsroomError;

/// Element id of the inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "newsroom-config";

/// Small inline spinner used by the busy and placeholder markup.
const SPINNER_HTML: &str =
    r#"<span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>"#;

/// Root configuration object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsroomConfig {
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub csrf: CsrfConfig,
    pub bookmark: BookmarkConfig,
    pub refresh: RefreshConfig,
    pub summary: SummaryConfig,
    pub toast: ToastConfig,
}

impl Default for NewsroomConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            csrf: CsrfConfig::default(),
            bookmark: BookmarkConfig::default(),
            refresh: RefreshConfig::default(),
            summary: SummaryConfig::default(),
            toast: ToastConfig::default(),
        }
    }
}

impl NewsroomConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`NewsroomError::Config`] when the JSON is malformed or a field
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, NewsroomError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Parsed log level; unknown names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Where the CSRF token comes from and where it goes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsrfConfig {
    pub cookie_name: String,
    pub header_name: String,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie_name: "csrftoken".to_owned(),
            header_name: "X-CSRFToken".to_owned(),
        }
    }
}

/// Bookmark toggle buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarkConfig {
    pub endpoint: String,
    pub button_selector: String,
    pub label_selector: String,
    /// Ancestor removed when a bookmark is dropped on the listing page.
    pub card_selector: String,
    pub active_class: String,
    pub inactive_class: String,
    pub active_label: String,
    pub inactive_label: String,
    /// Path fragment identifying the bookmarks listing page.
    pub listing_path: String,
}

impl Default for BookmarkConfig {
    fn default() -> Self {
        Self {
            endpoint: "/toggle-bookmark/".to_owned(),
            button_selector: ".bookmark-btn".to_owned(),
            label_selector: ".bookmark-text".to_owned(),
            card_selector: ".card".to_owned(),
            active_class: "btn-warning".to_owned(),
            inactive_class: "btn-outline-warning".to_owned(),
            active_label: "Bookmarked".to_owned(),
            inactive_label: "Bookmark".to_owned(),
            listing_path: "/bookmarks".to_owned(),
        }
    }
}

/// HTTP method used by the refresh control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

/// How a handler reports its outcome to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyStyle {
    /// Blocking `window.alert`.
    Alert,
    #[default]
    Toast,
}

/// The admin "refresh news" control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub endpoint: String,
    pub button_id: String,
    pub method: HttpMethod,
    pub notify: NotifyStyle,
    /// Delay between a successful trigger and the page reload.
    pub reload_delay_ms: u32,
    /// Inner HTML restored after a failure.
    pub idle_html: String,
    /// Inner HTML while the request is in flight.
    pub busy_html: String,
    pub idle_class: String,
    pub busy_class: String,
    /// Shown when the server answers without a `message`.
    pub fallback_message: String,
    pub failure_message: String,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/refresh-news/".to_owned(),
            button_id: "refreshNews".to_owned(),
            method: HttpMethod::Post,
            notify: NotifyStyle::Toast,
            reload_delay_ms: 2000,
            idle_html: "Refresh News".to_owned(),
            busy_html: format!("{SPINNER_HTML} Refreshing..."),
            idle_class: "btn-success".to_owned(),
            busy_class: "btn-info".to_owned(),
            fallback_message: "News refresh initiated!".to_owned(),
            failure_message: "Failed to refresh news. Check console for details.".to_owned(),
        }
    }
}

/// Single-article summary forms and the missing-summary batch trigger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub endpoint: String,
    pub form_selector: String,
    /// Replaces the form content once submitted.
    pub placeholder_html: String,
    pub batch_enabled: bool,
    pub batch_endpoint: String,
    /// Elements carrying `data-article-id` whose summary is still missing.
    pub missing_selector: String,
    pub batch_limit: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            endpoint: "/fetch-summary-single/".to_owned(),
            form_selector: "form.fetch-summary-form".to_owned(),
            placeholder_html: format!(
                r#"<span class="text-muted">{SPINNER_HTML} Fetching summary...</span>"#
            ),
            batch_enabled: false,
            batch_endpoint: "/fetch-missing-summaries/".to_owned(),
            missing_selector: "[data-summary-missing]".to_owned(),
            batch_limit: 5,
        }
    }
}

/// Toast notifications.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// How long a toast stays on screen before it is removed.
    pub delay_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { delay_ms: 3000 }
    }
}
