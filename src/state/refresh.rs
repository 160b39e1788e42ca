//! Refresh-news control: idle/busy phases and what each outcome shows.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use crate::config::RefreshConfig;
use crate::error::NewsroomError;
use crate::net::types::RefreshNewsResponse;
use crate::state::toast::Severity;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshPhase {
    #[default]
    Idle,
    Busy,
}

/// How the control should look.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlView {
    pub html: String,
    pub disabled: bool,
    pub remove_class: String,
    pub add_class: String,
}

impl ControlView {
    pub fn busy(config: &RefreshConfig) -> Self {
        Self {
            html: config.busy_html.clone(),
            disabled: true,
            remove_class: config.idle_class.clone(),
            add_class: config.busy_class.clone(),
        }
    }

    pub fn idle(config: &RefreshConfig) -> Self {
        Self {
            html: config.idle_html.clone(),
            disabled: false,
            remove_class: config.busy_class.clone(),
            add_class: config.idle_class.clone(),
        }
    }
}

/// Result of one refresh round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The job was queued; show `message`, then reload.
    Triggered {
        message: String,
        reload_after_ms: u32,
    },
    /// Show `message` and put the control back.
    Failed {
        message: String,
        restore: ControlView,
    },
}

impl RefreshOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Triggered { message, .. } | Self::Failed { message, .. } => message,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Triggered { .. } => Severity::Success,
            Self::Failed { .. } => Severity::Error,
        }
    }
}

/// Phase tracker for one refresh control.
#[derive(Clone, Debug, Default)]
pub struct RefreshControl {
    phase: RefreshPhase,
    /// Markup the control had before the busy state replaced it.
    saved_html: Option<String>,
}

impl RefreshControl {
    #[cfg(test)]
    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    /// Start a refresh from a control currently showing `current_html`.
    /// `None` while one is already in flight.
    pub fn begin(&mut self, config: &RefreshConfig, current_html: &str) -> Option<ControlView> {
        if self.phase == RefreshPhase::Busy {
            return None;
        }
        self.phase = RefreshPhase::Busy;
        self.saved_html = None;
        if !current_html.trim().is_empty() {
            self.saved_html = Some(current_html.to_owned());
        }
        Some(ControlView::busy(config))
    }

    /// Settle the in-flight refresh. A success stays busy until the reload;
    /// a failure restores the markup saved by [`Self::begin`], or the
    /// configured idle label when there was none.
    pub fn finish(
        &mut self,
        config: &RefreshConfig,
        result: Result<RefreshNewsResponse, NewsroomError>,
    ) -> RefreshOutcome {
        match result {
            Ok(resp) => RefreshOutcome::Triggered {
                message: resp
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| config.fallback_message.clone()),
                reload_after_ms: config.reload_delay_ms,
            },
            Err(err) => {
                log::error!("Error refreshing news: {err}");
                self.phase = RefreshPhase::Idle;
                let mut restore = ControlView::idle(config);
                if let Some(html) = self.saved_html.take() {
                    restore.html = html;
                }
                RefreshOutcome::Failed {
                    message: config.failure_message.clone(),
                    restore,
                }
            }
        }
    }
}
