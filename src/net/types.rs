//! JSON response bodies returned by the site's endpoints.
//!
//! Every field is optional on the wire. Handlers treat a missing field as
//! "nothing to apply" rather than as a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST /toggle-bookmark/`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleBookmarkResponse {
    /// Bookmark state after the toggle. `null` and absent are treated alike.
    #[serde(default)]
    pub bookmarked: Option<bool>,
}

/// `POST /api/refresh-news/`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshNewsResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// `POST /fetch-missing-summaries/`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBatchResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Article ids the server queued for summarization.
    #[serde(default)]
    pub triggered: Vec<i64>,
}
