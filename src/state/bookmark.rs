//! Bookmark button state and the patch applied after a toggle.

#[cfg(test)]
#[path = "bookmark_test.rs"]
mod bookmark_test;

use crate::config::BookmarkConfig;
use crate::net::types::ToggleBookmarkResponse;

/// State stored in a button's `data-article-id` / `data-bookmarked`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookmarkButton {
    pub article_id: String,
    pub bookmarked: bool,
}

impl BookmarkButton {
    /// Build from raw attribute values. `None` when the article id is
    /// missing or blank; only the exact string `"true"` counts as bookmarked.
    pub fn from_attributes(article_id: Option<&str>, bookmarked: Option<&str>) -> Option<Self> {
        let article_id = article_id.map(str::trim).filter(|id| !id.is_empty())?;
        Some(Self {
            article_id: article_id.to_owned(),
            bookmarked: bookmarked == Some("true"),
        })
    }
}

/// DOM changes for one confirmed toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub bookmarked: bool,
    pub remove_class: String,
    pub add_class: String,
    pub label: String,
    /// Drop the enclosing card (unbookmarked on the listing page).
    pub remove_card: bool,
}

impl BookmarkPatch {
    /// Value written back to `data-bookmarked`.
    pub fn attribute_value(&self) -> &'static str {
        if self.bookmarked { "true" } else { "false" }
    }
}

/// Decide what a toggle response changes. `None` when the response carries
/// no bookmark flag, in which case the button is left as it was.
pub fn plan_toggle(
    config: &BookmarkConfig,
    response: &ToggleBookmarkResponse,
    pathname: &str,
) -> Option<BookmarkPatch> {
    let bookmarked = response.bookmarked?;
    let patch = if bookmarked {
        BookmarkPatch {
            bookmarked,
            remove_class: config.inactive_class.clone(),
            add_class: config.active_class.clone(),
            label: config.active_label.clone(),
            remove_card: false,
        }
    } else {
        BookmarkPatch {
            bookmarked,
            remove_class: config.active_class.clone(),
            add_class: config.inactive_class.clone(),
            label: config.inactive_label.clone(),
            remove_card: !config.listing_path.is_empty()
                && pathname.contains(&config.listing_path),
        }
    };
    Some(patch)
}
