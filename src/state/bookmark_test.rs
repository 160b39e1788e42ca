use super::*;

fn response(bookmarked: Option<bool>) -> ToggleBookmarkResponse {
    ToggleBookmarkResponse { bookmarked }
}

// =============================================================
// BookmarkButton
// =============================================================

#[test]
fn button_reads_article_id_and_flag() {
    let button = BookmarkButton::from_attributes(Some("12"), Some("true")).unwrap();
    assert_eq!(button.article_id, "12");
    assert!(button.bookmarked);
}

#[test]
fn button_flag_is_false_unless_exactly_true() {
    for raw in [None, Some("false"), Some("True"), Some("1"), Some("")] {
        let button = BookmarkButton::from_attributes(Some("3"), raw).unwrap();
        assert!(!button.bookmarked, "{raw:?} should not count as bookmarked");
    }
}

#[test]
fn button_without_article_id_is_rejected() {
    assert_eq!(BookmarkButton::from_attributes(None, Some("true")), None);
    assert_eq!(BookmarkButton::from_attributes(Some("  "), Some("true")), None);
}

// =============================================================
// plan_toggle
// =============================================================

#[test]
fn bookmarked_response_switches_to_active_variant() {
    let config = BookmarkConfig::default();
    let patch = plan_toggle(&config, &response(Some(true)), "/").unwrap();
    assert!(patch.bookmarked);
    assert_eq!(patch.label, "Bookmarked");
    assert_eq!(patch.add_class, "btn-warning");
    assert_eq!(patch.remove_class, "btn-outline-warning");
    assert_eq!(patch.attribute_value(), "true");
    assert!(!patch.remove_card);
}

#[test]
fn unbookmarked_response_switches_to_outline_variant() {
    let config = BookmarkConfig::default();
    let patch = plan_toggle(&config, &response(Some(false)), "/article/5/").unwrap();
    assert!(!patch.bookmarked);
    assert_eq!(patch.label, "Bookmark");
    assert_eq!(patch.add_class, "btn-outline-warning");
    assert_eq!(patch.remove_class, "btn-warning");
    assert_eq!(patch.attribute_value(), "false");
    assert!(!patch.remove_card);
}

#[test]
fn unbookmarked_on_listing_page_removes_card() {
    let config = BookmarkConfig::default();
    let patch = plan_toggle(&config, &response(Some(false)), "/bookmarks/").unwrap();
    assert!(patch.remove_card);
}

#[test]
fn listing_match_is_a_substring_match() {
    let config = BookmarkConfig::default();
    let patch = plan_toggle(&config, &response(Some(false)), "/api/bookmarks/page/2").unwrap();
    assert!(patch.remove_card);
}

#[test]
fn bookmarked_on_listing_page_keeps_card() {
    let config = BookmarkConfig::default();
    let patch = plan_toggle(&config, &response(Some(true)), "/bookmarks/").unwrap();
    assert!(!patch.remove_card);
}

#[test]
fn response_without_flag_changes_nothing() {
    let config = BookmarkConfig::default();
    assert_eq!(plan_toggle(&config, &response(None), "/bookmarks/"), None);
}

#[test]
fn empty_listing_path_never_removes_cards() {
    let config = BookmarkConfig {
        listing_path: String::new(),
        ..BookmarkConfig::default()
    };
    let patch = plan_toggle(&config, &response(Some(false)), "/bookmarks/").unwrap();
    assert!(!patch.remove_card);
}

#[test]
fn custom_labels_and_classes_flow_through() {
    let config = BookmarkConfig {
        active_class: "saved".to_owned(),
        active_label: "Saved".to_owned(),
        ..BookmarkConfig::default()
    };
    let patch = plan_toggle(&config, &response(Some(true)), "/").unwrap();
    assert_eq!(patch.add_class, "saved");
    assert_eq!(patch.label, "Saved");
}
