use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_endpoints_match_site_routes() {
    let config = NewsroomConfig::default();
    assert_eq!(config.bookmark.endpoint, "/toggle-bookmark/");
    assert_eq!(config.refresh.endpoint, "/api/refresh-news/");
    assert_eq!(config.summary.endpoint, "/fetch-summary-single/");
    assert_eq!(config.summary.batch_endpoint, "/fetch-missing-summaries/");
}

#[test]
fn default_csrf_reads_django_cookie() {
    let config = NewsroomConfig::default();
    assert_eq!(config.csrf.cookie_name, "csrftoken");
    assert_eq!(config.csrf.header_name, "X-CSRFToken");
}

#[test]
fn default_refresh_posts_and_toasts() {
    let refresh = RefreshConfig::default();
    assert_eq!(refresh.method, HttpMethod::Post);
    assert_eq!(refresh.notify, NotifyStyle::Toast);
    assert_eq!(refresh.reload_delay_ms, 2000);
    assert_eq!(refresh.button_id, "refreshNews");
}

#[test]
fn default_toast_delay_is_three_seconds() {
    assert_eq!(ToastConfig::default().delay_ms, 3000);
}

#[test]
fn default_batch_trigger_is_off_and_capped() {
    let summary = SummaryConfig::default();
    assert!(!summary.batch_enabled);
    assert_eq!(summary.batch_limit, 5);
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_override_yields_defaults() {
    let config = NewsroomConfig::from_json("  \n").unwrap();
    assert_eq!(config, NewsroomConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let raw = r#"{"refresh": {"method": "GET", "notify": "alert", "reload_delay_ms": 1000}}"#;
    let config = NewsroomConfig::from_json(raw).unwrap();
    assert_eq!(config.refresh.method, HttpMethod::Get);
    assert_eq!(config.refresh.notify, NotifyStyle::Alert);
    assert_eq!(config.refresh.reload_delay_ms, 1000);
    assert_eq!(config.refresh.endpoint, "/api/refresh-news/");
    assert_eq!(config.bookmark, BookmarkConfig::default());
}

#[test]
fn malformed_override_is_config_error() {
    let err = NewsroomConfig::from_json("{\"refresh\": ").unwrap_err();
    assert!(matches!(err, NewsroomError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = NewsroomConfig::from_json(r#"{"toast": {"delay_ms": "soon"}}"#).unwrap_err();
    assert!(matches!(err, NewsroomError::Config(_)));
}

#[test]
fn unknown_method_is_rejected() {
    assert!(NewsroomConfig::from_json(r#"{"refresh": {"method": "PATCH"}}"#).is_err());
}

// =============================================================
// Log level
// =============================================================

#[test]
fn log_level_parses_known_names() {
    let config = NewsroomConfig {
        log_level: "debug".to_owned(),
        ..NewsroomConfig::default()
    };
    assert_eq!(config.log_level(), log::Level::Debug);
}

#[test]
fn log_level_falls_back_to_info() {
    let config = NewsroomConfig {
        log_level: "chatty".to_owned(),
        ..NewsroomConfig::default()
    };
    assert_eq!(config.log_level(), log::Level::Info);
}
