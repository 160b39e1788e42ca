use super::*;

#[test]
fn status_error_names_endpoint_and_code() {
    let err = NewsroomError::Status {
        endpoint: "/api/refresh-news/".into(),
        status: 403,
    };
    assert_eq!(err.to_string(), "/api/refresh-news/ failed: 403");
}

#[test]
fn config_error_converts_from_serde_json() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json");
    let Err(source) = parse else {
        panic!("expected a parse error");
    };
    let err = NewsroomError::from(source);
    assert!(matches!(err, NewsroomError::Config(_)));
    assert!(err.to_string().starts_with("invalid page config:"));
}

#[test]
fn unavailable_error_mentions_browser() {
    let err = NewsroomError::Unavailable("/toggle-bookmark/".into());
    assert_eq!(err.to_string(), "/toggle-bookmark/ is only available in the browser");
}
