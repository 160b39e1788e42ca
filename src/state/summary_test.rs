use super::*;

fn some(id: &str) -> Option<String> {
    Some(id.to_owned())
}

#[test]
fn form_prefers_data_attribute() {
    assert_eq!(form_article_id(some("5"), some("9")), some("5"));
}

#[test]
fn form_falls_back_to_input_value() {
    assert_eq!(form_article_id(None, some(" 9 ")), some("9"));
    assert_eq!(form_article_id(some(""), some("9")), some("9"));
}

#[test]
fn form_without_id_is_none() {
    assert_eq!(form_article_id(None, None), None);
    assert_eq!(form_article_id(some(" "), some("")), None);
}

#[test]
fn batch_dedupes_and_keeps_document_order() {
    let ids = batch_article_ids([some("3"), some("1"), some("3"), some("2")], 5);
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn batch_skips_missing_and_blank_ids() {
    let ids = batch_article_ids([None, some(""), some(" 4 ")], 5);
    assert_eq!(ids, vec!["4"]);
}

#[test]
fn batch_is_capped_at_limit() {
    let raw = (1..=8).map(|i| Some(i.to_string()));
    assert_eq!(batch_article_ids(raw, 5), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn batch_with_zero_limit_is_empty() {
    assert!(batch_article_ids([some("1")], 0).is_empty());
}
