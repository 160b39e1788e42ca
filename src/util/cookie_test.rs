use super::*;

#[test]
fn returns_value_for_existing_cookie() {
    let cookies = "sessionid=abc; csrftoken=Tok3n; theme=dark";
    assert_eq!(read_cookie(cookies, "csrftoken").as_deref(), Some("Tok3n"));
}

#[test]
fn returns_none_for_missing_cookie() {
    assert_eq!(read_cookie("sessionid=abc; theme=dark", "csrftoken"), None);
}

#[test]
fn returns_none_for_empty_cookie_string() {
    assert_eq!(read_cookie("", "csrftoken"), None);
}

#[test]
fn decodes_percent_encoded_value() {
    let cookies = "greeting=hello%20world%21; other=1";
    assert_eq!(read_cookie(cookies, "greeting").as_deref(), Some("hello world!"));
}

#[test]
fn plus_sign_is_not_a_space() {
    assert_eq!(read_cookie("q=a+b", "q").as_deref(), Some("a+b"));
}

#[test]
fn does_not_match_name_prefix() {
    let cookies = "csrftoken_old=stale; csrftoken=fresh";
    assert_eq!(read_cookie(cookies, "csrftoken").as_deref(), Some("fresh"));
}

#[test]
fn does_not_match_name_suffix() {
    assert_eq!(read_cookie("xcsrftoken=nope", "csrftoken"), None);
}

#[test]
fn first_matching_entry_wins() {
    assert_eq!(read_cookie("a=1; a=2", "a").as_deref(), Some("1"));
}

#[test]
fn tolerates_whitespace_around_entries() {
    assert_eq!(read_cookie("  a=1 ;   b=2  ", "b").as_deref(), Some("2"));
}

#[test]
fn empty_value_is_present_but_empty() {
    assert_eq!(read_cookie("a=; b=2", "a").as_deref(), Some(""));
}

#[test]
fn value_may_contain_equals_sign() {
    assert_eq!(read_cookie("token=abc==", "token").as_deref(), Some("abc=="));
}

#[test]
fn invalid_percent_encoding_is_returned_raw() {
    assert_eq!(read_cookie("bad=%FF%FE", "bad").as_deref(), Some("%FF%FE"));
}
