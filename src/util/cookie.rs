//! `document.cookie` parsing.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Look up `name` in a raw `document.cookie` string.
///
/// Entries are `;`-separated and trimmed; the first entry starting with
/// `name=` wins. The value is percent-decoded. A value that is not valid
/// percent-encoded UTF-8 is returned as-is.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() || name.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
        .map(decode_value)
}

fn decode_value(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_owned(),
    }
}

/// Read `name` from the live document's cookies.
#[cfg(feature = "hydrate")]
pub fn document_cookie(name: &str) -> Option<String> {
    let raw = crate::util::dom::cookie_string()?;
    read_cookie(&raw, name)
}
