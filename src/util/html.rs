//! HTML text escaping for server-supplied strings placed via `innerHTML`.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

/// Escape `&`, `<`, `>`, `"` and `'` so `text` renders literally.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
