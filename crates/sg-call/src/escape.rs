/// Escapes text for HTML element content or a quoted attribute value.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(&mut out, text);
    out
}

pub fn escape_html_into(out: &mut String, text: &str) {
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        let entity = match ch {
            '&' => "&amp;",
            '\'' => "&#39;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&#34;",
            _ => continue,
        };
        out.push_str(&text[start..index]);
        out.push_str(entity);
        start = index + ch.len_utf8();
    }
    out.push_str(&text[start..]);
}
