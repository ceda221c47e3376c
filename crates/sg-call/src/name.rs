use std::sync::OnceLock;

use regex::Regex;

pub const INVALID_FUNCTION_NAME: &str = "__templ_invalid_js_function_name";

/// Accepts references like `alert` or `console.error`: dot-separated
/// segments of at least three identifier characters, none starting with a
/// digit.
pub fn is_valid_function_name(name: &str) -> bool {
    function_name_regex().is_match(name)
}

/// Returns the name to emit and whether the input was accepted as-is.
pub fn sanitize_function_name(name: &str) -> (&str, bool) {
    if is_valid_function_name(name) {
        return (name, true);
    }
    tracing::warn!(
        "rejected javascript function name {:?}, using {}",
        name,
        INVALID_FUNCTION_NAME
    );
    (INVALID_FUNCTION_NAME, false)
}

fn function_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[$_a-zA-Z][$_a-zA-Z0-9]{2,}(?:\.[$_a-zA-Z][$_a-zA-Z0-9]{2,})*$")
            .expect("function name regex")
    })
}
