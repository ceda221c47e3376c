//! Building JavaScript call text that is safe to drop into HTML.

mod call;
mod compose;
mod encode;
mod escape;
mod name;

pub use call::{bind_call, build_call, safe_script, safe_script_inline};
pub use compose::{compose_script, script_identifier, SCRIPT_IDENTIFIER_PREFIX};
pub use encode::{
    encode_param, safe_encode, to_script_json, ScriptSafeFormatter, PLACEHOLDER_LITERAL,
};
pub use escape::{escape_html, escape_html_into};
pub use name::{is_valid_function_name, sanitize_function_name, INVALID_FUNCTION_NAME};
