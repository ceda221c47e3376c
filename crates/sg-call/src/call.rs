use sg_core::{CallMode, JsParam, ScriptDescriptor};

use crate::encode::safe_encode;
use crate::escape::escape_html_into;
use crate::name::sanitize_function_name;

/// Composes `name(p1,p2,...)`.
///
/// In [`CallMode::AttributeSafe`] the name and each encoded argument are
/// HTML-escaped one at a time, so the structural punctuation stays literal
/// while quotes and markup inside string arguments become entities.
/// [`CallMode::InlineRaw`] inserts the same tokens unescaped.
pub fn build_call(function_name: &str, params: &[JsParam], mode: CallMode) -> String {
    let (function_name, _) = sanitize_function_name(function_name);
    let mut call = String::with_capacity(function_name.len() + 2 + params.len() * 8);
    push_token(&mut call, function_name, mode);
    call.push('(');
    for (index, param) in params.iter().enumerate() {
        if index > 0 {
            call.push(',');
        }
        let (encoded, _) = safe_encode(param);
        push_token(&mut call, &encoded, mode);
    }
    call.push(')');
    call
}

fn push_token(call: &mut String, token: &str, mode: CallMode) {
    match mode {
        CallMode::AttributeSafe => escape_html_into(call, token),
        CallMode::InlineRaw => call.push_str(token),
    }
}

/// Call text for an HTML attribute such as `onclick`.
pub fn safe_script(function_name: &str, params: &[JsParam]) -> String {
    build_call(function_name, params, CallMode::AttributeSafe)
}

/// Call text for the body of a `<script>` element.
pub fn safe_script_inline(function_name: &str, params: &[JsParam]) -> String {
    build_call(function_name, params, CallMode::InlineRaw)
}

/// Fills both call forms of `descriptor` with an invocation of its own name.
pub fn bind_call(mut descriptor: ScriptDescriptor, params: &[JsParam]) -> ScriptDescriptor {
    descriptor.call = safe_script(&descriptor.name, params);
    descriptor.call_inline = safe_script_inline(&descriptor.name, params);
    descriptor
}
