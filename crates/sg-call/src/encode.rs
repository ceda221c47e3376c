use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use sg_core::JsParam;

/// Emitted in place of an argument that could not be serialized.
pub const PLACEHOLDER_LITERAL: &str = "null";

/// Compact JSON formatter whose string output cannot terminate a `<script>`
/// element or open markup: `<`, `>`, `&` and the JS line separators are
/// written as `\uXXXX` escapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptSafeFormatter;

impl Formatter for ScriptSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

pub fn to_script_json<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::with_capacity(64);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, ScriptSafeFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

/// Returns the JavaScript text for one argument and whether it was encoded
/// normally. `false` means [`PLACEHOLDER_LITERAL`] was substituted.
pub fn safe_encode(param: &JsParam) -> (String, bool) {
    match param {
        JsParam::Expression(expression) => (expression.as_str().to_string(), true),
        JsParam::Value(value) => match to_script_json(value) {
            Ok(encoded) => (encoded, true),
            Err(error) => {
                tracing::warn!("failed to encode script parameter: {}", error);
                (PLACEHOLDER_LITERAL.to_string(), false)
            }
        },
        JsParam::Unencodable(reason) => {
            tracing::warn!("script parameter is not serializable: {}", reason);
            (PLACEHOLDER_LITERAL.to_string(), false)
        }
    }
}

pub fn encode_param(param: &JsParam) -> String {
    safe_encode(param).0
}
