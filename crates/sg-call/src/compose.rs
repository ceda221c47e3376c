use std::sync::OnceLock;

use regex::Regex;
use sg_core::{ScriptDescriptor, ScriptGuardError};
use xxhash_rust::xxh3::xxh3_64;

pub const SCRIPT_IDENTIFIER_PREFIX: &str = "__templ_";

/// Global identifier for a composed script. The suffix is a digest of the
/// signature and body, so changed code never reuses a name a page may
/// already have defined.
pub fn script_identifier(name: &str, signature_and_body: &str) -> String {
    format!(
        "{}{}_{:016x}",
        SCRIPT_IDENTIFIER_PREFIX,
        name,
        xxh3_64(signature_and_body.as_bytes())
    )
}

/// Builds the descriptor for an application-authored function.
///
/// `name` and every entry of `args` must be plain JavaScript identifiers.
/// The returned descriptor has no call bound; see [`crate::bind_call`].
pub fn compose_script(
    name: &str,
    args: &[&str],
    body: &str,
) -> Result<ScriptDescriptor, ScriptGuardError> {
    if !identifier_regex().is_match(name) {
        return Err(ScriptGuardError::new(
            "SCRIPT_NAME_INVALID",
            format!("Script name \"{}\" is not a JavaScript identifier.", name),
        ));
    }
    if let Some(arg) = args.iter().find(|arg| !identifier_regex().is_match(arg)) {
        return Err(ScriptGuardError::new(
            "SCRIPT_ARG_INVALID",
            format!(
                "Argument \"{}\" of script \"{}\" is not a JavaScript identifier.",
                arg, name
            ),
        ));
    }

    let signature_and_body = format!("({}){{{}}}", args.join(", "), body);
    let identifier = script_identifier(name, &signature_and_body);
    let function_body = format!("function {}{}", identifier, signature_and_body);
    Ok(ScriptDescriptor::new(identifier, function_body))
}

fn identifier_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[$_a-zA-Z][$_a-zA-Z0-9]*$").expect("identifier regex"))
}
