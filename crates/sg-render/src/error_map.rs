use sg_core::ScriptGuardError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> ScriptGuardError {
    ScriptGuardError::new(code, error.to_string())
}

pub(crate) fn map_render_write(error: std::io::Error) -> ScriptGuardError {
    map_error("RENDER_WRITE", error)
}

#[cfg(test)]
mod error_map_tests {
    use super::*;

    #[test]
    fn map_render_write_keeps_code_and_message() {
        let error = map_render_write(std::io::Error::other("pipe closed"));
        assert_eq!(error.code, "RENDER_WRITE");
        assert_eq!(error.message, "pipe closed");
    }
}
