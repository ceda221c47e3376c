mod case;
mod runner;
mod source;

pub use case::{RenderStep, TestCase, TESTCASE_SCHEMA_V1};
pub use runner::{assert_case, run_case, RunReport};
pub use source::{discover_cases, read_test_case};

use std::path::PathBuf;

use thiserror::Error;

pub const TESTCASE_FILE_NAME: &str = "testcase.json";

#[derive(Debug, Error)]
pub enum SgToolError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse testcase {path}: {source}")]
    ParseCase {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid testcase schema version \"{found}\", expected \"{expected}\".")]
    InvalidSchemaVersion { expected: String, found: String },
    #[error("No testcase.json files under {path}.")]
    CasesEmpty { path: PathBuf },
    #[error("Render error: {0}")]
    Render(#[from] sg_core::ScriptGuardError),
    #[error("Step {step_index} uses invalid event name \"{event}\".")]
    InvalidEvent { step_index: usize, event: String },
    #[error("Rendered HTML mismatch.\nexpected: {expected}\nactual:   {actual}")]
    HtmlMismatch { expected: String, actual: String },
}

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn fixtures_root() -> PathBuf {
    workspace_root().join("fixtures").join("render-cases")
}
