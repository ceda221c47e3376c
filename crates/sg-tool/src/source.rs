use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{SgToolError, TestCase, TESTCASE_FILE_NAME, TESTCASE_SCHEMA_V1};

/// Finds every `testcase.json` under `root`, sorted by path.
pub fn discover_cases(root: &Path) -> Result<Vec<PathBuf>, SgToolError> {
    let mut cases: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == TESTCASE_FILE_NAME)
        .map(|entry| entry.into_path())
        .collect();

    if cases.is_empty() {
        return Err(SgToolError::CasesEmpty {
            path: root.to_path_buf(),
        });
    }

    cases.sort();
    Ok(cases)
}

pub fn read_test_case(case_path: &Path) -> Result<TestCase, SgToolError> {
    let raw = fs::read_to_string(case_path).map_err(|source| SgToolError::ReadFile {
        path: case_path.to_path_buf(),
        source,
    })?;
    let parsed: TestCase = serde_json::from_str(&raw).map_err(|source| SgToolError::ParseCase {
        path: case_path.to_path_buf(),
        source,
    })?;

    if parsed.schema_version != TESTCASE_SCHEMA_V1 {
        return Err(SgToolError::InvalidSchemaVersion {
            expected: TESTCASE_SCHEMA_V1.to_string(),
            found: parsed.schema_version,
        });
    }

    Ok(parsed)
}
