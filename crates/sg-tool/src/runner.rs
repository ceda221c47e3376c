use std::io::Write;
use std::path::Path;

use sg_api::{
    escape_html, render_pass, render_script_call, render_script_items, safe_script,
    safe_script_inline, Component, RenderContext, ScriptGuardError,
};

use crate::source::read_test_case;
use crate::{RenderStep, SgToolError, TestCase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub html: String,
    pub rendered_scripts: Vec<String>,
    pub steps: usize,
}

pub fn run_case(case: &TestCase) -> Result<RunReport, SgToolError> {
    for (step_index, step) in case.steps.iter().enumerate() {
        if let RenderStep::Handler { event, .. } = step {
            if event.is_empty() || !event.chars().all(|ch| ch.is_ascii_lowercase()) {
                return Err(SgToolError::InvalidEvent {
                    step_index,
                    event: event.clone(),
                });
            }
        }
    }

    let rendered = render_pass(case.options.clone(), |ctx, out| {
        for step in &case.steps {
            tracing::debug!("applying {} step", step.kind_name());
            apply_step(ctx, out, step)?;
        }
        Ok(())
    })?;

    Ok(RunReport {
        html: rendered.html,
        rendered_scripts: rendered.summary.rendered_scripts,
        steps: case.steps.len(),
    })
}

fn apply_step(
    ctx: &RenderContext,
    out: &mut Vec<u8>,
    step: &RenderStep,
) -> Result<(), ScriptGuardError> {
    match step {
        RenderStep::Definitions { scripts } => render_script_items(ctx, out, scripts),
        RenderStep::Component { script } => script.render(ctx, out),
        RenderStep::Call { name, params } => {
            render_script_call(ctx, out, &safe_script_inline(name, params))
        }
        RenderStep::Handler {
            event,
            name,
            params,
            label,
        } => write!(
            out,
            "<button on{}=\"{}\">{}</button>",
            event,
            safe_script(name, params),
            escape_html(label)
        )
        .map_err(|error| ScriptGuardError::new("RENDER_WRITE", error.to_string())),
    }
}

pub fn assert_case(case_path: &Path) -> Result<(), SgToolError> {
    let case = read_test_case(case_path)?;
    let report = run_case(&case)?;

    if report.html != case.expected_html {
        return Err(SgToolError::HtmlMismatch {
            expected: case.expected_html,
            actual: report.html,
        });
    }

    Ok(())
}

#[cfg(test)]
mod runner_tests {
    use super::*;

    use sg_core::{JsParam, RenderOptions, ScriptDescriptor};
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should move forward")
            .as_nanos();
        std::env::temp_dir().join(format!("sg-tool-runner-{}-{}", name, nanos))
    }

    fn write_file(path: &Path, content: &str) {
        let parent = path.parent().expect("path should have parent");
        fs::create_dir_all(parent).expect("parent dir should be created");
        fs::write(path, content).expect("file should be written");
    }

    fn simple_case(steps: Vec<RenderStep>) -> TestCase {
        TestCase {
            schema_version: crate::TESTCASE_SCHEMA_V1.to_string(),
            options: RenderOptions::default(),
            steps,
            expected_html: String::new(),
        }
    }

    #[test]
    fn run_case_deduplicates_definitions_across_steps() {
        let f = ScriptDescriptor::new("f", "function f(){}");
        let case = simple_case(vec![
            RenderStep::Definitions {
                scripts: vec![f.clone()],
            },
            RenderStep::Definitions { scripts: vec![f] },
        ]);

        let report = run_case(&case).expect("run should pass");
        assert_eq!(report.html, "<script>function f(){}</script>");
        assert_eq!(report.rendered_scripts, vec!["f"]);
        assert_eq!(report.steps, 2);
    }

    #[test]
    fn run_case_renders_calls_and_handlers() {
        let mut case = simple_case(vec![
            RenderStep::Call {
                name: "1bad".to_string(),
                params: Vec::new(),
            },
            RenderStep::Handler {
                event: "click".to_string(),
                name: "alert".to_string(),
                params: vec![JsParam::from("a\"b")],
                label: "<Go>".to_string(),
            },
        ]);
        case.options = RenderOptions::with_nonce("abc");

        let report = run_case(&case).expect("run should pass");
        assert_eq!(
            report.html,
            r#"<script nonce="abc">__templ_invalid_js_function_name()</script><button onclick="alert(&#34;a\&#34;b&#34;)">&lt;Go&gt;</button>"#
        );
        assert!(report.rendered_scripts.is_empty());
    }

    #[test]
    fn run_case_rejects_invalid_event_names() {
        let case = simple_case(vec![RenderStep::Handler {
            event: "click=\"x\" onload".to_string(),
            name: "alert".to_string(),
            params: Vec::new(),
            label: String::new(),
        }]);
        let error = run_case(&case).expect_err("bad event should fail");
        assert!(matches!(
            error,
            SgToolError::InvalidEvent { step_index: 0, .. }
        ));
    }

    #[test]
    fn assert_case_reports_html_mismatch() {
        let root = temp_dir("mismatch");
        let case_path = root.join("testcase.json");
        write_file(
            &case_path,
            r#"{
  "schemaVersion":"sg-tool-case.v1",
  "steps":[{"kind":"call","name":"alert"}],
  "expectedHtml":"<script>confirm()</script>"
}"#,
        );

        let error = assert_case(&case_path).expect_err("mismatch should fail");
        assert!(matches!(error, SgToolError::HtmlMismatch { .. }));
    }

    #[test]
    fn assert_case_passes_with_matching_html() {
        let root = temp_dir("assert-pass");
        let case_path = root.join("testcase.json");
        write_file(
            &case_path,
            r#"{
  "schemaVersion":"sg-tool-case.v1",
  "steps":[
    {"kind":"component","script":{"name":"f","functionBody":"F;","call":"f()","callInline":"f()"}},
    {"kind":"component","script":{"name":"f","functionBody":"F;","call":"f()","callInline":"f()"}}
  ],
  "expectedHtml":"<script>F;</script><script>f()</script><script>f()</script>"
}"#,
        );

        assert_case(&case_path).expect("assert should pass");
    }
}
