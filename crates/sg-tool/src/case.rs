use serde::{Deserialize, Serialize};
use sg_core::{JsParam, RenderOptions, ScriptDescriptor};

pub const TESTCASE_SCHEMA_V1: &str = "sg-tool-case.v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub schema_version: String,
    #[serde(default)]
    pub options: RenderOptions,
    #[serde(default)]
    pub steps: Vec<RenderStep>,
    pub expected_html: String,
}

/// One action against the render pass, applied in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderStep {
    /// Emit the definitions of several scripts in one element.
    Definitions { scripts: Vec<ScriptDescriptor> },
    /// Render a single script as a component: definition, then its call.
    Component { script: ScriptDescriptor },
    /// Emit an inline invocation built from a name and parameters.
    Call {
        name: String,
        #[serde(default)]
        params: Vec<JsParam>,
    },
    /// Write a `<button>` whose event attribute invokes the named function.
    Handler {
        event: String,
        name: String,
        #[serde(default)]
        params: Vec<JsParam>,
        #[serde(default)]
        label: String,
    },
}

impl RenderStep {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Definitions { .. } => "definitions",
            Self::Component { .. } => "component",
            Self::Call { .. } => "call",
            Self::Handler { .. } => "handler",
        }
    }
}

#[cfg(test)]
mod case_tests {
    use super::*;

    #[test]
    fn render_step_kind_name_reports_expected_value() {
        let step = RenderStep::Call {
            name: "alert".to_string(),
            params: Vec::new(),
        };
        assert_eq!(step.kind_name(), "call");
        assert_eq!(
            RenderStep::Definitions {
                scripts: Vec::new()
            }
            .kind_name(),
            "definitions"
        );
    }

    #[test]
    fn testcase_deserialize_applies_defaults() {
        let parsed: TestCase = serde_json::from_str(
            r#"{
  "schemaVersion": "sg-tool-case.v1",
  "expectedHtml": ""
}"#,
        )
        .expect("testcase should deserialize");

        assert_eq!(parsed.schema_version, TESTCASE_SCHEMA_V1);
        assert_eq!(parsed.options, RenderOptions::default());
        assert!(parsed.steps.is_empty());
        assert!(parsed.expected_html.is_empty());
    }

    #[test]
    fn render_step_deserialize_supports_all_variants() {
        let parsed: Vec<RenderStep> = serde_json::from_str(
            r#"[
  {"kind":"definitions","scripts":[{"name":"f","functionBody":"function f(){}"}]},
  {"kind":"component","script":{"name":"g","functionBody":"G;","call":"g()","callInline":"g()"}},
  {"kind":"call","name":"alert","params":[{"kind":"value","value":1}]},
  {"kind":"handler","event":"click","name":"alert","label":"Go"}
]"#,
        )
        .expect("steps should deserialize");

        assert_eq!(parsed.len(), 4);
        assert!(matches!(parsed[0], RenderStep::Definitions { .. }));
        assert!(matches!(parsed[1], RenderStep::Component { .. }));
        assert!(matches!(parsed[2], RenderStep::Call { .. }));
        assert!(matches!(
            &parsed[3],
            RenderStep::Handler { params, .. } if params.is_empty()
        ));
    }
}
