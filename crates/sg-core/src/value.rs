use serde::{Deserialize, Serialize};

/// JavaScript source the caller vouches for, passed to a call unencoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsExpression(pub String);

impl JsExpression {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One argument of a client-side call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum JsParam {
    Expression(JsExpression),
    Value(serde_json::Value),
    /// A value whose serialization failed; carries the serializer message.
    #[serde(skip)]
    Unencodable(String),
}

impl JsParam {
    /// Captures any serializable value. Failures are kept as
    /// [`JsParam::Unencodable`] so rendering can continue with a placeholder.
    pub fn value<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Unencodable(error.to_string()),
        }
    }

    pub fn expression(source: impl Into<String>) -> Self {
        Self::Expression(JsExpression::new(source))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Expression(_) => "expression",
            Self::Value(_) => "value",
            Self::Unencodable(_) => "unencodable",
        }
    }
}

impl From<JsExpression> for JsParam {
    fn from(value: JsExpression) -> Self {
        Self::Expression(value)
    }
}

impl From<serde_json::Value> for JsParam {
    fn from(value: serde_json::Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for JsParam {
    fn from(value: &str) -> Self {
        Self::Value(serde_json::Value::String(value.to_string()))
    }
}

impl From<String> for JsParam {
    fn from(value: String) -> Self {
        Self::Value(serde_json::Value::String(value))
    }
}

impl From<bool> for JsParam {
    fn from(value: bool) -> Self {
        Self::Value(serde_json::Value::Bool(value))
    }
}

impl From<i64> for JsParam {
    fn from(value: i64) -> Self {
        Self::Value(serde_json::Value::from(value))
    }
}

impl From<f64> for JsParam {
    fn from(value: f64) -> Self {
        Self::value(&value)
    }
}

#[cfg(test)]
mod value_tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn value_captures_serializable_input() {
        let param = JsParam::value(&vec![1, 2, 3]);
        assert_eq!(param, JsParam::Value(serde_json::json!([1, 2, 3])));
        assert_eq!(param.kind_name(), "value");
    }

    #[test]
    fn value_keeps_serialization_failures() {
        let mut map = HashMap::new();
        map.insert((1, 2), "tuple keys are not json");
        let param = JsParam::value(&map);
        assert!(matches!(param, JsParam::Unencodable(_)));
        assert_eq!(param.kind_name(), "unencodable");
    }

    #[test]
    fn conversions_pick_expected_variants() {
        assert_eq!(JsParam::from("x"), JsParam::Value(serde_json::json!("x")));
        assert_eq!(JsParam::from(true), JsParam::Value(serde_json::json!(true)));
        assert_eq!(JsParam::from(7_i64), JsParam::Value(serde_json::json!(7)));
        assert_eq!(JsParam::from(1.5), JsParam::Value(serde_json::json!(1.5)));
        assert_eq!(
            JsParam::from(JsExpression::new("event")),
            JsParam::expression("event")
        );
    }

    #[test]
    fn params_deserialize_from_tagged_json() {
        let parsed: Vec<JsParam> = serde_json::from_str(
            r#"[
  {"kind":"expression","value":"event"},
  {"kind":"value","value":{"id":3}}
]"#,
        )
        .expect("params should deserialize");
        assert_eq!(parsed[0], JsParam::expression("event"));
        assert_eq!(parsed[1], JsParam::Value(serde_json::json!({"id": 3})));
    }
}
