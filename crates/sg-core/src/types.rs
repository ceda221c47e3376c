use serde::{Deserialize, Serialize};

/// A client-side function a component wants available in the page.
///
/// `name` is the only identity used for deduplication within a render pass;
/// two descriptors sharing a name are the same function even if their bodies
/// differ, and whichever is seen first wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDescriptor {
    pub name: String,
    /// Function definition source, authored by the application.
    pub function_body: String,
    /// Call expression with HTML-escaped arguments, for attribute values such
    /// as `onclick`.
    #[serde(default)]
    pub call: String,
    /// The same call without HTML escaping, for `<script>` bodies.
    #[serde(default)]
    pub call_inline: String,
}

impl ScriptDescriptor {
    pub fn new(name: impl Into<String>, function_body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            function_body: function_body.into(),
            call: String::new(),
            call_inline: String::new(),
        }
    }

    pub fn has_call(&self) -> bool {
        !self.call.is_empty()
    }
}

/// Where a built call expression is going to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallMode {
    /// Inside a double-quoted HTML attribute value.
    AttributeSafe,
    /// As literal text of a `<script>` element.
    InlineRaw,
}

/// Per-pass render configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Content-Security-Policy nonce echoed on every emitted `<script>`.
    #[serde(default)]
    pub nonce: Option<String>,
}

impl RenderOptions {
    pub fn with_nonce(nonce: impl Into<String>) -> Self {
        Self {
            nonce: Some(nonce.into()),
        }
    }
}
