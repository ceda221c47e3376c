use std::sync::OnceLock;

use sg_core::RenderOptions;

use crate::state::RenderState;

/// One render pass.
///
/// Owns the pass's options and its script [`RenderState`], which is created
/// on first use. Branches of the pass share it by reference; finishing the
/// pass consumes it, so no state outlives or leaks into another pass.
#[derive(Debug, Default)]
pub struct RenderContext {
    options: RenderOptions,
    scripts: OnceLock<RenderState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Script names whose definitions were written, in emission order.
    pub rendered_scripts: Vec<String>,
}

impl RenderContext {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            scripts: OnceLock::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// CSP nonce for emitted elements, empty when none was configured.
    pub fn nonce(&self) -> &str {
        self.options.nonce.as_deref().unwrap_or("")
    }

    pub fn script_state(&self) -> &RenderState {
        self.scripts.get_or_init(RenderState::default)
    }

    pub fn finish(self) -> RenderSummary {
        let rendered_scripts = self
            .scripts
            .into_inner()
            .map(RenderState::into_rendered_names)
            .unwrap_or_default();
        tracing::debug!(
            "render pass finished with {} script definitions",
            rendered_scripts.len()
        );
        RenderSummary { rendered_scripts }
    }
}
