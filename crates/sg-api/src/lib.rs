pub use sg_call::{
    bind_call, build_call, compose_script, escape_html, is_valid_function_name, safe_script,
    safe_script_inline, INVALID_FUNCTION_NAME,
};
pub use sg_core::{
    CallMode, JsExpression, JsParam, RenderOptions, ScriptDescriptor, ScriptGuardError,
};
pub use sg_render::{
    render_script_call, render_script_items, Component, RenderContext, RenderState,
    RenderSummary,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPass {
    pub html: String,
    pub summary: RenderSummary,
}

/// Runs one render pass into memory.
///
/// `render` receives the pass context and the output buffer; the context is
/// finished once it returns, so its script state cannot be reused.
pub fn render_pass<F>(options: RenderOptions, render: F) -> Result<RenderedPass, ScriptGuardError>
where
    F: FnOnce(&RenderContext, &mut Vec<u8>) -> Result<(), ScriptGuardError>,
{
    let ctx = RenderContext::new(options);
    let mut out = Vec::new();
    render(&ctx, &mut out)?;

    let html = String::from_utf8(out)
        .map_err(|error| ScriptGuardError::new("RENDER_UTF8", error.to_string()))?;
    Ok(RenderedPass {
        html,
        summary: ctx.finish(),
    })
}

pub fn render_components_to_string(
    options: RenderOptions,
    components: &[&dyn Component],
) -> Result<RenderedPass, ScriptGuardError> {
    render_pass(options, |ctx, out| {
        for component in components {
            component.render(ctx, out)?;
        }
        Ok(())
    })
}
