use std::io::Write;

use sg_call::escape_html;
use sg_core::{ScriptDescriptor, ScriptGuardError};

use crate::error_map::map_render_write;
use crate::{Component, RenderContext, RenderState};

pub fn write_script_header<W>(out: &mut W, nonce: &str) -> Result<(), ScriptGuardError>
where
    W: Write + ?Sized,
{
    if nonce.is_empty() {
        return out.write_all(b"<script>").map_err(map_render_write);
    }
    write!(out, "<script nonce=\"{}\">", escape_html(nonce)).map_err(map_render_write)
}

fn write_script_element<W>(
    out: &mut W,
    nonce: &str,
    content: &str,
) -> Result<(), ScriptGuardError>
where
    W: Write + ?Sized,
{
    write_script_header(out, nonce)?;
    out.write_all(content.as_bytes()).map_err(map_render_write)?;
    out.write_all(b"</script>").map_err(map_render_write)
}

/// Writes one `<script>` holding every definition in `scripts` not yet
/// rendered in this pass, in input order. Writes nothing when all of them
/// were already rendered.
pub fn emit_definitions<W>(
    scripts: &[ScriptDescriptor],
    state: &RenderState,
    out: &mut W,
    nonce: &str,
) -> Result<(), ScriptGuardError>
where
    W: Write + ?Sized,
{
    if scripts.is_empty() {
        return Ok(());
    }

    let mut definitions = String::new();
    for script in scripts {
        if state.mark_rendered(&script.name) {
            definitions.push_str(&script.function_body);
        } else {
            tracing::debug!("skipping script {}: already rendered", script.name);
        }
    }

    if definitions.is_empty() {
        return Ok(());
    }
    tracing::trace!("writing {} bytes of script definitions", definitions.len());
    write_script_element(out, nonce, &definitions)
}

/// Writes a `<script>` invoking a function. Invocations are never
/// deduplicated.
pub fn emit_call<W>(call_inline: &str, out: &mut W, nonce: &str) -> Result<(), ScriptGuardError>
where
    W: Write + ?Sized,
{
    tracing::trace!("writing script call {}", call_inline);
    write_script_element(out, nonce, call_inline)
}

pub fn render_script_items<W>(
    ctx: &RenderContext,
    out: &mut W,
    scripts: &[ScriptDescriptor],
) -> Result<(), ScriptGuardError>
where
    W: Write + ?Sized,
{
    if scripts.is_empty() {
        return Ok(());
    }
    emit_definitions(scripts, ctx.script_state(), out, ctx.nonce())
}

pub fn render_script_call<W>(
    ctx: &RenderContext,
    out: &mut W,
    call_inline: &str,
) -> Result<(), ScriptGuardError>
where
    W: Write + ?Sized,
{
    emit_call(call_inline, out, ctx.nonce())
}

impl Component for ScriptDescriptor {
    fn render(&self, ctx: &RenderContext, out: &mut dyn Write) -> Result<(), ScriptGuardError> {
        render_script_items(ctx, out, std::slice::from_ref(self))?;
        if self.has_call() {
            render_script_call(ctx, out, &self.call_inline)?;
        }
        Ok(())
    }
}
