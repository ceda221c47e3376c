use std::io::Write;

use sg_core::ScriptGuardError;

mod context;
mod emit;
mod error_map;
mod state;

pub use context::{RenderContext, RenderSummary};
pub use emit::{
    emit_call, emit_definitions, render_script_call, render_script_items, write_script_header,
};
pub use state::RenderState;

/// Anything that writes markup for a render pass.
///
/// Implementations must be shareable across threads so a pass can render
/// sibling branches concurrently against the same [`RenderContext`].
pub trait Component: Send + Sync {
    fn render(&self, ctx: &RenderContext, out: &mut dyn Write) -> Result<(), ScriptGuardError>;
}
