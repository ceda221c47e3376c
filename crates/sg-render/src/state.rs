use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Names of the script definitions already written in one render pass.
///
/// A name moves from unseen to rendered exactly once and never back. The
/// check and the mark happen under one lock, so concurrent branches of the
/// same pass agree on which of them emits a definition.
#[derive(Debug, Default)]
pub struct RenderState {
    rendered: Mutex<RenderedScripts>,
}

#[derive(Debug, Default)]
struct RenderedScripts {
    names: HashSet<String>,
    order: Vec<String>,
}

impl RenderState {
    pub fn has_rendered(&self, name: &str) -> bool {
        self.lock().names.contains(name)
    }

    /// Marks `name` as rendered. Returns `true` only for the call that moved
    /// it out of the unseen state; later calls are no-ops.
    pub fn mark_rendered(&self, name: &str) -> bool {
        let mut rendered = self.lock();
        if rendered.names.contains(name) {
            return false;
        }
        rendered.names.insert(name.to_string());
        rendered.order.push(name.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rendered names in the order they were first marked.
    pub fn rendered_names(&self) -> Vec<String> {
        self.lock().order.clone()
    }

    pub(crate) fn into_rendered_names(self) -> Vec<String> {
        self.rendered
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .order
    }

    // The set stays consistent even if a holder panicked mid-render.
    fn lock(&self) -> MutexGuard<'_, RenderedScripts> {
        self.rendered.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
