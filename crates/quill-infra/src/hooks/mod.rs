//! Pre-save hooks shared by every store implementation.

mod post_slug;

use std::sync::Arc;

use quill_core::ports::PreSaveHook;

pub use post_slug::PostSlugHook;

/// Ordered list of hooks run on an entity right before it is written.
pub struct HookChain<T> {
    hooks: Vec<Arc<dyn PreSaveHook<T>>>,
}

impl<T> HookChain<T> {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn push(&mut self, hook: Arc<dyn PreSaveHook<T>>) {
        self.hooks.push(hook);
    }

    pub fn run(&self, entity: &mut T) {
        for hook in &self.hooks {
            hook.before_save(entity);
        }
    }
}

impl<T> Default for HookChain<T> {
    fn default() -> Self {
        Self::new()
    }
}
