//! Queue of actions requested while another action is being applied.

use std::mem;

use wordtiles_game::Action;

/// Actions requested while another action was being handled.
///
/// Queued actions run after the current one completes, never interleaved with it.
#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    /// Queues an action.
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Takes every queued action, oldest first.
    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
