//! The single writer of game state.
//!
//! A [`Session`] owns the [`Game`] and everything with a lifetime tied to a drag:
//! the pointer capture and the dwell timer. Pointer events become actions, every
//! action runs to completion, and side effects are reconciled against the new
//! state before the next action is accepted.

use std::{rc::Rc, time::Instant};

use wordtiles_core::{PieceId, Point};
use wordtiles_game::{Action, ActionOutcome, Game, PointerId, Surface};

use crate::{
    SessionConfig,
    action_queue::ActionRequestQueue,
    dwell_timer::DwellTimer,
    pointer_capture::{CaptureGuard, PointerCapture},
};

/// A running puzzle driven by pointer events.
pub struct Session<S, C: PointerCapture> {
    game: Game,
    surface: S,
    capture: Rc<C>,
    capture_guard: Option<CaptureGuard<C>>,
    dwell: DwellTimer,
    queue: ActionRequestQueue,
}

impl<S, C: PointerCapture> std::fmt::Debug for Session<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("capture_guard", &self.capture_guard)
            .field("dwell", &self.dwell)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

impl<S: Surface, C: PointerCapture> Session<S, C> {
    /// Wraps a game with the layout and capture target of the rendering layer.
    #[must_use]
    pub fn new(game: Game, surface: S, capture: Rc<C>, config: &SessionConfig) -> Self {
        Self {
            game,
            surface,
            capture,
            capture_guard: None,
            dwell: DwellTimer::new(config.dwell),
            queue: ActionRequestQueue::default(),
        }
    }

    /// The game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The layout.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the layout, e.g. after a resize.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The capture target.
    #[must_use]
    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// The pending dwell deadline, if the timer is armed.
    #[must_use]
    pub fn dwell_deadline(&self) -> Option<Instant> {
        self.dwell.deadline()
    }

    /// Applies an action, then any follow-up it triggered.
    ///
    /// Returns the outcome of `action` itself.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> ActionOutcome {
        let outcome = self.apply(action, now);
        self.run_queued(now);
        outcome
    }

    /// A pointer pressed on a piece.
    pub fn pointer_down(
        &mut self,
        piece_id: PieceId,
        pointer_id: PointerId,
        pointer: Point,
        pointer_offset: Point,
        now: Instant,
    ) -> ActionOutcome {
        self.dispatch(
            Action::DragStart {
                piece_id,
                pointer_id,
                pointer,
                pointer_offset,
            },
            now,
        )
    }

    /// The captured pointer moved. Ignored when no drag is live.
    pub fn pointer_move(&mut self, pointer: Point, now: Instant) -> Option<ActionOutcome> {
        let action = self.game.state().drag_state()?.move_action(pointer);
        Some(self.dispatch(action, now))
    }

    /// The pointer was released or its capture was lost.
    ///
    /// Records the final position, then ends the drag.
    pub fn pointer_up(&mut self, pointer: Point, now: Instant) -> Option<ActionOutcome> {
        self.pointer_move(pointer, now)?;
        let action = self.game.state().drag_state()?.release_action();
        Some(self.dispatch(action, now))
    }

    /// Advances the clock: fires the dwell timer if due and runs queued actions.
    pub fn tick(&mut self, now: Instant) -> Vec<ActionOutcome> {
        if self.dwell.poll(now) {
            log::debug!("dwell elapsed; grouping neighbors");
            self.queue.request(Action::DragNeighbors);
        }
        self.run_queued(now)
    }

    fn apply(&mut self, action: Action, now: Instant) -> ActionOutcome {
        let outcome = self.game.apply(action, &self.surface);
        self.sync_effects(now);
        outcome
    }

    fn run_queued(&mut self, now: Instant) -> Vec<ActionOutcome> {
        let mut outcomes = Vec::new();
        while !self.queue.is_empty() {
            for action in self.queue.take_all() {
                outcomes.push(self.apply(action, now));
            }
        }
        outcomes
    }

    /// Brings capture and the dwell timer in line with the current drag.
    fn sync_effects(&mut self, now: Instant) {
        let Some(drag) = self.game.state().drag_state() else {
            self.capture_guard = None;
            self.dwell.cancel();
            return;
        };

        let pointer_id = drag.pointer_id();
        if self
            .capture_guard
            .as_ref()
            .is_none_or(|guard| guard.pointer_id() != pointer_id)
        {
            self.capture_guard = None;
            match CaptureGuard::acquire(Rc::clone(&self.capture), pointer_id) {
                Ok(guard) => self.capture_guard = Some(guard),
                Err(err) => {
                    log::warn!("{err}; ending drag");
                    self.queue.request(drag.release_action());
                }
            }
        }

        if !drag.awaits_neighbors() {
            self.dwell.cancel();
        } else if !self.dwell.is_armed() {
            self.dwell.arm(now);
        }
    }
}
