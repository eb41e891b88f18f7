//! Scoped pointer capture.
//!
//! While a drag is live, all events of its pointer must reach the drag even when
//! the pointer leaves the dragged element. Capture is acquired through
//! [`CaptureGuard`], which releases it on drop, so every way a drag can end
//! releases the pointer.

use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    fmt,
    rc::Rc,
};

use wordtiles_game::PointerId;

/// The element that can capture pointers, supplied by the rendering layer.
pub trait PointerCapture {
    /// Requests capture of `pointer_id`.
    fn set_capture(&self, pointer_id: PointerId);

    /// Returns `true` if `pointer_id` is currently captured.
    fn has_capture(&self, pointer_id: PointerId) -> bool;

    /// Releases `pointer_id`.
    fn release_capture(&self, pointer_id: PointerId);
}

/// The pointer could not be captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("failed to capture {pointer_id}")]
pub struct CaptureError {
    /// The pointer that was requested.
    pub pointer_id: PointerId,
}

/// A held pointer capture, released on drop.
pub struct CaptureGuard<C: PointerCapture> {
    target: Rc<C>,
    pointer_id: PointerId,
}

impl<C: PointerCapture> fmt::Debug for CaptureGuard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("pointer_id", &self.pointer_id)
            .finish_non_exhaustive()
    }
}

impl<C: PointerCapture> CaptureGuard<C> {
    /// Captures `pointer_id` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError`] if the target does not report the capture afterwards.
    pub fn acquire(target: Rc<C>, pointer_id: PointerId) -> Result<Self, CaptureError> {
        target.set_capture(pointer_id);
        if !target.has_capture(pointer_id) {
            return Err(CaptureError { pointer_id });
        }
        Ok(Self { target, pointer_id })
    }

    /// The captured pointer.
    #[must_use]
    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }
}

impl<C: PointerCapture> Drop for CaptureGuard<C> {
    fn drop(&mut self) {
        self.target.release_capture(self.pointer_id);
    }
}

/// An in-memory capture target.
///
/// Capture succeeds unless refusal is switched on, which stands in for a
/// platform that rejects the request.
#[derive(Debug, Default)]
pub struct SimulatedCapture {
    refuse: Cell<bool>,
    captured: RefCell<HashSet<PointerId>>,
}

impl SimulatedCapture {
    /// Makes subsequent capture requests fail (`true`) or succeed (`false`).
    pub fn set_refusing(&self, refuse: bool) {
        self.refuse.set(refuse);
    }

    /// Number of pointers currently captured.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captured.borrow().len()
    }
}

impl PointerCapture for SimulatedCapture {
    fn set_capture(&self, pointer_id: PointerId) {
        if !self.refuse.get() {
            self.captured.borrow_mut().insert(pointer_id);
        }
    }

    fn has_capture(&self, pointer_id: PointerId) -> bool {
        self.captured.borrow().contains(&pointer_id)
    }

    fn release_capture(&self, pointer_id: PointerId) {
        self.captured.borrow_mut().remove(&pointer_id);
    }
}
