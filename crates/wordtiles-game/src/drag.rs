//! State of an in-progress drag.

use wordtiles_core::{GridCoord, PieceId, Point};

use crate::Action;

/// Identifier of the pointer driving a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("pointer {_0}")]
pub struct PointerId(pub i32);

/// Where the dragged pieces would land if released now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Destination {
    /// Not over any drop target.
    #[default]
    None,
    /// Over the pool.
    Pool,
    /// Over the board, with the group's top-left at `coord`.
    ///
    /// The coordinate may lie partly off the board; such drops revert on commit.
    Board(GridCoord),
}

/// The phase of the drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DragPhase {
    /// No drag is active.
    Idle,
    /// One piece is being dragged.
    DraggingSingle,
    /// A cluster of touching pieces is being shifted across the board.
    DraggingGroup,
}

/// An active drag. Exists only between `dragStart` and `dragEnd`/`shiftEnd`.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub(crate) piece_ids: Vec<PieceId>,
    pub(crate) pointer_id: PointerId,
    pub(crate) pointer: Point,
    pub(crate) pointer_offset: Point,
    pub(crate) destination: Destination,
    pub(crate) is_shifting: bool,
    pub(crate) drag_has_moved: bool,
}

impl DragState {
    pub(crate) fn new(
        piece_id: PieceId,
        pointer_id: PointerId,
        pointer: Point,
        pointer_offset: Point,
        destination: Destination,
    ) -> Self {
        Self {
            piece_ids: vec![piece_id],
            pointer_id,
            pointer,
            pointer_offset,
            destination,
            is_shifting: false,
            drag_has_moved: false,
        }
    }

    /// Pieces moving together, seed piece first.
    #[must_use]
    pub fn piece_ids(&self) -> &[PieceId] {
        &self.piece_ids
    }

    /// Returns `true` if `id` is part of the drag.
    #[must_use]
    pub fn contains(&self, id: PieceId) -> bool {
        self.piece_ids.contains(&id)
    }

    /// The pointer driving the drag.
    #[must_use]
    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    /// Latest pointer position.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Pointer position relative to the group's top-left corner.
    #[must_use]
    pub fn pointer_offset(&self) -> Point {
        self.pointer_offset
    }

    /// Current drop target.
    #[must_use]
    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// Returns `true` for a group shift confined to the board.
    #[must_use]
    pub fn is_shifting(&self) -> bool {
        self.is_shifting
    }

    /// Returns `true` once the pointer has moved since the drag started.
    #[must_use]
    pub fn drag_has_moved(&self) -> bool {
        self.drag_has_moved
    }

    /// The phase this drag represents.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.is_shifting {
            DragPhase::DraggingGroup
        } else {
            DragPhase::DraggingSingle
        }
    }

    /// Returns `true` while the dwell timer for `dragNeighbors` should run.
    ///
    /// That is a single drag that began over the board and has not moved.
    #[must_use]
    pub fn awaits_neighbors(&self) -> bool {
        !self.is_shifting && !self.drag_has_moved && self.destination.is_board()
    }

    /// The move action matching this drag's kind.
    #[must_use]
    pub fn move_action(&self, pointer: Point) -> Action {
        if self.is_shifting {
            Action::ShiftMove { pointer }
        } else {
            Action::DragMove { pointer }
        }
    }

    /// The release action matching this drag's kind.
    ///
    /// Also used to force the drag to end when the pointer cannot be captured.
    #[must_use]
    pub fn release_action(&self) -> Action {
        if self.is_shifting {
            Action::ShiftEnd
        } else {
            Action::DragEnd
        }
    }
}
