use wordtiles_core::{Point, PieceId};

use crate::PointerId;

/// Input to the placement reducer.
///
/// Every action is applied atomically by [`Game::apply`](crate::Game::apply).
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum Action {
    /// A pointer pressed on a piece.
    DragStart {
        /// The piece under the pointer.
        piece_id: PieceId,
        /// The pointer that will drive the drag.
        pointer_id: PointerId,
        /// Pointer position.
        pointer: Point,
        /// Pointer position relative to the piece's top-left corner.
        pointer_offset: Point,
    },
    /// The pointer moved during a single-piece drag.
    DragMove {
        /// New pointer position.
        pointer: Point,
    },
    /// The dwell timer fired: grow the drag to the touching cluster.
    DragNeighbors,
    /// The pointer was released during a single-piece drag.
    DragEnd,
    /// The pointer moved during a group shift.
    ShiftMove {
        /// New pointer position.
        pointer: Point,
    },
    /// The pointer was released during a group shift.
    ShiftEnd,
}

impl Action {
    /// Short name used in log output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "dragStart",
            Self::DragMove { .. } => "dragMove",
            Self::DragNeighbors => "dragNeighbors",
            Self::DragEnd => "dragEnd",
            Self::ShiftMove { .. } => "shiftMove",
            Self::ShiftEnd => "shiftEnd",
        }
    }
}
