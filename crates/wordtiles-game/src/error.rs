use wordtiles_core::{Cell, PieceId};

/// Errors returned when setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The board must have at least one cell.
    #[display("grid size must be positive")]
    ZeroGridSize,
    /// Two pieces share an identifier.
    #[display("duplicate piece id {id}")]
    DuplicatePiece {
        /// The repeated identifier.
        id: PieceId,
    },
    /// A pre-placed piece does not fit on the board.
    #[display("piece {id} at {cell} does not fit on a {grid_size}x{grid_size} board")]
    PlacementOutOfBounds {
        /// The offending piece.
        id: PieceId,
        /// Its top-left cell.
        cell: Cell,
        /// Board side length.
        grid_size: usize,
    },
    /// A target layout row has the wrong length.
    #[display("target row {row} does not have {size} cells")]
    InvalidTarget {
        /// Zero-based index of the offending row.
        row: usize,
        /// Expected row length (the number of rows).
        size: usize,
    },
    /// The target layout and the board differ in size.
    #[display("target layout is {target}x{target} but the board is {grid_size}x{grid_size}")]
    TargetSizeMismatch {
        /// Target side length.
        target: usize,
        /// Board side length.
        grid_size: usize,
    },
}

/// Why the reducer ignored an action.
///
/// Rejections never change state and are never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum RejectReason {
    /// `dragStart` while another drag is live.
    #[display("a drag is already in progress")]
    AlreadyDragging,
    /// A move, release or grouping action with no drag live.
    #[display("no drag is in progress")]
    NoActiveDrag,
    /// A drag action during a shift, or a shift action during a drag.
    #[display("action does not match the kind of the active drag")]
    WrongDragKind,
    /// The piece does not exist.
    #[display("unknown piece {_0}")]
    UnknownPiece(PieceId),
    /// The puzzle is solved and pieces no longer move.
    #[display("the puzzle is solved; pieces are frozen")]
    PieceFrozen,
    /// Grouping needs an unmoved drag of a placed piece.
    #[display("the drag cannot grow into a group")]
    NeighborsUnavailable,
}
