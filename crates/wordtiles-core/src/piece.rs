//! Pieces and the relations between placed pieces.

use std::collections::HashSet;

use crate::{Cell, Extent, GridCoord, Letters};

/// Identifier of a piece, unique within a puzzle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
)]
#[display("#{_0}")]
pub struct PieceId(u32);

impl PieceId {
    /// Creates an identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// A rigid letter matrix that lives either in the pool or on the board.
///
/// Only the position fields change over the lifetime of a piece; the letters are
/// fixed when the piece is created. A piece is *placed* iff its board position is
/// set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    letters: Letters,
    board: Option<Cell>,
    group: Cell,
}

impl Piece {
    /// Creates an unplaced piece at the origin of its pool group.
    #[must_use]
    pub fn new(id: PieceId, letters: Letters) -> Self {
        Self {
            id,
            letters,
            board: None,
            group: Cell::new(0, 0),
        }
    }

    /// Returns the piece placed with its top-left letter cell at `cell`.
    #[must_use]
    pub fn with_board_position(mut self, cell: Cell) -> Self {
        self.board = Some(cell);
        self
    }

    /// Returns the piece with the given position inside its pool group.
    #[must_use]
    pub fn with_group_position(mut self, cell: Cell) -> Self {
        self.group = cell;
        self
    }

    /// The piece identifier.
    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// The letter matrix.
    #[must_use]
    pub fn letters(&self) -> &Letters {
        &self.letters
    }

    /// Size of the letter matrix.
    #[must_use]
    pub fn extent(&self) -> Extent {
        self.letters.extent()
    }

    /// Top-left board cell, if placed.
    #[must_use]
    pub fn board_position(&self) -> Option<Cell> {
        self.board
    }

    /// Position (top, left) within the pool group or the group being dragged.
    #[must_use]
    pub fn group_position(&self) -> Cell {
        self.group
    }

    /// Returns `true` if the piece is on the board.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.board.is_some()
    }

    /// Moves the piece onto the board, or back to the pool with `None`.
    pub fn set_board_position(&mut self, board: Option<Cell>) {
        self.board = board;
    }

    /// Moves the piece within its group.
    pub fn set_group_position(&mut self, group: Cell) {
        self.group = group;
    }

    /// Iterates the board cells covered by this piece's letters.
    ///
    /// Yields nothing for an unplaced piece.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.board.into_iter().flat_map(move |origin| {
            self.letters
                .iter()
                .map(move |(row, col, _)| Cell::new(origin.row + row, origin.col + col))
        })
    }

    /// Returns the piece's letter at an absolute board cell.
    #[must_use]
    pub fn letter_at(&self, cell: Cell) -> Option<char> {
        let origin = self.board?;
        let row = cell.row.checked_sub(origin.row)?;
        let col = cell.col.checked_sub(origin.col)?;
        self.letters.get(row, col)
    }

    fn board_bounds(&self) -> Option<(Cell, Cell)> {
        let origin = self.board?;
        let extent = self.extent();
        Some((
            origin,
            Cell::new(origin.row + extent.rows, origin.col + extent.cols),
        ))
    }
}

/// Finds a piece by identifier.
#[must_use]
pub fn get_piece_by_id(pieces: &[Piece], id: PieceId) -> Option<&Piece> {
    pieces.iter().find(|piece| piece.id() == id)
}

/// Returns `true` if two placed pieces have a letter on the same board cell.
///
/// Bounding boxes are compared first; an intersection only counts when a shared
/// cell holds a letter in both pieces.
#[must_use]
pub fn pieces_overlapping(a: &Piece, b: &Piece) -> bool {
    let (Some((a_min, a_max)), Some((b_min, b_max))) = (a.board_bounds(), b.board_bounds())
    else {
        return false;
    };
    let disjoint = a_max.row <= b_min.row
        || b_max.row <= a_min.row
        || a_max.col <= b_min.col
        || b_max.col <= a_min.col;
    if disjoint {
        return false;
    }
    a.occupied_cells().any(|cell| b.letter_at(cell).is_some())
}

/// Returns `true` if a letter of `a` is edge-adjacent to a letter of `b`.
///
/// This models two pieces resting against each other: shifting either one by a
/// single row or column would make letters coincide.
#[must_use]
pub fn pieces_adjacent(a: &Piece, b: &Piece) -> bool {
    let (Some((a_min, a_max)), Some((b_min, b_max))) = (a.board_bounds(), b.board_bounds())
    else {
        return false;
    };
    // Boxes more than one cell apart cannot hold neighboring letters.
    if a_max.row < b_min.row
        || b_max.row < a_min.row
        || a_max.col < b_min.col
        || b_max.col < a_min.col
    {
        return false;
    }
    let b_cells: HashSet<Cell> = b.occupied_cells().collect();
    a.occupied_cells().any(|cell| {
        neighbors(cell)
            .into_iter()
            .flatten()
            .any(|neighbor| b_cells.contains(&neighbor))
    })
}

/// Returns `true` if two placed pieces overlap or rest against each other.
#[must_use]
pub fn pieces_touching(a: &Piece, b: &Piece) -> bool {
    pieces_overlapping(a, b) || pieces_adjacent(a, b)
}

/// Returns the board position of `piece` translated by `(d_row, d_col)`.
///
/// The result is not bounds-checked. Returns `None` for an unplaced piece.
#[must_use]
pub fn translate_piece(piece: &Piece, d_row: i32, d_col: i32) -> Option<GridCoord> {
    piece.board_position().map(|cell| cell.offset(d_row, d_col))
}

fn neighbors(cell: Cell) -> [Option<Cell>; 4] {
    [
        cell.row.checked_sub(1).map(|row| Cell::new(row, cell.col)),
        Some(Cell::new(cell.row + 1, cell.col)),
        cell.col.checked_sub(1).map(|col| Cell::new(cell.row, col)),
        Some(Cell::new(cell.row, cell.col + 1)),
    ]
}
