//! Core data structures for the wordtiles puzzle.
//!
//! This crate provides the pure, state-free building blocks shared by the
//! placement engine and the driver:
//!
//! 1. **Grid geometry** - [`geometry`]: pixel ↔ cell conversion and clamping
//!    of a dragged group to the board rectangle.
//! 2. **Pieces** - [`letters`] and [`piece`]: a rigid letter matrix with holes,
//!    plus the board and pool positions of a piece.
//! 3. **Occupancy** - [`overlap`]: the derived per-cell count of placed letters,
//!    used to flag conflicting placements.
//!
//! # Examples
//!
//! ```
//! use wordtiles_core::{Cell, OverlapGrid, Piece, PieceId};
//!
//! let cat = Piece::new(PieceId::new(0), "CAT".parse().unwrap())
//!     .with_board_position(Cell::new(2, 1));
//!
//! let grid = OverlapGrid::compute(&[cat], 5);
//! assert_eq!(grid.count(Cell::new(2, 1)), 1);
//! assert_eq!(grid.count(Cell::new(2, 3)), 1);
//! assert_eq!(grid.total(), 3);
//! ```

pub mod geometry;
pub mod letters;
pub mod overlap;
pub mod piece;

pub use self::{
    geometry::{Cell, Extent, GridCoord, Point, Rect},
    letters::{LetterBorders, Letters, ParseLettersError},
    overlap::OverlapGrid,
    piece::{Piece, PieceId},
};
