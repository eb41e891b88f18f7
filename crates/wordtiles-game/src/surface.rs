//! Geometry supplied by the rendering layer.

use wordtiles_core::{Point, Rect};

/// The screen region under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Region {
    /// Over the board grid.
    Board,
    /// Over the pool of unplaced pieces.
    Pool,
    /// Anywhere else.
    Outside,
}

/// Layout queries the placement engine needs but does not own.
pub trait Surface {
    /// The board's bounding rectangle, or `None` if it cannot be measured yet.
    fn board_rect(&self) -> Option<Rect>;

    /// Classifies a pointer coordinate.
    fn hit_test(&self, point: Point) -> Region;
}

impl<S: Surface + ?Sized> Surface for &S {
    fn board_rect(&self) -> Option<Rect> {
        (**self).board_rect()
    }

    fn hit_test(&self, point: Point) -> Region {
        (**self).hit_test(point)
    }
}

/// A surface with fixed board and pool rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedSurface {
    /// Board rectangle, `None` while unmeasurable.
    pub board: Option<Rect>,
    /// Pool rectangle.
    pub pool: Option<Rect>,
}

impl FixedSurface {
    /// Creates a surface from a measured board and pool.
    #[must_use]
    pub const fn new(board: Rect, pool: Rect) -> Self {
        Self {
            board: Some(board),
            pool: Some(pool),
        }
    }
}

impl Surface for FixedSurface {
    fn board_rect(&self) -> Option<Rect> {
        self.board
    }

    fn hit_test(&self, point: Point) -> Region {
        if self.board.is_some_and(|board| board.contains(point)) {
            Region::Board
        } else if self.pool.is_some_and(|pool| pool.contains(point)) {
            Region::Pool
        } else {
            Region::Outside
        }
    }
}
