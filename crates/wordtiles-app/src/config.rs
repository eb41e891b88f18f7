use std::time::Duration;

use wordtiles_core::{Cell, Point, Rect};
use wordtiles_game::FixedSurface;

use crate::dwell_timer::DEFAULT_DWELL;

/// Tunables of a [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Hold time before a still drag over the board grows into a group.
    pub dwell: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dwell: DEFAULT_DWELL,
        }
    }
}

/// Screen layout used by the headless driver.
///
/// The board sits at the origin; the pool is a board-sized area one cell below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    /// Side length of one cell in pixels.
    pub cell_size: f32,
    /// Board side length in cells.
    pub grid_size: usize,
}

impl ScreenLayout {
    /// Pixel extent of the board along one axis.
    #[must_use]
    pub fn board_extent(&self) -> f32 {
        self.cell_size * cells_f32(self.grid_size)
    }

    /// The board rectangle.
    #[must_use]
    pub fn board(&self) -> Rect {
        let extent = self.board_extent();
        Rect::new(0.0, 0.0, extent, extent)
    }

    /// The pool rectangle.
    #[must_use]
    pub fn pool(&self) -> Rect {
        let extent = self.board_extent();
        Rect::new(0.0, extent + self.cell_size, extent, extent)
    }

    /// A surface with both rectangles measured.
    #[must_use]
    pub fn surface(&self) -> FixedSurface {
        FixedSurface::new(self.board(), self.pool())
    }

    /// Pixel position of the top-left corner of a board cell.
    #[must_use]
    pub fn cell_origin(&self, cell: Cell) -> Point {
        Point::new(
            self.cell_size * cells_f32(cell.col),
            self.cell_size * cells_f32(cell.row),
        )
    }
}

#[expect(clippy::cast_precision_loss)]
fn cells_f32(cells: usize) -> f32 {
    cells as f32
}

#[cfg(test)]
mod tests {
    use wordtiles_game::{Region, Surface as _};

    use super::*;

    #[test]
    fn pool_sits_below_board() {
        let layout = ScreenLayout {
            cell_size: 10.0,
            grid_size: 5,
        };
        let surface = layout.surface();
        assert_eq!(surface.hit_test(Point::new(49.0, 49.0)), Region::Board);
        assert_eq!(surface.hit_test(Point::new(5.0, 55.0)), Region::Outside);
        assert_eq!(surface.hit_test(Point::new(5.0, 65.0)), Region::Pool);
        assert_eq!(layout.cell_origin(Cell::new(2, 1)), Point::new(10.0, 20.0));
    }
}
