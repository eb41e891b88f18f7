//! Grid geometry: conversions between pointer pixels and board cells.
//!
//! All functions here are pure. The board is a `grid_size × grid_size` square
//! laid over a pixel rectangle supplied by the rendering layer.

use std::ops::{Add, Sub};

/// A pointer or element coordinate in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned pixel rectangle, such as the board's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns `true` if the point lies inside the rectangle (right and bottom edges excluded).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.left + self.width
            && point.y >= self.top
            && point.y < self.top + self.height
    }

    /// Returns the pixel size of one grid cell as `(width, height)`.
    #[must_use]
    pub fn cell_size(&self, grid_size: usize) -> (f32, f32) {
        let n = grid_size_f32(grid_size);
        (self.width / n, self.height / n)
    }
}

/// A cell on the board, always within `0..grid_size` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Cell {
    /// Creates a cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns this cell as a signed coordinate.
    #[must_use]
    pub fn to_coord(self) -> GridCoord {
        GridCoord::new(to_i32(self.row), to_i32(self.col))
    }

    /// Offsets the cell by a signed delta without bounds checks.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> GridCoord {
        let coord = self.to_coord();
        GridCoord::new(coord.row + d_row, coord.col + d_col)
    }
}

/// A signed grid coordinate that may lie outside the board.
///
/// Destinations computed from pointer positions are expressed this way, so that
/// a drop partly off the board can be detected and reverted at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct GridCoord {
    /// Row index, may be negative.
    pub row: i32,
    /// Column index, may be negative.
    pub col: i32,
}

impl GridCoord {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the top-left cell if a box of `extent` anchored here fits on the board.
    #[must_use]
    pub fn fit(self, extent: Extent, grid_size: usize) -> Option<Cell> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row + extent.rows <= grid_size && col + extent.cols <= grid_size)
            .then_some(Cell::new(row, col))
    }
}

/// Size of a box in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Extent {
    /// Creates an extent.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Maps a pixel coordinate inside `board` to the grid cell under it.
///
/// The result is not clamped: a point left of or above the board yields a
/// negative coordinate, and a point past the far edge yields one `>= grid_size`.
#[must_use]
pub fn pixel_to_cell(board: &Rect, point: Point, grid_size: usize) -> GridCoord {
    let (cell_width, cell_height) = board.cell_size(grid_size);
    let col = ((point.x - board.left) / cell_width).floor();
    let row = ((point.y - board.top) / cell_height).floor();
    GridCoord::new(saturating_i32(row), saturating_i32(col))
}

/// Snaps a group's top-left pixel to the nearest cell.
///
/// The group's on-screen top-left rarely sits exactly on a cell boundary, so the
/// lookup is taken half a cell further in, which rounds instead of truncating.
#[must_use]
pub fn snap_to_cell(board: &Rect, top_left: Point, grid_size: usize) -> GridCoord {
    let (cell_width, cell_height) = board.cell_size(grid_size);
    let center = top_left + Point::new(cell_width / 2.0, cell_height / 2.0);
    pixel_to_cell(board, center, grid_size)
}

/// Constrains a dragged group's top-left pixel so the whole group stays on the board.
///
/// `extent` is the group's bounding box in cells. When the board rectangle is
/// not available the raw position is returned unchanged.
#[must_use]
pub fn clamp_group_to_board(
    board: Option<&Rect>,
    top_left: Point,
    extent: Extent,
    grid_size: usize,
) -> Point {
    let Some(board) = board else {
        return top_left;
    };
    let (cell_width, cell_height) = board.cell_size(grid_size);
    let spare_cols = grid_size_f32(grid_size) - grid_size_f32(extent.cols);
    let spare_rows = grid_size_f32(grid_size) - grid_size_f32(extent.rows);
    let max_left = board.left + cell_width * spare_cols;
    let max_top = board.top + cell_height * spare_rows;
    // A group larger than the board pins to the top-left edge.
    Point::new(
        board.left.max(top_left.x.min(max_left)),
        board.top.max(top_left.y.min(max_top)),
    )
}

#[expect(clippy::cast_precision_loss)]
fn grid_size_f32(n: usize) -> f32 {
    n as f32
}

#[expect(clippy::cast_possible_truncation)]
fn saturating_i32(value: f32) -> i32 {
    // `as` saturates on overflow and maps NaN to zero.
    value as i32
}

fn to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: Rect = Rect::new(100.0, 50.0, 250.0, 250.0);

    #[test]
    fn pixel_to_cell_uses_cell_extents() {
        assert_eq!(
            pixel_to_cell(&BOARD, Point::new(100.0, 50.0), 5),
            GridCoord::new(0, 0)
        );
        assert_eq!(
            pixel_to_cell(&BOARD, Point::new(149.9, 150.0), 5),
            GridCoord::new(2, 0)
        );
        assert_eq!(
            pixel_to_cell(&BOARD, Point::new(349.0, 299.0), 5),
            GridCoord::new(4, 4)
        );
    }

    #[test]
    fn pixel_to_cell_is_not_clamped() {
        assert_eq!(
            pixel_to_cell(&BOARD, Point::new(90.0, 40.0), 5),
            GridCoord::new(-1, -1)
        );
        assert_eq!(
            pixel_to_cell(&BOARD, Point::new(360.0, 310.0), 5),
            GridCoord::new(5, 5)
        );
    }

    #[test]
    fn snap_rounds_to_nearest_cell() {
        // 26px into a 50px cell rounds up to the next column.
        assert_eq!(
            snap_to_cell(&BOARD, Point::new(126.0, 60.0), 5),
            GridCoord::new(0, 1)
        );
        assert_eq!(
            snap_to_cell(&BOARD, Point::new(124.0, 60.0), 5),
            GridCoord::new(0, 0)
        );
    }

    #[test]
    fn clamp_keeps_group_inside_board() {
        let extent = Extent::new(1, 3);
        let clamped = clamp_group_to_board(Some(&BOARD), Point::new(0.0, 500.0), extent, 5);
        assert_eq!(clamped, Point::new(100.0, 250.0));

        let clamped = clamp_group_to_board(Some(&BOARD), Point::new(400.0, 0.0), extent, 5);
        assert_eq!(clamped, Point::new(200.0, 50.0));

        let inside = Point::new(150.0, 100.0);
        assert_eq!(
            clamp_group_to_board(Some(&BOARD), inside, extent, 5),
            inside
        );
    }

    #[test]
    fn clamp_is_skipped_without_board() {
        let raw = Point::new(-40.0, 900.0);
        assert_eq!(clamp_group_to_board(None, raw, Extent::new(2, 2), 5), raw);
    }

    #[test]
    fn fit_rejects_partial_placement() {
        let extent = Extent::new(1, 3);
        assert_eq!(GridCoord::new(2, 1).fit(extent, 5), Some(Cell::new(2, 1)));
        assert_eq!(GridCoord::new(2, 2).fit(extent, 5), Some(Cell::new(2, 2)));
        assert_eq!(GridCoord::new(2, 3).fit(extent, 5), None);
        assert_eq!(GridCoord::new(-1, 0).fit(extent, 5), None);
        assert_eq!(GridCoord::new(5, 0).fit(extent, 5), None);
    }

    #[test]
    fn rect_contains_excludes_far_edges() {
        assert!(BOARD.contains(Point::new(100.0, 50.0)));
        assert!(!BOARD.contains(Point::new(350.0, 100.0)));
        assert!(!BOARD.contains(Point::new(99.9, 100.0)));
    }
}
