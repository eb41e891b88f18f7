//! Letter matrices: the rigid shape of a piece.

use std::{fmt, str::FromStr};

use crate::Extent;

/// Row separator in the text form of a letter matrix.
pub const ROW_SEPARATOR: char = '/';
/// Hole marker in the text form of a letter matrix.
pub const HOLE: char = '.';

/// Errors returned when parsing a letter matrix.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseLettersError {
    /// The matrix had no rows or an empty row.
    #[display("letter matrix is empty")]
    Empty,
    /// Rows have different lengths.
    #[display("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
    /// Every cell is a hole.
    #[display("letter matrix contains no letters")]
    NoLetters,
}

bitflags::bitflags! {
    /// The sides of a letter cell that face a hole or the edge of its piece.
    ///
    /// Rendering draws a border on each of these sides so that a piece reads as
    /// one outlined shape.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LetterBorders: u8 {
        /// Nothing above this letter.
        const TOP = 1 << 0;
        /// Nothing below this letter.
        const BOTTOM = 1 << 1;
        /// Nothing left of this letter.
        const LEFT = 1 << 2;
        /// Nothing right of this letter.
        const RIGHT = 1 << 3;
    }
}

/// A rectangular matrix of letters with holes.
///
/// The matrix is fixed at construction; there is no way to mutate it afterwards.
///
/// # Examples
///
/// ```
/// use wordtiles_core::Letters;
///
/// let letters: Letters = "DO./.GS".parse().unwrap();
/// assert_eq!(letters.rows(), 2);
/// assert_eq!(letters.cols(), 3);
/// assert_eq!(letters.get(0, 1), Some('O'));
/// assert_eq!(letters.get(0, 2), None);
/// assert_eq!(letters.letter_count(), 4);
/// assert_eq!(letters.to_string(), "DO./.GS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Letters {
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Letters {
    /// Builds a matrix from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`ParseLettersError::Empty`] when there are no rows or the rows are empty,
    /// [`ParseLettersError::RaggedRow`] when rows differ in length, and
    /// [`ParseLettersError::NoLetters`] when every cell is a hole.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, ParseLettersError>
    where
        R: IntoIterator<Item = Option<char>>,
    {
        let mut cols = None;
        let mut cells = Vec::new();
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(cells_in_row);
            let len = cells.len() - before;
            match cols {
                None if len == 0 => return Err(ParseLettersError::Empty),
                None => cols = Some(len),
                Some(expected) if expected != len => {
                    return Err(ParseLettersError::RaggedRow { row, len, expected });
                }
                Some(_) => {}
            }
        }
        let cols = cols.ok_or(ParseLettersError::Empty)?;
        if cells.iter().all(Option::is_none) {
            return Err(ParseLettersError::NoLetters);
        }
        Ok(Self { cols, cells })
    }

    /// Number of rows in the bounding box.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    /// Number of columns in the bounding box.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Size of the bounding box.
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::new(self.rows(), self.cols())
    }

    /// Returns the letter at `(row, col)`, or `None` for a hole or an index outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied().flatten()
    }

    /// Iterates the non-empty cells as `(row, col, letter)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|letter| (i / cols, i % cols, letter)))
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the sides of the letter at `(row, col)` that need a border.
    ///
    /// Holes have no borders.
    #[must_use]
    pub fn borders(&self, row: usize, col: usize) -> LetterBorders {
        if self.get(row, col).is_none() {
            return LetterBorders::empty();
        }
        let mut borders = LetterBorders::empty();
        if row == 0 || self.get(row - 1, col).is_none() {
            borders |= LetterBorders::TOP;
        }
        if self.get(row + 1, col).is_none() {
            borders |= LetterBorders::BOTTOM;
        }
        if col == 0 || self.get(row, col - 1).is_none() {
            borders |= LetterBorders::LEFT;
        }
        if self.get(row, col + 1).is_none() {
            borders |= LetterBorders::RIGHT;
        }
        borders
    }
}

impl FromStr for Letters {
    type Err = ParseLettersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(
            s.split(ROW_SEPARATOR)
                .map(|row| row.chars().map(|c| (c != HOLE).then_some(c))),
        )
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                write!(f, "{ROW_SEPARATOR}")?;
            }
            for cell in row {
                write!(f, "{}", cell.unwrap_or(HOLE))?;
            }
        }
        Ok(())
    }
}
