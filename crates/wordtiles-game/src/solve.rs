//! Detection of the solved condition.
//!
//! The engine guarantees that the solve status is re-derived from the current
//! piece positions after every placement change. Whether a complete,
//! conflict-free layout spells the intended solution depends on the puzzle
//! content, so that final check is a pluggable [`SolutionPredicate`].

use std::{fmt, str::FromStr};

use wordtiles_core::{Cell, OverlapGrid, Piece, letters::ROW_SEPARATOR};

use crate::GameError;

/// The letters visible on the board: the union of all placed pieces.
///
/// Where pieces overlap, the letter of the later piece wins; the solve detector
/// never consults this for a board with conflicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLetters {
    size: usize,
    cells: Vec<Option<char>>,
}

impl BoardLetters {
    /// Collects the placed letters of `pieces`.
    #[must_use]
    pub fn collect(pieces: &[Piece], grid_size: usize) -> Self {
        let mut cells = vec![None; grid_size * grid_size];
        for piece in pieces {
            for cell in piece.occupied_cells() {
                if cell.row < grid_size && cell.col < grid_size {
                    cells[cell.row * grid_size + cell.col] = piece.letter_at(cell);
                }
            }
        }
        Self {
            size: grid_size,
            cells,
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at `cell`, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<char> {
        if cell.row >= self.size || cell.col >= self.size {
            return None;
        }
        self.cells[cell.row * self.size + cell.col]
    }
}

impl fmt::Display for BoardLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if i > 0 {
                write!(f, "{ROW_SEPARATOR}")?;
            }
            for cell in row {
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}

/// Decides whether complete board content is the intended solution.
pub trait SolutionPredicate: fmt::Debug + Send + Sync {
    /// Returns `true` if `letters` is an accepted final layout.
    fn is_solution(&self, letters: &BoardLetters) -> bool;
}

/// Accepts no layout.
///
/// Used when the intended answer is unknown: the board stays editable however
/// the pieces are arranged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverSolved;

impl SolutionPredicate for NeverSolved {
    fn is_solution(&self, _letters: &BoardLetters) -> bool {
        false
    }
}

/// Accepts any layout; the puzzle is solved once every piece is placed without
/// conflicts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCompleteLayout;

impl SolutionPredicate for AnyCompleteLayout {
    fn is_solution(&self, _letters: &BoardLetters) -> bool {
        true
    }
}

/// Accepts exactly one board layout.
///
/// The text form is one row per `/`-separated segment with `.` for blank cells,
/// e.g. `"CAT../....."`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLayout {
    rows: Vec<Vec<Option<char>>>,
}

impl TargetLayout {
    /// Size of the target board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }
}

impl FromStr for TargetLayout {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<Option<char>>> = s
            .split(ROW_SEPARATOR)
            .map(|row| row.chars().map(|c| (c != '.').then_some(c)).collect())
            .collect();
        let size = rows.len();
        if let Some(row) = rows.iter().position(|row| row.len() != size) {
            return Err(GameError::InvalidTarget { row, size });
        }
        Ok(Self { rows })
    }
}

impl SolutionPredicate for TargetLayout {
    fn is_solution(&self, letters: &BoardLetters) -> bool {
        letters.size() == self.size()
            && self.rows.iter().enumerate().all(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .all(|(col, &expected)| letters.get(Cell::new(row, col)) == expected)
            })
    }
}

/// Result of the solve detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveStatus {
    /// Every piece is on the board.
    pub all_pieces_are_used: bool,
    /// All pieces used, no conflicts, and the predicate accepts the layout.
    pub game_is_solved: bool,
}

/// Evaluates the solve status from the current piece positions alone.
#[must_use]
pub fn detect(
    pieces: &[Piece],
    grid_size: usize,
    predicate: &dyn SolutionPredicate,
) -> SolveStatus {
    let all_pieces_are_used = pieces.iter().all(Piece::is_placed);
    let game_is_solved = all_pieces_are_used
        && !OverlapGrid::compute(pieces, grid_size).has_conflicts()
        && predicate.is_solution(&BoardLetters::collect(pieces, grid_size));
    SolveStatus {
        all_pieces_are_used,
        game_is_solved,
    }
}

#[cfg(test)]
mod tests {
    use wordtiles_core::PieceId;

    use super::*;

    fn placed(id: u32, letters: &str, row: usize, col: usize) -> Piece {
        Piece::new(PieceId::new(id), letters.parse().unwrap())
            .with_board_position(Cell::new(row, col))
    }

    #[test]
    fn unplaced_piece_blocks_solve() {
        let pieces = vec![
            placed(0, "CAT", 0, 0),
            Piece::new(PieceId::new(1), "DOG".parse().unwrap()),
        ];
        let status = detect(&pieces, 3, &AnyCompleteLayout);
        assert_eq!(status, SolveStatus::default());
    }

    #[test]
    fn overlap_blocks_solve_even_when_all_used() {
        let pieces = vec![placed(0, "CAT", 0, 0), placed(1, "O/G", 0, 1)];
        let status = detect(&pieces, 3, &AnyCompleteLayout);
        assert!(status.all_pieces_are_used);
        assert!(!status.game_is_solved);
    }

    #[test]
    fn never_solved_rejects_complete_layout() {
        let pieces = vec![placed(0, "CAT", 0, 0), placed(1, "O/G", 1, 1)];
        let status = detect(&pieces, 3, &NeverSolved);
        assert!(status.all_pieces_are_used);
        assert!(!status.game_is_solved);
        assert!(detect(&pieces, 3, &AnyCompleteLayout).game_is_solved);
    }

    #[test]
    fn target_layout_matches_exact_letters() {
        let target: TargetLayout = "CAT/.O./.G.".parse().unwrap();
        let pieces = vec![placed(0, "CAT", 0, 0), placed(1, "O/G", 1, 1)];
        assert!(detect(&pieces, 3, &target).game_is_solved);

        let shifted = vec![placed(0, "CAT", 0, 0), placed(1, "O/G", 1, 2)];
        let status = detect(&shifted, 3, &target);
        assert!(status.all_pieces_are_used);
        assert!(!status.game_is_solved);
    }

    #[test]
    fn target_layout_must_be_square() {
        assert_eq!(
            "CAT/..".parse::<TargetLayout>(),
            Err(GameError::InvalidTarget { row: 0, size: 2 })
        );
    }

    #[test]
    fn board_letters_display() {
        let pieces = vec![placed(0, "A./.B", 0, 1)];
        let letters = BoardLetters::collect(&pieces, 3);
        assert_eq!(letters.to_string(), ".A./..B/...");
    }
}
