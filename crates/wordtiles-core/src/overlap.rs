//! Per-cell occupancy counts derived from piece placement.

use crate::{Cell, Piece};

/// Number of placed letters covering each board cell.
///
/// `0` means empty, `1` a single legal occupant, and anything larger a conflict.
/// The grid is never a source of truth: it is rebuilt from the current piece
/// positions whenever it is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapGrid {
    size: usize,
    counts: Vec<u32>,
}

impl OverlapGrid {
    /// Counts the placed letters of `pieces` on a `grid_size × grid_size` board.
    ///
    /// Pieces are expected to be within bounds; letters that fall outside the
    /// board are ignored.
    #[must_use]
    pub fn compute(pieces: &[Piece], grid_size: usize) -> Self {
        let mut counts = vec![0; grid_size * grid_size];
        for piece in pieces {
            for cell in piece.occupied_cells() {
                if cell.row < grid_size && cell.col < grid_size {
                    counts[cell.row * grid_size + cell.col] += 1;
                } else {
                    log::warn!("piece {} covers {cell} outside the board", piece.id());
                }
            }
        }
        Self {
            size: grid_size,
            counts,
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of letters covering `cell`; zero outside the board.
    #[must_use]
    pub fn count(&self, cell: Cell) -> u32 {
        if cell.row >= self.size || cell.col >= self.size {
            return 0;
        }
        self.counts[cell.row * self.size + cell.col]
    }

    /// Returns `true` if more than one letter covers `cell`.
    #[must_use]
    pub fn is_conflict(&self, cell: Cell) -> bool {
        self.count(cell) > 1
    }

    /// Returns `true` if any cell is covered more than once.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        self.counts.iter().any(|&count| count > 1)
    }

    /// Sum of all counts, equal to the number of placed letters.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterates the rows of counts from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks(self.size.max(1))
    }

    /// Cells of `piece` that sit on a conflicting board cell.
    pub fn conflicts_of<'a>(&'a self, piece: &'a Piece) -> impl Iterator<Item = Cell> + 'a {
        piece
            .occupied_cells()
            .filter(move |&cell| self.is_conflict(cell))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::PieceId;

    fn placed(id: u32, letters: &str, row: usize, col: usize) -> Piece {
        Piece::new(PieceId::new(id), letters.parse().unwrap())
            .with_board_position(Cell::new(row, col))
    }

    #[test]
    fn single_piece_scenario() {
        let grid = OverlapGrid::compute(&[placed(0, "CAT", 2, 1)], 5);
        for row in 0..5 {
            for col in 0..5 {
                let expected = u32::from(row == 2 && (1..=3).contains(&col));
                assert_eq!(grid.count(Cell::new(row, col)), expected, "({row}, {col})");
            }
        }
        assert!(!grid.has_conflicts());
    }

    #[test]
    fn shared_cell_counts_twice() {
        let a = placed(0, "AB", 0, 0);
        let b = placed(1, "C/D", 0, 1);
        let grid = OverlapGrid::compute(&[a.clone(), b], 3);
        assert_eq!(grid.count(Cell::new(0, 1)), 2);
        assert!(grid.is_conflict(Cell::new(0, 1)));
        assert!(grid.has_conflicts());
        assert_eq!(grid.conflicts_of(&a).collect::<Vec<_>>(), vec![Cell::new(0, 1)]);
    }

    #[test]
    fn unplaced_pieces_are_ignored() {
        let pool = Piece::new(PieceId::new(0), "XYZ".parse().unwrap());
        let grid = OverlapGrid::compute(&[pool], 4);
        assert_eq!(grid.total(), 0);
        assert_eq!(grid.rows().count(), 4);
    }

    fn arb_pieces() -> impl Strategy<Value = Vec<Piece>> {
        let letters = prop::sample::select(vec!["A", "AB", "A/B", "A./.B", "ABC/.D.", "AB/CD"]);
        let position = prop::option::of((0usize..4, 0usize..4));
        prop::collection::vec((letters, position), 0..6).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (letters, position))| {
                    let piece = Piece::new(
                        PieceId::new(u32::try_from(i).unwrap()),
                        letters.parse().unwrap(),
                    );
                    match position {
                        Some((row, col)) => piece.with_board_position(Cell::new(row, col)),
                        None => piece,
                    }
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn compute_is_pure_and_sums_to_letter_count(pieces in arb_pieces()) {
            // Offsets up to 3 plus a width of 3 stay inside a 7-cell board.
            let grid = OverlapGrid::compute(&pieces, 7);
            prop_assert_eq!(&grid, &OverlapGrid::compute(&pieces, 7));
            let placed_letters: usize = pieces
                .iter()
                .filter(|piece| piece.is_placed())
                .map(|piece| piece.letters().letter_count())
                .sum();
            prop_assert_eq!(grid.total() as usize, placed_letters);
        }
    }
}
