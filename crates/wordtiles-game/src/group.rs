//! Clusters of touching pieces that move as one.
//!
//! Two placed pieces belong to the same cluster iff a chain of pairwise
//! overlapping-or-adjacent pieces connects them. A cluster moves rigidly: every
//! member gets the same row and column delta.

use std::collections::VecDeque;

use wordtiles_core::{
    Cell, Extent, Piece, PieceId,
    piece::{get_piece_by_id, pieces_touching, translate_piece},
};

/// Bounding box of a set of placed pieces, in board cells.
///
/// `bottom` and `right` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupBounds {
    /// Smallest top row.
    pub top: usize,
    /// Smallest left column.
    pub left: usize,
    /// Largest `top + rows`.
    pub bottom: usize,
    /// Largest `left + cols`.
    pub right: usize,
}

impl GroupBounds {
    /// Bounds of the placed pieces among `ids`, or `None` if none are placed.
    #[must_use]
    pub fn of(pieces: &[Piece], ids: &[PieceId]) -> Option<Self> {
        ids.iter()
            .filter_map(|&id| get_piece_by_id(pieces, id))
            .filter_map(|piece| {
                let origin = piece.board_position()?;
                let extent = piece.extent();
                Some(Self {
                    top: origin.row,
                    left: origin.col,
                    bottom: origin.row + extent.rows,
                    right: origin.col + extent.cols,
                })
            })
            .reduce(|a, b| Self {
                top: a.top.min(b.top),
                left: a.left.min(b.left),
                bottom: a.bottom.max(b.bottom),
                right: a.right.max(b.right),
            })
    }

    /// Top-left cell.
    #[must_use]
    pub fn origin(&self) -> Cell {
        Cell::new(self.top, self.left)
    }

    /// Size of the box.
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::new(self.bottom - self.top, self.right - self.left)
    }
}

/// Finds every placed piece transitively touching `seed`, seed first.
///
/// Returns just the seed if it is not placed, and nothing if it does not exist.
#[must_use]
pub fn touching_cluster(pieces: &[Piece], seed: PieceId) -> Vec<PieceId> {
    let Some(start) = pieces.iter().position(|piece| piece.id() == seed) else {
        return Vec::new();
    };
    let mut visited = vec![false; pieces.len()];
    let mut queue = VecDeque::new();
    let mut cluster = Vec::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(index) = queue.pop_front() {
        cluster.push(pieces[index].id());
        for (other, piece) in pieces.iter().enumerate() {
            if !visited[other] && pieces_touching(&pieces[index], piece) {
                visited[other] = true;
                queue.push_back(other);
            }
        }
    }
    cluster
}

/// Board extent of a dragged group laid out by group positions.
///
/// Computed as the maximum over members of `group_top + rows` and
/// `group_left + cols`.
#[must_use]
pub fn group_extent(pieces: &[Piece], ids: &[PieceId]) -> Extent {
    ids.iter()
        .filter_map(|&id| get_piece_by_id(pieces, id))
        .fold(Extent::default(), |acc, piece| {
            let group = piece.group_position();
            let extent = piece.extent();
            Extent::new(
                acc.rows.max(group.row + extent.rows),
                acc.cols.max(group.col + extent.cols),
            )
        })
}

/// Computes the board cells of `ids` after a rigid shift by `(d_row, d_col)`.
///
/// Returns `None` if any member is unplaced or would leave the
/// `grid_size × grid_size` board.
#[must_use]
pub fn translate_group(
    pieces: &[Piece],
    ids: &[PieceId],
    d_row: i32,
    d_col: i32,
    grid_size: usize,
) -> Option<Vec<(PieceId, Cell)>> {
    ids.iter()
        .map(|&id| {
            let piece = get_piece_by_id(pieces, id)?;
            let cell = translate_piece(piece, d_row, d_col)?.fit(piece.extent(), grid_size)?;
            Some((id, cell))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn piece(id: u32, letters: &str) -> Piece {
        Piece::new(PieceId::new(id), letters.parse().unwrap())
    }

    fn placed(id: u32, letters: &str, row: usize, col: usize) -> Piece {
        piece(id, letters).with_board_position(Cell::new(row, col))
    }

    fn ids(values: &[u32]) -> Vec<PieceId> {
        values.iter().copied().map(PieceId::new).collect()
    }

    #[test]
    fn cluster_is_transitive() {
        let pieces = vec![
            placed(0, "AB", 0, 0),
            placed(1, "C", 0, 2),
            // touches 1 but not 0
            placed(2, "D/E", 1, 2),
            // isolated
            placed(3, "F", 4, 4),
            piece(4, "G"),
        ];
        assert_eq!(touching_cluster(&pieces, PieceId::new(0)), ids(&[0, 1, 2]));
        assert_eq!(touching_cluster(&pieces, PieceId::new(2)), ids(&[2, 1, 0]));
        assert_eq!(touching_cluster(&pieces, PieceId::new(3)), ids(&[3]));
        assert_eq!(touching_cluster(&pieces, PieceId::new(4)), ids(&[4]));
        assert!(touching_cluster(&pieces, PieceId::new(9)).is_empty());
    }

    #[test]
    fn overlapping_pieces_join_cluster() {
        let pieces = vec![placed(0, "AB", 2, 2), placed(1, "X", 2, 3)];
        assert_eq!(touching_cluster(&pieces, PieceId::new(1)), ids(&[1, 0]));
    }

    #[test]
    fn bounds_cover_all_members() {
        let pieces = vec![placed(0, "AB", 1, 0), placed(1, "C/D", 0, 2), piece(2, "E")];
        let bounds = GroupBounds::of(&pieces, &ids(&[0, 1, 2])).unwrap();
        assert_eq!(bounds.origin(), Cell::new(0, 0));
        assert_eq!(bounds.extent(), Extent::new(2, 3));
        assert!(GroupBounds::of(&pieces, &ids(&[2])).is_none());
    }

    #[test]
    fn group_extent_uses_group_positions() {
        let pieces = vec![
            piece(0, "AB").with_group_position(Cell::new(0, 0)),
            piece(1, "C/D").with_group_position(Cell::new(1, 2)),
        ];
        assert_eq!(group_extent(&pieces, &ids(&[0, 1])), Extent::new(3, 3));
    }

    #[test]
    fn shift_scenario() {
        let pieces = vec![placed(0, "AB", 0, 0), placed(1, "C", 0, 2)];
        let cluster = touching_cluster(&pieces, PieceId::new(0));
        let moved = translate_group(&pieces, &cluster, 1, 0, 5).unwrap();
        assert_eq!(
            moved,
            vec![
                (PieceId::new(0), Cell::new(1, 0)),
                (PieceId::new(1), Cell::new(1, 2)),
            ]
        );
    }

    #[test]
    fn shift_off_board_is_rejected() {
        let pieces = vec![placed(0, "AB", 0, 0), placed(1, "C", 0, 2)];
        let cluster = ids(&[0, 1]);
        assert!(translate_group(&pieces, &cluster, -1, 0, 5).is_none());
        assert!(translate_group(&pieces, &cluster, 0, 3, 5).is_none());
        assert!(translate_group(&pieces, &cluster, 0, 2, 5).is_some());
    }

    proptest! {
        #[test]
        fn shift_preserves_relative_offsets(
            a in (0usize..4, 0usize..4),
            b in (0usize..4, 0usize..4),
            d_row in -3i32..4,
            d_col in -3i32..4,
        ) {
            let pieces = vec![placed(0, "AB", a.0, a.1), placed(1, "C/D", b.0, b.1)];
            let cluster = ids(&[0, 1]);
            if let Some(moved) = translate_group(&pieces, &cluster, d_row, d_col, 8) {
                let before = (
                    a.0.cast_signed() - b.0.cast_signed(),
                    a.1.cast_signed() - b.1.cast_signed(),
                );
                let (_, a_cell) = moved[0];
                let (_, b_cell) = moved[1];
                let after = (
                    a_cell.row.cast_signed() - b_cell.row.cast_signed(),
                    a_cell.col.cast_signed() - b_cell.col.cast_signed(),
                );
                prop_assert_eq!(before, after);
            }
        }
    }
}
