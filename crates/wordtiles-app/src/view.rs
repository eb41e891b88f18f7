//! Plain-text rendering of game state.

use std::fmt;

use wordtiles_core::{Cell, LetterBorders, Letters};
use wordtiles_game::{Destination, Game, Surface};

const EMPTY: char = '.';
const CONFLICT: char = '*';

/// Renders the board, one line per row.
///
/// Empty cells are `.` and cells covered by more than one piece are `*`.
#[must_use]
pub fn render_board(game: &Game) -> String {
    let state = game.state();
    let letters = state.board_letters();
    let overlap = state.overlap_grid();
    let size = state.grid_size();

    let mut out = String::with_capacity(size * (size + 1));
    for row in 0..size {
        for col in 0..size {
            let cell = Cell::new(row, col);
            let ch = if overlap.is_conflict(cell) {
                CONFLICT
            } else {
                letters.get(cell).unwrap_or(EMPTY)
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Renders a piece's letters with outlines along its borders.
#[must_use]
pub fn render_piece(letters: &Letters) -> String {
    let height = letters.rows() * 2 + 1;
    let width = letters.cols() * 2 + 1;
    let mut canvas = vec![vec![' '; width]; height];

    for (row, col, ch) in letters.iter() {
        let (y, x) = (row * 2 + 1, col * 2 + 1);
        canvas[y][x] = ch;
        let borders = letters.borders(row, col);
        if borders.contains(LetterBorders::TOP) {
            canvas[y - 1][x] = '-';
        }
        if borders.contains(LetterBorders::BOTTOM) {
            canvas[y + 1][x] = '-';
        }
        if borders.contains(LetterBorders::LEFT) {
            canvas[y][x - 1] = '|';
        }
        if borders.contains(LetterBorders::RIGHT) {
            canvas[y][x + 1] = '|';
        }
    }

    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            let vertical = (y > 0 && canvas[y - 1][x] == '|')
                || (y + 1 < height && canvas[y + 1][x] == '|');
            let horizontal = (x > 0 && canvas[y][x - 1] == '-')
                || (x + 1 < width && canvas[y][x + 1] == '-');
            canvas[y][x] = match (vertical, horizontal) {
                (true, true) => '+',
                (true, false) => '|',
                (false, true) => '-',
                (false, false) => ' ',
            };
        }
    }

    let mut out = String::new();
    for line in canvas {
        let line: String = line.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Renders the solve flags, the pool, any conflicts and the live drag.
#[must_use]
pub fn render_status(game: &Game, surface: &impl Surface) -> String {
    StatusView { game, surface }.to_string()
}

struct StatusView<'a, S> {
    game: &'a Game,
    surface: &'a S,
}

impl<S: Surface> fmt::Display for StatusView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.game.state();

        let solved = if state.game_is_solved() { "yes" } else { "no" };
        let used = if state.all_pieces_are_used() { "yes" } else { "no" };
        writeln!(f, "solved: {solved}, all pieces used: {used}")?;

        let pool: Vec<String> = state.pool_pieces().map(|p| p.id().to_string()).collect();
        if pool.is_empty() {
            writeln!(f, "pool: empty")?;
        } else {
            writeln!(f, "pool: {}", pool.join(" "))?;
        }

        let overlap = state.overlap_grid();
        if overlap.has_conflicts() {
            for piece in state.pieces() {
                let cells: Vec<String> =
                    overlap.conflicts_of(piece).map(|c| c.to_string()).collect();
                if !cells.is_empty() {
                    writeln!(f, "conflict: {} at {}", piece.id(), cells.join(" "))?;
                }
            }
        }

        let (Some(drag), Some(origin)) = (state.drag_state(), self.game.drag_origin(self.surface))
        else {
            return writeln!(f, "drag: idle");
        };
        let ids: Vec<String> = drag.piece_ids().iter().map(ToString::to_string).collect();
        write!(
            f,
            "drag: {:?} [{}] at ({}, {}) -> ",
            drag.phase(),
            ids.join(" "),
            origin.x,
            origin.y,
        )?;
        match drag.destination() {
            Destination::None => writeln!(f, "nowhere"),
            Destination::Pool => writeln!(f, "pool"),
            Destination::Board(coord) => writeln!(f, "board {coord}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use wordtiles_core::{Piece, PieceId, Point};
    use wordtiles_game::{Action, PointerId};

    use super::*;

    fn placed(id: u32, letters: &str, row: usize, col: usize) -> Piece {
        Piece::new(PieceId::new(id), letters.parse().unwrap())
            .with_board_position(Cell::new(row, col))
    }

    #[test]
    fn board_marks_conflicts() {
        let game = Game::new(
            vec![placed(0, "CAT", 0, 0), placed(1, "T/O", 0, 2)],
            3,
        )
        .unwrap();
        assert_eq!(render_board(&game), "CA*\n..O\n...\n");
        let status = render_status(&game, &wordtiles_game::FixedSurface::default());
        assert!(status.contains("conflict: #0 at (0, 2)\nconflict: #1 at (0, 2)\n"));
    }

    #[test]
    fn piece_outline_follows_holes() {
        let letters: Letters = "AB/.C".parse().unwrap();
        assert_eq!(
            render_piece(&letters),
            "+---+\n|A B|\n+-+ |\n  |C|\n  +-+\n"
        );
    }

    #[test]
    fn status_describes_live_drag() {
        let surface = wordtiles_game::FixedSurface::new(
            wordtiles_core::Rect::new(0.0, 0.0, 50.0, 50.0),
            wordtiles_core::Rect::new(0.0, 60.0, 50.0, 50.0),
        );
        let mut game = Game::new(vec![Piece::new(PieceId::new(0), "CAT".parse().unwrap())], 5)
            .unwrap();
        game.apply(
            Action::DragStart {
                piece_id: PieceId::new(0),
                pointer_id: PointerId(1),
                pointer: Point::new(5.0, 65.0),
                pointer_offset: Point::new(5.0, 5.0),
            },
            &surface,
        );
        game.apply(Action::DragMove { pointer: Point::new(15.0, 25.0) }, &surface);
        assert!(
            render_status(&game, &surface)
                .ends_with("drag: DraggingSingle [#0] at (10, 20) -> board (2, 1)\n")
        );
    }

    #[test]
    fn status_reports_solve_and_pool() {
        let surface = wordtiles_game::FixedSurface::default();
        let game = Game::new(
            vec![placed(0, "CAT", 0, 0), Piece::new(PieceId::new(1), "DOG".parse().unwrap())],
            3,
        )
        .unwrap();
        assert_eq!(
            render_status(&game, &surface),
            "solved: no, all pieces used: no\npool: #1\ndrag: idle\n"
        );
    }
}
