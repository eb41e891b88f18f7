//! Runs pointer scripts against a session on a virtual clock.

use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use wordtiles_game::{ActionOutcome, FixedSurface, Game, Transition};

use crate::{
    ScreenLayout, Session, SessionConfig,
    pointer_capture::SimulatedCapture,
    script::ScriptCommand,
    view,
};

/// A headless session driven by [`ScriptCommand`]s.
#[derive(Debug)]
pub struct Replay {
    session: Session<FixedSurface, SimulatedCapture>,
    layout: ScreenLayout,
    start: Instant,
    elapsed: Duration,
}

impl Replay {
    /// Lays out `game` on screen and starts the clock at zero.
    #[must_use]
    pub fn new(game: Game, layout: ScreenLayout, config: &SessionConfig) -> Self {
        let session = Session::new(
            game,
            layout.surface(),
            std::rc::Rc::new(SimulatedCapture::default()),
            config,
        );
        Self {
            session,
            layout,
            start: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    /// The driven session.
    #[must_use]
    pub fn session(&self) -> &Session<FixedSurface, SimulatedCapture> {
        &self.session
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Runs every command in order, reporting notable outcomes to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a ScriptCommand>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        for command in commands {
            self.step(command, out)?;
        }
        Ok(())
    }

    /// Runs one command.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn step(&mut self, command: &ScriptCommand, out: &mut impl Write) -> io::Result<()> {
        log::trace!("{:?} {command:?}", self.elapsed);
        let now = self.start + self.elapsed;
        match *command {
            ScriptCommand::Down {
                piece_id,
                pointer_id,
                pointer,
                pointer_offset,
            } => {
                let outcome =
                    self.session
                        .pointer_down(piece_id, pointer_id, pointer, pointer_offset, now);
                report(out, "down", outcome)?;
            }
            ScriptCommand::Move(pointer) => match self.session.pointer_move(pointer, now) {
                Some(outcome) => report(out, "move", outcome)?,
                None => writeln!(out, "move: no drag")?,
            },
            ScriptCommand::Up(pointer) => match self.session.pointer_up(pointer, now) {
                Some(outcome) => report(out, "up", outcome)?,
                None => writeln!(out, "up: no drag")?,
            },
            ScriptCommand::Wait(duration) => {
                self.elapsed += duration;
                for outcome in self.session.tick(self.start + self.elapsed) {
                    report(out, "timer", outcome)?;
                }
            }
            ScriptCommand::Capture(allow) => self.session.capture().set_refusing(!allow),
            ScriptCommand::Board(measurable) => {
                self.session.surface_mut().board = measurable.then(|| self.layout.board());
            }
            ScriptCommand::Show => {
                write!(out, "{}", view::render_board(self.session.game()))?;
                write!(
                    out,
                    "{}",
                    view::render_status(self.session.game(), self.session.surface())
                )?;
            }
        }
        Ok(())
    }
}

fn report(out: &mut impl Write, label: &str, outcome: ActionOutcome) -> io::Result<()> {
    match outcome {
        ActionOutcome::Applied(Transition::Moved) => Ok(()),
        ActionOutcome::Applied(transition) => writeln!(out, "{label}: {transition:?}"),
        ActionOutcome::Rejected(reason) => writeln!(out, "{label}: rejected ({reason})"),
    }
}

#[cfg(test)]
mod tests {
    use wordtiles_core::{Cell, Piece, PieceId};

    use super::*;
    use crate::script::parse_script;

    const LAYOUT: ScreenLayout = ScreenLayout {
        cell_size: 10.0,
        grid_size: 5,
    };

    fn replay(pieces: Vec<Piece>) -> Replay {
        Replay::new(
            Game::new(pieces, LAYOUT.grid_size).unwrap(),
            LAYOUT,
            &SessionConfig::default(),
        )
    }

    fn run(replay: &mut Replay, script: &str) -> String {
        let commands = parse_script(script).unwrap();
        let mut out = Vec::new();
        replay.run(&commands, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn places_piece_from_pool() {
        let mut replay = replay(vec![Piece::new(PieceId::new(0), "CAT".parse().unwrap())]);
        let output = run(
            &mut replay,
            "down 0 1 5 65 5 5\nmove 15 25\nup 15 25\n",
        );
        assert_eq!(output, "down: Started\nup: Committed(Placed)\n");
        let state = replay.session().game().state();
        assert_eq!(
            state.piece(PieceId::new(0)).unwrap().board_position(),
            Some(Cell::new(2, 1))
        );
        assert!(state.all_pieces_are_used());
        assert!(!state.game_is_solved());
    }

    #[test]
    fn wait_fires_grouping() {
        let mut replay = replay(vec![
            Piece::new(PieceId::new(0), "AB".parse().unwrap())
                .with_board_position(Cell::new(0, 0)),
            Piece::new(PieceId::new(1), "C".parse().unwrap())
                .with_board_position(Cell::new(1, 0)),
        ]);
        let output = run(&mut replay, "down 0 1 5 5 5 5\nwait 200\nwait 300\n");
        assert_eq!(output, "down: Started\ntimer: Grouped { size: 2 }\n");
        assert_eq!(replay.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn show_prints_board_and_status() {
        let mut replay = replay(vec![
            Piece::new(PieceId::new(0), "HI".parse().unwrap())
                .with_board_position(Cell::new(4, 3)),
        ]);
        let output = run(&mut replay, "show\n");
        assert_eq!(
            output,
            ".....\n.....\n.....\n.....\n...HI\n\
             solved: no, all pieces used: yes\npool: empty\ndrag: idle\n"
        );
    }

    #[test]
    fn drop_reverts_while_board_is_unmeasured() {
        let mut replay = replay(vec![Piece::new(PieceId::new(0), "CAT".parse().unwrap())]);
        let output = run(
            &mut replay,
            "board off\ndown 0 1 5 65 5 5\nmove 15 25\nup 15 25\n",
        );
        assert_eq!(output, "down: Started\nup: Committed(Reverted(NotOverBoard))\n");
        assert!(replay.session().surface().board.is_none());
        assert_eq!(
            replay.session().game().state().piece(PieceId::new(0)).unwrap().board_position(),
            None
        );
    }

    #[test]
    fn group_shift_resumes_when_board_returns() {
        let mut replay = replay(vec![
            Piece::new(PieceId::new(0), "AB".parse().unwrap())
                .with_board_position(Cell::new(0, 0)),
            Piece::new(PieceId::new(1), "C".parse().unwrap())
                .with_board_position(Cell::new(0, 2)),
        ]);
        let output = run(
            &mut replay,
            "board off\ndown 0 1 5 5 5 5\nwait 500\nmove 5 15\nboard on\nup 5 15\n",
        );
        assert_eq!(
            output,
            "down: Started\ntimer: Grouped { size: 2 }\nup: Committed(Placed)\n"
        );
        let state = replay.session().game().state();
        assert_eq!(
            state.piece(PieceId::new(0)).unwrap().board_position(),
            Some(Cell::new(1, 0))
        );
        assert_eq!(
            state.piece(PieceId::new(1)).unwrap().board_position(),
            Some(Cell::new(1, 2))
        );
    }

    #[test]
    fn refused_capture_ends_drag_at_once() {
        let mut replay = replay(vec![Piece::new(PieceId::new(0), "CAT".parse().unwrap())]);
        let output = run(&mut replay, "capture off\ndown 0 1 5 65 5 5\nmove 15 25\n");
        assert_eq!(output, "down: Started\nmove: no drag\n");
        assert!(replay.session().game().state().drag_state().is_none());
    }
}
