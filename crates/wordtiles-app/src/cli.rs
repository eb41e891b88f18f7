//! Command-line front end: builds a game from flags and replays a pointer script.

use std::{
    fs,
    io::{self, Read as _, Write},
    path::PathBuf,
    time::Duration,
};

use clap::Parser;
use wordtiles_core::{Cell, Letters, ParseLettersError, Piece, PieceId};
use wordtiles_game::{Game, GameError, TargetLayout};

use crate::{
    ScreenLayout, SessionConfig,
    replay::Replay,
    script::{self, ScriptError},
    view,
};

/// Separates a piece's letters from its starting board cell.
const POSITION_SEPARATOR: char = '@';

/// Replays pointer interactions against a wordtiles puzzle.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Board side length in cells.
    #[arg(short, long, value_name = "CELLS", default_value_t = 5)]
    pub grid_size: usize,

    /// A piece, rows separated by `/` and holes written `.`. Repeatable.
    ///
    /// Append `@ROW,COL` to start the piece on the board, e.g. `C.T/ABC@0,1`.
    #[arg(short, long = "piece", value_name = "LETTERS", required = true)]
    pub pieces: Vec<String>,

    /// Solution rows separated by `/`; without it the puzzle is never solved.
    #[arg(short, long, value_name = "ROWS")]
    pub target: Option<String>,

    /// Side length of one board cell in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = 40.0)]
    pub cell_size: f32,

    /// Hold time before a still drag groups its neighbors.
    #[arg(long, value_name = "MILLIS", default_value_t = 500)]
    pub dwell_ms: u64,

    /// Print every piece's outline before replaying.
    #[arg(long)]
    pub show_pieces: bool,

    /// Script to replay; reads standard input when omitted.
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,
}

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// A piece's letters are malformed.
    #[display("piece {index}: {source}")]
    Piece {
        /// Zero-based position on the command line.
        index: usize,
        /// The parse failure.
        source: ParseLettersError,
    },
    /// A piece's starting cell is malformed.
    #[display("piece {index}: invalid position `{position}`")]
    Position {
        /// Zero-based position on the command line.
        index: usize,
        /// The offending text.
        position: String,
    },
    /// The puzzle could not be set up.
    #[display("{_0}")]
    Game(#[from] GameError),
    /// The script could not be parsed.
    #[display("{_0}")]
    Script(#[from] ScriptError),
    /// Reading the script or writing output failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
}

impl Args {
    /// Session tunables.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            dwell: Duration::from_millis(self.dwell_ms),
        }
    }

    /// Screen layout of the headless driver.
    #[must_use]
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout {
            cell_size: self.cell_size,
            grid_size: self.grid_size,
        }
    }

    /// Builds the puzzle described by the flags.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed pieces or target, or an inconsistent setup.
    pub fn build_game(&self) -> Result<Game, CliError> {
        let pieces = (0..)
            .zip(&self.pieces)
            .enumerate()
            .map(|(index, (id, text))| parse_piece(index, PieceId::new(id), text))
            .collect::<Result<Vec<_>, _>>()?;

        let Some(target) = &self.target else {
            return Ok(Game::new(pieces, self.grid_size)?);
        };
        let target: TargetLayout = target.parse()?;
        if target.size() != self.grid_size {
            return Err(GameError::TargetSizeMismatch {
                target: target.size(),
                grid_size: self.grid_size,
            }
            .into());
        }
        Ok(Game::with_predicate(pieces, self.grid_size, target)?)
    }
}

fn parse_piece(index: usize, id: PieceId, text: &str) -> Result<Piece, CliError> {
    let (letters, position) = match text.split_once(POSITION_SEPARATOR) {
        Some((letters, position)) => (letters, Some(position)),
        None => (text, None),
    };
    let letters: Letters = letters
        .parse()
        .map_err(|source| CliError::Piece { index, source })?;
    let piece = Piece::new(id, letters);
    let Some(position) = position else {
        return Ok(piece);
    };
    let cell = position
        .split_once(',')
        .and_then(|(row, col)| Some(Cell::new(row.trim().parse().ok()?, col.trim().parse().ok()?)))
        .ok_or_else(|| CliError::Position {
            index,
            position: position.to_owned(),
        })?;
    Ok(piece.with_board_position(cell))
}

/// Runs the command line: reads the script, replays it, prints the final state.
///
/// # Errors
///
/// Returns an error if setup fails, the script cannot be read or parsed, or
/// output cannot be written.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let source = match &args.script {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    };
    run_script(args, &source, out)
}

/// Replays `source` against the puzzle described by `args`.
///
/// # Errors
///
/// See [`run`].
pub fn run_script(args: &Args, source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let game = args.build_game()?;
    let commands = script::parse_script(source)?;
    log::info!(
        "replaying {} command(s) on a {}x{} board with {} piece(s)",
        commands.len(),
        args.grid_size,
        args.grid_size,
        game.state().pieces().len(),
    );

    if args.show_pieces {
        for piece in game.state().pieces() {
            writeln!(out, "piece {}:", piece.id())?;
            write!(out, "{}", view::render_piece(piece.letters()))?;
        }
    }

    let mut replay = Replay::new(game, args.layout(), &args.session_config());
    replay.run(&commands, out)?;

    let session = replay.session();
    write!(out, "{}", view::render_board(session.game()))?;
    write!(out, "{}", view::render_status(session.game(), session.surface()))?;
    Ok(())
}
