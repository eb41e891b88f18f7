//! Line-oriented pointer scripts for the headless driver.
//!
//! Each non-blank line holds one command; `#` starts a comment.
//!
//! ```text
//! down PIECE POINTER X Y OX OY   # press POINTER on PIECE at (X, Y), grabbed at (OX, OY)
//! move X Y                       # move the captured pointer
//! up X Y                         # release the pointer at (X, Y)
//! wait MS                        # advance the clock
//! capture on|off                 # allow or refuse pointer capture
//! board on|off                   # make the board measurable or not
//! show                           # print the board and status
//! ```

use std::{str::FromStr, time::Duration};

use wordtiles_core::{PieceId, Point};
use wordtiles_game::PointerId;

/// One scripted event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    /// Pointer pressed on a piece.
    Down {
        /// Pressed piece.
        piece_id: PieceId,
        /// Pressing pointer.
        pointer_id: PointerId,
        /// Pointer position.
        pointer: Point,
        /// Grab point relative to the piece's top-left corner.
        pointer_offset: Point,
    },
    /// Pointer moved.
    Move(Point),
    /// Pointer released.
    Up(Point),
    /// Clock advanced.
    Wait(Duration),
    /// Capture allowed (`true`) or refused.
    Capture(bool),
    /// Board measurable (`true`) or not.
    Board(bool),
    /// Render the current state.
    Show,
}

/// What went wrong on a script line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScriptErrorKind {
    /// The command word is not known.
    #[display("unknown command `{_0}`")]
    UnknownCommand(String),
    /// Wrong number of arguments.
    #[display("`{command}` takes {expected} argument(s), got {got}")]
    ArgumentCount {
        /// Command word.
        command: &'static str,
        /// Required count.
        expected: usize,
        /// Given count.
        got: usize,
    },
    /// An argument could not be parsed.
    #[display("invalid {what} `{value}`")]
    InvalidArgument {
        /// Kind of value expected.
        what: &'static str,
        /// Offending text.
        value: String,
    },
}

/// A script line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {kind}")]
pub struct ScriptError {
    /// One-based line number.
    pub line: usize,
    /// The failure.
    pub kind: ScriptErrorKind,
}

/// Parses a whole script, skipping blank lines and comments.
///
/// # Errors
///
/// Returns the first line that fails to parse.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_no = index + 1;
            let code = line.split_once('#').map_or(line, |(code, _)| code).trim();
            (!code.is_empty()).then(|| {
                code.parse()
                    .map_err(|kind| ScriptError { line: line_no, kind })
            })
        })
        .collect()
}

impl FromStr for ScriptCommand {
    type Err = ScriptErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();
        let cmd = match command {
            "down" => {
                expect_args("down", &args, 6)?;
                Self::Down {
                    piece_id: PieceId::new(parse_arg(args[0], "piece id")?),
                    pointer_id: PointerId(parse_arg(args[1], "pointer id")?),
                    pointer: parse_point(args[2], args[3])?,
                    pointer_offset: parse_point(args[4], args[5])?,
                }
            }
            "move" => {
                expect_args("move", &args, 2)?;
                Self::Move(parse_point(args[0], args[1])?)
            }
            "up" => {
                expect_args("up", &args, 2)?;
                Self::Up(parse_point(args[0], args[1])?)
            }
            "wait" => {
                expect_args("wait", &args, 1)?;
                Self::Wait(Duration::from_millis(parse_arg(args[0], "milliseconds")?))
            }
            "capture" => {
                expect_args("capture", &args, 1)?;
                Self::Capture(parse_switch(args[0])?)
            }
            "board" => {
                expect_args("board", &args, 1)?;
                Self::Board(parse_switch(args[0])?)
            }
            "show" => {
                expect_args("show", &args, 0)?;
                Self::Show
            }
            other => return Err(ScriptErrorKind::UnknownCommand(other.to_owned())),
        };
        Ok(cmd)
    }
}

fn expect_args(
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), ScriptErrorKind> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ScriptErrorKind::ArgumentCount {
            command,
            expected,
            got: args.len(),
        })
    }
}

fn parse_arg<T: FromStr>(value: &str, what: &'static str) -> Result<T, ScriptErrorKind> {
    value.parse().map_err(|_| ScriptErrorKind::InvalidArgument {
        what,
        value: value.to_owned(),
    })
}

fn parse_point(x: &str, y: &str) -> Result<Point, ScriptErrorKind> {
    Ok(Point::new(parse_arg(x, "coordinate")?, parse_arg(y, "coordinate")?))
}

fn parse_switch(value: &str) -> Result<bool, ScriptErrorKind> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(ScriptErrorKind::InvalidArgument {
            what: "switch",
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_skips_comments() {
        let script = "\
# pick up the first piece
down 0 1 5 65 5 5
move 15.5 25   # over the board

wait 500
capture off
board on
up 15.5 25
show
";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands, vec![
            ScriptCommand::Down {
                piece_id: PieceId::new(0),
                pointer_id: PointerId(1),
                pointer: Point::new(5.0, 65.0),
                pointer_offset: Point::new(5.0, 5.0),
            },
            ScriptCommand::Move(Point::new(15.5, 25.0)),
            ScriptCommand::Wait(Duration::from_millis(500)),
            ScriptCommand::Capture(false),
            ScriptCommand::Board(true),
            ScriptCommand::Up(Point::new(15.5, 25.0)),
            ScriptCommand::Show,
        ]);
    }

    #[test]
    fn reports_line_of_first_error() {
        let err = parse_script("show\n\nmove 1\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ScriptErrorKind::ArgumentCount {
            command: "move",
            expected: 2,
            got: 1,
        });
        assert_eq!(
            err.to_string(),
            "line 3: `move` takes 2 argument(s), got 1"
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            "jump 1 2".parse::<ScriptCommand>(),
            Err(ScriptErrorKind::UnknownCommand("jump".to_owned()))
        );
        assert_eq!(
            "capture maybe".parse::<ScriptCommand>(),
            Err(ScriptErrorKind::InvalidArgument {
                what: "switch",
                value: "maybe".to_owned(),
            })
        );
        assert!(matches!(
            "wait -5".parse::<ScriptCommand>(),
            Err(ScriptErrorKind::InvalidArgument { what: "milliseconds", .. })
        ));
    }
}
