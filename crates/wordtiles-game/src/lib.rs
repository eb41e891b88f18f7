//! Piece placement and drag interaction engine for the wordtiles puzzle.
//!
//! The [`Game`] reducer owns the [`GameState`] and applies one [`Action`] at a
//! time. It tracks the in-progress drag, grows a single-piece drag into a group
//! shift of touching pieces, commits placements within the board, and re-runs the
//! solve detector after every placement change.
//!
//! # Example
//!
//! ```
//! use wordtiles_core::{Cell, Piece, PieceId, Point, Rect};
//! use wordtiles_game::{Action, AnyCompleteLayout, FixedSurface, Game, PointerId};
//!
//! let board = Rect::new(0.0, 0.0, 50.0, 50.0);
//! let pool = Rect::new(0.0, 60.0, 50.0, 50.0);
//! let surface = FixedSurface::new(board, pool);
//!
//! let cat = Piece::new(PieceId::new(0), "CAT".parse().unwrap());
//! let mut game = Game::with_predicate(vec![cat], 5, AnyCompleteLayout).unwrap();
//!
//! game.apply(
//!     Action::DragStart {
//!         piece_id: PieceId::new(0),
//!         pointer_id: PointerId(1),
//!         pointer: Point::new(5.0, 65.0),
//!         pointer_offset: Point::new(5.0, 5.0),
//!     },
//!     &surface,
//! );
//! game.apply(Action::DragMove { pointer: Point::new(15.0, 25.0) }, &surface);
//! game.apply(Action::DragEnd, &surface);
//!
//! let cat = game.state().piece(PieceId::new(0)).unwrap();
//! assert_eq!(cat.board_position(), Some(Cell::new(2, 1)));
//! assert!(game.state().game_is_solved());
//! ```
#![allow(clippy::missing_errors_doc)]

pub use self::{
    action::Action,
    drag::{Destination, DragPhase, DragState, PointerId},
    error::{GameError, RejectReason},
    game::{ActionOutcome, Commit, Game, GameState, RevertReason, Transition},
    solve::{
        AnyCompleteLayout, BoardLetters, NeverSolved, SolutionPredicate, SolveStatus, TargetLayout,
    },
    surface::{FixedSurface, Region, Surface},
};

mod action;
mod drag;
mod error;
mod game;
pub mod group;
pub mod solve;
pub mod surface;
