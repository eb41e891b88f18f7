//! Headless driver for the wordtiles engine.
//!
//! A [`Session`] sits between pointer events and the [`Game`](wordtiles_game::Game)
//! reducer. It owns the effects whose lifetime follows a drag: pointer capture and
//! the dwell timer that grows a still drag into a group shift. The command-line
//! front end replays scripted pointer events through a session and prints the board.
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::{
    config::{ScreenLayout, SessionConfig},
    session::Session,
};

pub mod action_queue;
pub mod cli;
mod config;
pub mod dwell_timer;
pub mod pointer_capture;
pub mod replay;
pub mod script;
mod session;
pub mod view;
