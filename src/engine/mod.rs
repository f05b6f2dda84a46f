//! The matching engine: selection state machine, match resolution,
//! timing, win detection, and lifecycle notifications.
//!
//! Lifecycle per session: `NotStarted -> Running -> Ended`, with
//! `Running -> NotStarted` via `stop_game`. `Ended` is terminal until the
//! next `start_game` replaces the session.

pub mod event;
pub mod game;
pub mod session;

pub use event::{format_elapsed, GameEvent};
pub use game::MatchEngine;
pub use session::GameSession;
