//! Game session layer over the rules core.
//!
//! This is the narrow interface a presentation or transport layer calls:
//! start a game, list and play legal moves, undo, and ask the engine to
//! move either synchronously or on a background thread.

mod config;
mod job;
mod session;

pub use config::GameConfig;
pub use job::SearchJob;
pub use session::{GameSession, GameStatus, MoveOutcome};
