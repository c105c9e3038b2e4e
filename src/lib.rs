//! Chess rules engine with a fixed-depth alpha-beta search.
//!
//! [`board`] holds the rules core: positions, legal move generation,
//! evaluation and search. [`engine`] wraps it in a game session that a
//! presentation or transport layer can drive.

pub mod board;
pub mod engine;
pub mod sync;

pub use board::{Color, Move, Piece, Position, Square};
pub use engine::{GameConfig, GameSession, GameStatus, MoveOutcome};
pub use sync::StopFlag;
