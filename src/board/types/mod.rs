//! Core chess types.
//!
//! This module contains the fundamental value types used by the rules core:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state
//! - `Direction` / `RayKind` - ray geometry for check and pin detection

mod castling;
mod direction;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastlingRights;
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use direction::{Direction, RayKind, ALL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS};
