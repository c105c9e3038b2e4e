//! Chess rules core: position, move generation, evaluation and search.
//!
//! The board is a plain 8x8 grid. Legal moves come from a check-and-pin
//! scan around the king, and the search explores the tree by applying and
//! undoing moves on a single position.
//!
//! # Example
//! ```
//! use chess_core::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.get_legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use eval::{piece_value, MATERIAL, POSITION_WEIGHT};
pub use search::{
    find_best_move, find_random_move, negamax_score, search, search_with_rng, SearchLimits,
    SearchResult, CHECKMATE, DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH, STALEMATE,
};
pub use state::{Grid, Position};
pub use types::{CastlingRights, Color, Move, MoveList, Piece, Square};

pub(crate) use types::{Direction, RayKind, ALL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS};
