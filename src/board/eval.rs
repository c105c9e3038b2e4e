//! Static evaluation: material plus piece-square tables.
//!
//! Scores are in centipawns from White's point of view. Tables are indexed
//! `[rank][file]` with rank 0 = White's back rank, matching the board grid.

use super::search::{CHECKMATE, STALEMATE};
use super::{Color, Piece, Position};

/// Material values in centipawns, indexed by `Piece::index()`
pub const MATERIAL: [i32; 6] = [100, 300, 300, 500, 800, 0];

/// Weight applied to a piece-square table entry
pub const POSITION_WEIGHT: i32 = 20;

type Table = [[i32; 8]; 8];

const KNIGHT_TABLE: Table = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 4, 4, 4, 4, 2, 1],
    [1, 2, 4, 4, 4, 4, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

const BISHOP_TABLE: Table = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

const ROOK_TABLE: Table = [
    [4, 3, 4, 4, 4, 4, 3, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 2, 2, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 4, 4, 4, 4, 3, 4],
];

const QUEEN_TABLE: Table = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 1, 2, 3, 3, 1, 1, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

// Pawns are scored by how far they have advanced, so each color has its own table.
const WHITE_PAWN_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [1, 2, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
];

const BLACK_PAWN_TABLE: Table = [
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Piece-square bonus (before weighting) for a piece on `(rank, file)`.
#[inline]
fn table_bonus(color: Color, piece: Piece, rank: usize, file: usize) -> i32 {
    let table = match (piece, color) {
        (Piece::Pawn, Color::White) => &WHITE_PAWN_TABLE,
        (Piece::Pawn, Color::Black) => &BLACK_PAWN_TABLE,
        (Piece::Knight, _) => &KNIGHT_TABLE,
        (Piece::Bishop, _) => &BISHOP_TABLE,
        (Piece::Rook, _) => &ROOK_TABLE,
        (Piece::Queen, _) => &QUEEN_TABLE,
        (Piece::King, _) => return 0,
    };
    table[rank][file]
}

/// Value of one piece on one square, always positive.
#[inline]
#[must_use]
pub fn piece_value(color: Color, piece: Piece, rank: usize, file: usize) -> i32 {
    MATERIAL[piece.index()] + table_bonus(color, piece, rank, file) * POSITION_WEIGHT
}

impl Position {
    /// Evaluate the position from White's point of view.
    ///
    /// Relies on the terminal flags of the last legal-move generation: a mated
    /// side to move scores `-CHECKMATE` (for White) or `CHECKMATE` (for Black),
    /// and stalemate scores zero.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.is_checkmate() {
            return if self.white_to_move { -CHECKMATE } else { CHECKMATE };
        }
        if self.is_stalemate() {
            return STALEMATE;
        }

        let mut score = 0;
        for (rank, row) in self.board.iter().enumerate() {
            for (file, content) in row.iter().enumerate() {
                if let Some((color, piece)) = *content {
                    score += color.sign() * piece_value(color, piece, rank, file);
                }
            }
        }
        score
    }
}
