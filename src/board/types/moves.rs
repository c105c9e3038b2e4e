//! Move value type.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::Grid;

/// A single ply.
///
/// Moves are produced by the generator against a concrete position and carry
/// the piece that moved and the piece that was captured, so they can be undone
/// without consulting the board. For en passant the captured piece is the
/// bypassed pawn, not the (empty) landing square's content.
///
/// Equality and hashing look only at the start square, end square and the
/// special-move flags, so a caller can build a candidate from a `(from, to)`
/// pair and match it against the legal list. The check/checkmate/draw flags
/// are display annotations set after generation and never affect identity.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    moved: (Color, Piece),
    captured: Option<(Color, Piece)>,
    is_en_passant: bool,
    is_castle: bool,
    is_promotion: bool,
    is_check: bool,
    is_checkmate: bool,
    is_draw: bool,
}

impl Move {
    /// Build an ordinary move by reading the mover and the victim off `grid`.
    ///
    /// # Panics
    /// Panics if `from` is empty.
    #[must_use]
    pub(crate) fn new(from: Square, to: Square, grid: &Grid) -> Self {
        let moved = grid[from.0][from.1].expect("move from an empty square");
        let is_promotion =
            moved.1 == Piece::Pawn && to.rank() == moved.0.pawn_promotion_rank();
        Move {
            from,
            to,
            moved,
            captured: grid[to.0][to.1],
            is_en_passant: false,
            is_castle: false,
            is_promotion,
            is_check: false,
            is_checkmate: false,
            is_draw: false,
        }
    }

    /// Build an en passant capture. The victim is the enemy pawn beside `from`.
    #[must_use]
    pub(crate) fn en_passant(from: Square, to: Square, grid: &Grid) -> Self {
        let mut mv = Move::new(from, to, grid);
        mv.captured = Some((mv.moved.0.opponent(), Piece::Pawn));
        mv.is_en_passant = true;
        mv
    }

    /// Build a castling move, expressed as the king's two-square step.
    #[must_use]
    pub(crate) fn castle(from: Square, to: Square, grid: &Grid) -> Self {
        let mut mv = Move::new(from, to, grid);
        mv.is_castle = true;
        mv
    }

    /// Source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The color and type of the piece that moved (a pawn for promotions)
    #[inline]
    #[must_use]
    pub const fn moved(&self) -> (Color, Piece) {
        self.moved
    }

    /// Type of the moving piece
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.moved.1
    }

    /// The captured piece, if any
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<(Color, Piece)> {
        self.captured
    }

    /// Square the captured piece stood on; differs from `to()` only for en passant.
    #[inline]
    #[must_use]
    pub const fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square(self.from.0, self.to.1)
        } else {
            self.to
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.is_castle
    }

    /// Kingside castles land the king on the g-file
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(&self) -> bool {
        self.is_castle && self.to.1 == 6
    }

    /// Pawn promotions always promote to a queen
    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    /// True if the pawn advanced two squares from its home rank
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.moved.1 == Piece::Pawn && self.from.0.abs_diff(self.to.0) == 2
    }

    #[inline]
    #[must_use]
    pub const fn is_check(&self) -> bool {
        self.is_check
    }

    #[inline]
    #[must_use]
    pub const fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    #[inline]
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Record the state the move left the opponent in, for display.
    pub(crate) fn annotate(&mut self, check: bool, checkmate: bool, draw: bool) {
        self.is_check = check;
        self.is_checkmate = checkmate;
        self.is_draw = draw;
    }

    /// True if this move goes from `from` to `to`
    #[inline]
    #[must_use]
    pub fn connects(&self, from: Square, to: Square) -> bool {
        self.from == from && self.to == to
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.is_en_passant == other.is_en_passant
            && self.is_castle == other.is_castle
            && self.is_promotion == other.is_promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.is_en_passant.hash(state);
        self.is_castle.hash(state);
        self.is_promotion.hash(state);
    }
}

/// Coordinate notation, e.g. `e2e4`, `e7e8q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.is_promotion {
            write!(f, "{}", Piece::Queen.to_char())?;
        }
        Ok(())
    }
}

/// Ordered list of moves as produced by the generator.
pub type MoveList = Vec<Move>;
