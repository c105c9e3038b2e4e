use super::{CastlingRights, Color, Direction, Move, Piece, Square};

/// 8x8 grid of square contents, indexed `[rank][file]` with rank 0 = White's back rank.
pub type Grid = [[Option<(Color, Piece)>; 8]; 8];

/// What `apply` needs to remember so `undo` can put everything back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UndoRecord {
    pub(crate) mv: Move,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
}

/// An own piece standing between the king and an enemy slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pin {
    pub(crate) square: Square,
    /// Direction from the king towards the pinned piece
    pub(crate) direction: Direction,
}

/// An enemy piece attacking the king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Check {
    pub(crate) square: Square,
    /// Direction from the king towards the checker; `None` for knight checks
    pub(crate) ray: Option<Direction>,
}

/// Result of the last legal-move generation. Not part of the game state.
#[derive(Clone, Debug, Default)]
pub(crate) struct GenScratch {
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

/// A chess position: the board plus everything needed to generate and undo moves.
///
/// A position is created once per game and mutated in place by
/// [`apply`](Position::apply) and [`undo`](Position::undo).
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Grid,
    pub(crate) white_to_move: bool,
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<UndoRecord>,
    pub(crate) scratch: GenScratch,
}

impl Position {
    /// The standard initial setup, White to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            position.board[0][i] = Some((Color::White, *piece));
            position.board[7][i] = Some((Color::Black, *piece));
            position.board[1][i] = Some((Color::White, Piece::Pawn));
            position.board[6][i] = Some((Color::Black, Piece::Pawn));
        }

        position.king_squares = [Square(0, 4), Square(7, 4)];
        position.castling_rights = CastlingRights::all();
        position
    }

    pub(crate) fn empty() -> Self {
        Position {
            board: [[None; 8]; 8],
            white_to_move: true,
            king_squares: [Square(0, 4), Square(7, 4)],
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            history: Vec::new(),
            scratch: GenScratch::default(),
        }
    }

    /// The grid, for display.
    #[must_use]
    pub fn board(&self) -> &Grid {
        &self.board
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Cached king location for `color`.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant, valid for this ply only.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.board[sq.0][sq.1].is_none()
    }

    /// Number of moves that can be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recently applied move.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|record| &record.mv)
    }

    /// Whether the side to move was in check at the last legal-move generation.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.scratch.in_check
    }

    /// Set by the last legal-move generation when it found no moves while in check.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.scratch.checkmate
    }

    /// Set by the last legal-move generation when it found no moves while not in check.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.scratch.stalemate
    }

    /// Squares of the pieces giving check at the last legal-move generation.
    #[must_use]
    pub fn checkers(&self) -> Vec<Square> {
        self.scratch.checks.iter().map(|check| check.square).collect()
    }

    /// Squares of the pinned pieces found at the last legal-move generation.
    #[must_use]
    pub fn pinned(&self) -> Vec<Square> {
        self.scratch.pins.iter().map(|pin| pin.square).collect()
    }

    pub(crate) fn clear_terminal_flags(&mut self) {
        self.scratch.checkmate = false;
        self.scratch.stalemate = false;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Equality covers the game state and the undo history; generation scratch is ignored.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.white_to_move == other.white_to_move
            && self.king_squares == other.king_squares
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.history == other.history
    }
}

impl Eq for Position {}
