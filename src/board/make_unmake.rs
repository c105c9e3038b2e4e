use super::state::UndoRecord;
use super::{Color, Move, Piece, Position, Square};

/// Rook (from, to) files for a castle landing the king on `king_to_file`.
#[inline]
fn castle_rook_files(king_to_file: usize) -> (usize, usize) {
    if king_to_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Position {
    #[inline]
    fn put(&mut self, sq: Square, content: Option<(Color, Piece)>) {
        self.board[sq.0][sq.1] = content;
    }

    /// Apply a move produced by the generator for this position.
    ///
    /// Moves that did not come from [`get_legal_moves`](Position::get_legal_moves)
    /// on the current position are a programming error and may corrupt state.
    pub fn apply(&mut self, mv: &Move) {
        let (color, piece) = mv.moved();
        let from = mv.from();
        let to = mv.to();

        self.history.push(UndoRecord {
            mv: *mv,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
        });

        self.put(from, None);
        if mv.is_promotion() {
            self.put(to, Some((color, Piece::Queen)));
        } else {
            self.put(to, Some((color, piece)));
        }

        if mv.is_en_passant() {
            self.put(mv.capture_square(), None);
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_files(to.1);
            let rook = self.board[to.0][rook_from];
            self.put(Square(to.0, rook_to), rook);
            self.put(Square(to.0, rook_from), None);
        }

        if piece == Piece::King {
            self.king_squares[color.index()] = to;
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square((from.0 + to.0) / 2, from.1))
        } else {
            None
        };

        match piece {
            Piece::King => self.castling_rights.remove_both(color),
            Piece::Rook => self.castling_rights.revoke_for_rook_square(color, from),
            _ => {}
        }
        if let Some((captured_color, Piece::Rook)) = mv.captured() {
            self.castling_rights
                .revoke_for_rook_square(captured_color, mv.capture_square());
        }

        self.white_to_move = !self.white_to_move;
        self.clear_terminal_flags();
    }

    /// Take back the last applied move. Does nothing when there is no history.
    pub fn undo(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };
        let mv = record.mv;
        let (color, piece) = mv.moved();
        let from = mv.from();
        let to = mv.to();

        self.put(from, Some((color, piece)));
        if mv.is_en_passant() {
            self.put(to, None);
            self.put(mv.capture_square(), mv.captured());
        } else {
            self.put(to, mv.captured());
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_files(to.1);
            let rook = self.board[to.0][rook_to];
            self.put(Square(to.0, rook_from), rook);
            self.put(Square(to.0, rook_to), None);
        }

        if piece == Piece::King {
            self.king_squares[color.index()] = from;
        }

        self.castling_rights = record.previous_castling_rights;
        self.en_passant_target = record.previous_en_passant_target;
        self.white_to_move = !self.white_to_move;
        self.clear_terminal_flags();
    }
}
