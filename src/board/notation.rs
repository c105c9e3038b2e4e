//! Display notation for the game log.
//!
//! A short algebraic form without disambiguation: "e4", "exd5", "Nf3",
//! "Bxc6+", "O-O", "e8=Q#", "exd6 e.p.". A move that stalemated the opponent
//! is shown as the result "1/2-1/2".

use super::{Move, Piece};

impl Move {
    /// Log notation for this move, including the check/mate/draw annotation.
    #[must_use]
    pub fn notation(&self) -> String {
        if self.is_draw() && !self.is_check() {
            return "1/2-1/2".to_string();
        }

        let mut text = if self.is_castle() {
            if self.is_castle_kingside() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            }
        } else if self.piece() == Piece::Pawn {
            let mut pawn = String::new();
            if self.is_capture() {
                pawn.push(self.from().file_char());
                pawn.push('x');
            }
            pawn.push_str(&self.to().to_string());
            if self.is_promotion() {
                pawn.push_str("=Q");
            }
            if self.is_en_passant() {
                pawn.push_str(" e.p.");
            }
            pawn
        } else {
            let mut piece = String::new();
            piece.push(self.piece().to_char().to_ascii_uppercase());
            if self.is_capture() {
                piece.push('x');
            }
            piece.push_str(&self.to().to_string());
            piece
        };

        if self.is_checkmate() {
            text.push('#');
        } else if self.is_check() {
            text.push('+');
        }
        text
    }
}
