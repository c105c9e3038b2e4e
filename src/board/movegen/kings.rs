use super::super::{Color, Move, MoveList, Piece, Position, Square, KING_OFFSETS};
use super::GenMode;

impl Position {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        color: Color,
        mode: GenMode,
        moves: &mut MoveList,
    ) {
        for (d_rank, d_file) in KING_OFFSETS {
            let Some(to) = from.offset(d_rank, d_file) else {
                continue;
            };
            if mode == GenMode::Attacks {
                moves.push(Move::new(from, to, &self.board));
                continue;
            }
            if matches!(self.piece_at(to), Some((c, _)) if c == color) {
                continue;
            }
            // Re-scan from the landing square; the king itself is transparent
            // to the scan, so sliding away along a checking ray is caught.
            if self.scan_king(to, color).checks.is_empty() {
                moves.push(Move::new(from, to, &self.board));
            }
        }
    }

    /// Castling for `color`, which must be the side to move and not in check.
    ///
    /// Needs the right, the rook on its corner, empty squares between king and
    /// rook, and the king's start, transit and landing squares unattacked.
    pub(crate) fn generate_castle_moves(&self, color: Color, moves: &mut MoveList) {
        let rank = color.back_rank();
        let king = Square(rank, 4);
        if self.piece_at(king) != Some((color, Piece::King)) {
            return;
        }

        let rook_home =
            |file: usize| self.piece_at(Square(rank, file)) == Some((color, Piece::Rook));
        let clear = |files: &[usize]| files.iter().all(|&f| self.is_empty(Square(rank, f)));
        let safe = |files: &[usize]| {
            files
                .iter()
                .all(|&f| !self.square_under_attack(Square(rank, f)))
        };

        if self.castling_rights.has(color, true)
            && rook_home(7)
            && clear(&[5, 6])
            && safe(&[4, 5, 6])
        {
            moves.push(Move::castle(king, Square(rank, 6), &self.board));
        }
        if self.castling_rights.has(color, false)
            && rook_home(0)
            && clear(&[1, 2, 3])
            && safe(&[4, 3, 2])
        {
            moves.push(Move::castle(king, Square(rank, 2), &self.board));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Position, Square};

    #[test]
    fn test_king_cannot_step_along_checking_ray() {
        // Rook on a1 checks the king on d1; c1 and e1 stay on the rank
        let mut pos = Position::from_fen("7k/8/8/8/8/8/8/r2K4 w - - 0 1");
        let moves = pos.get_legal_moves();
        assert!(!moves.iter().any(|m| m.to() == Square(0, 4)));
        assert!(!moves.iter().any(|m| m.to() == Square(0, 2)));
        assert!(moves.iter().any(|m| m.to() == Square(1, 4)));
    }

    #[test]
    fn test_castling_through_attacked_square_is_rejected() {
        // Black rook on f8 covers f1
        let mut pos = Position::from_fen("5r1k/8/8/8/8/8/8/4K2R w K - 0 1");
        let moves = pos.get_legal_moves();
        assert!(!moves.iter().any(|m| m.is_castle()));
    }

    #[test]
    fn test_castling_both_sides_when_clear() {
        let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let moves = pos.get_legal_moves();
        let castles: Vec<_> = moves.iter().filter(|m| m.is_castle()).collect();
        assert_eq!(castles.len(), 2);
        assert!(castles.iter().any(|m| m.is_castle_kingside()));
    }

    #[test]
    fn test_castling_with_pawn_guarding_transit_square() {
        // Black pawn on e2 attacks f1 and d1
        let mut pos = Position::from_fen("4k3/8/8/8/8/8/4p3/R3K2R w KQ - 0 1");
        let moves = pos.get_legal_moves();
        assert!(!moves.iter().any(|m| m.is_castle()));
    }
}
