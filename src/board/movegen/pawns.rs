use super::super::state::Pin;
use super::super::{Color, Direction, Move, MoveList, Position, Square};
use super::{pin_on, GenMode};

impl Position {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        pins: &[Pin],
        mode: GenMode,
        moves: &mut MoveList,
    ) {
        let dir = color.pawn_direction();
        let pin = pin_on(pins, from);
        let may_step = |d_file: isize| match pin {
            None => true,
            Some(axis) => axis.is_axis_of(Direction::new(dir, d_file)),
        };

        if mode == GenMode::Attacks {
            for d_file in [-1, 1] {
                if let Some(to) = from.offset(dir, d_file) {
                    moves.push(Move::new(from, to, &self.board));
                }
            }
            return;
        }

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) && may_step(0) {
                moves.push(Move::new(from, one, &self.board));
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two, &self.board));
                        }
                    }
                }
            }
        }

        for d_file in [-1, 1] {
            let Some(to) = from.offset(dir, d_file) else {
                continue;
            };
            if !may_step(d_file) {
                continue;
            }
            match self.piece_at(to) {
                Some((target, _)) if target != color => {
                    moves.push(Move::new(from, to, &self.board));
                }
                None if Some(to) == self.en_passant_target
                    && self.en_passant_is_safe(from, to, color) =>
                {
                    moves.push(Move::en_passant(from, to, &self.board));
                }
                _ => {}
            }
        }
    }

    /// An en passant capture removes two pawns from the same rank at once. If
    /// our king shares that rank, make sure no enemy rook or queen is waiting
    /// behind the pair.
    fn en_passant_is_safe(&self, from: Square, to: Square, color: Color) -> bool {
        let king = self.king_square(color);
        if king.rank() != from.rank() {
            return true;
        }

        let d_file: isize = if to.file() > king.file() { 1 } else { -1 };
        let mut sq = king;
        while let Some(next) = sq.offset(0, d_file) {
            sq = next;
            if sq.file() == from.file() || sq.file() == to.file() {
                continue;
            }
            match self.piece_at(sq) {
                None => {}
                Some((c, piece)) => {
                    return c == color || !piece.attacks_straight();
                }
            }
        }

        true
    }
}
