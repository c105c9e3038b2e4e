use super::super::state::Pin;
use super::super::{Color, Move, MoveList, Position, Square, KNIGHT_OFFSETS};
use super::{pin_on, GenMode};

impl Position {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        color: Color,
        pins: &[Pin],
        mode: GenMode,
        moves: &mut MoveList,
    ) {
        // A pinned knight can never stay on its pin line
        if pin_on(pins, from).is_some() {
            return;
        }

        for (d_rank, d_file) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(d_rank, d_file) else {
                continue;
            };
            let own = matches!(self.piece_at(to), Some((c, _)) if c == color);
            if !own || mode == GenMode::Attacks {
                moves.push(Move::new(from, to, &self.board));
            }
        }
    }
}
