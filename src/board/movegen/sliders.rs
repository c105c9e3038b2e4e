use super::super::state::Pin;
use super::super::{Color, Direction, Move, MoveList, Piece, Position, Square, ALL_DIRECTIONS};
use super::pin_on;

impl Position {
    /// Bishop, rook and queen moves: walk each ray the piece attacks along
    /// until the edge, an own piece, or the first capture.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        piece: Piece,
        color: Color,
        pins: &[Pin],
        moves: &mut MoveList,
    ) {
        let pin = pin_on(pins, from);
        let rays = ALL_DIRECTIONS
            .iter()
            .copied()
            .filter(|dir| dir.kind.slider_threat(piece))
            .filter(|dir| pin.map_or(true, |axis: Direction| axis.is_axis_of(*dir)));

        for dir in rays {
            let mut sq = from;
            while let Some(to) = sq.offset(dir.d_rank, dir.d_file) {
                sq = to;
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, &self.board)),
                    Some((c, _)) => {
                        if c != color {
                            moves.push(Move::new(from, to, &self.board));
                        }
                        break;
                    }
                }
            }
        }
    }
}
