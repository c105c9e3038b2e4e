use super::super::state::{Check, Pin};
use super::super::{Color, Piece, Position, Square, ALL_DIRECTIONS, KNIGHT_OFFSETS, RayKind};

/// Checks and pins found by scanning outwards from a king square.
#[derive(Clone, Debug, Default)]
pub(crate) struct KingScan {
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
}

impl Position {
    /// Scan the eight rays and the knight squares around `king` for `us`.
    ///
    /// The first own piece on a ray becomes a pin candidate and is confirmed if
    /// the next piece beyond it is an enemy that attacks along that ray. An
    /// enemy attacker reached with nothing in between is a check. Our own king
    /// is transparent, so the scan is also valid for a square the king is only
    /// considering moving to.
    pub(crate) fn scan_king(&self, king: Square, us: Color) -> KingScan {
        let mut scan = KingScan::default();

        for dir in ALL_DIRECTIONS {
            let mut candidate: Option<Square> = None;
            let mut sq = king;
            let mut distance = 0;
            while let Some(next) = sq.offset(dir.d_rank, dir.d_file) {
                sq = next;
                distance += 1;
                match self.piece_at(sq) {
                    None => {}
                    Some((color, Piece::King)) if color == us => {}
                    Some((color, _)) if color == us => {
                        if candidate.is_some() {
                            break;
                        }
                        candidate = Some(sq);
                    }
                    Some((_, piece)) => {
                        let adjacent = distance == 1;
                        let pawn_threat = piece == Piece::Pawn
                            && dir.kind == RayKind::Diagonal
                            && dir.d_rank == us.pawn_direction();
                        let threatens = dir.kind.slider_threat(piece)
                            || (adjacent && (piece == Piece::King || pawn_threat));
                        if threatens {
                            match candidate {
                                None => scan.checks.push(Check {
                                    square: sq,
                                    ray: Some(dir),
                                }),
                                Some(pinned) => scan.pins.push(Pin {
                                    square: pinned,
                                    direction: dir,
                                }),
                            }
                        }
                        break;
                    }
                }
            }
        }

        for (d_rank, d_file) in KNIGHT_OFFSETS {
            if let Some(sq) = king.offset(d_rank, d_file) {
                if let Some((color, Piece::Knight)) = self.piece_at(sq) {
                    if color != us {
                        scan.checks.push(Check {
                            square: sq,
                            ray: None,
                        });
                    }
                }
            }
        }

        scan
    }

    /// Squares a non-king move may land on to answer a single check: the
    /// checker itself, plus every square between it and the king for a slider.
    pub(crate) fn check_block_squares(&self, king: Square, check: &Check) -> Vec<Square> {
        let Some(dir) = check.ray else {
            return vec![check.square];
        };
        let mut squares = Vec::with_capacity(7);
        let mut sq = king;
        while let Some(next) = sq.offset(dir.d_rank, dir.d_file) {
            sq = next;
            squares.push(sq);
            if sq == check.square {
                break;
            }
        }
        squares
    }
}
