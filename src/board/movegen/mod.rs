mod kings;
mod knights;
mod pawns;
mod pins;
mod sliders;

pub(crate) use pins::KingScan;

use super::state::Pin;
use super::{Color, Direction, Move, MoveList, Piece, Position, Square};

/// What a per-piece generator is asked to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GenMode {
    /// Moves the side can play, honouring pins and king safety
    Legal,
    /// Every square the side attacks, for the attacked-square probe. Pawns
    /// contribute their diagonals whether or not something stands there and
    /// no pushes; kings contribute all adjacent squares unvalidated.
    Attacks,
}

/// Pin axis of the piece on `sq`, if it is pinned.
#[inline]
pub(crate) fn pin_on(pins: &[Pin], sq: Square) -> Option<Direction> {
    pins.iter().find(|pin| pin.square == sq).map(|pin| pin.direction)
}

impl Position {
    /// Generate every legal move for the side to move.
    ///
    /// Also records the checks, pins and in-check/checkmate/stalemate flags of
    /// this position for the search and the caller to read back.
    pub fn get_legal_moves(&mut self) -> MoveList {
        let us = self.side_to_move();
        let king = self.king_square(us);
        let KingScan { pins, checks } = self.scan_king(king, us);
        let in_check = !checks.is_empty();

        let mut moves = MoveList::with_capacity(48);
        if !in_check {
            self.generate_castle_moves(us, &mut moves);
        }

        match checks.as_slice() {
            [] => self.generate_pseudo_moves(us, &pins, GenMode::Legal, &mut moves),
            [check] => {
                self.generate_pseudo_moves(us, &pins, GenMode::Legal, &mut moves);
                let valid = self.check_block_squares(king, check);
                moves.retain(|m| {
                    m.piece() == Piece::King
                        || valid.contains(&m.to())
                        || (m.is_en_passant() && valid.contains(&m.capture_square()))
                });
            }
            _ => self.generate_king_moves(king, us, GenMode::Legal, &mut moves),
        }

        self.scratch.pins = pins;
        self.scratch.checks = checks;
        self.scratch.in_check = in_check;
        self.scratch.checkmate = moves.is_empty() && in_check;
        self.scratch.stalemate = moves.is_empty() && !in_check;
        moves
    }

    /// All moves for `color` ignoring checks, with pins applied per piece.
    pub(crate) fn generate_pseudo_moves(
        &self,
        color: Color,
        pins: &[Pin],
        mode: GenMode,
        moves: &mut MoveList,
    ) {
        for from in Square::all() {
            match self.piece_at(from) {
                Some((c, piece)) if c == color => match piece {
                    Piece::Pawn => self.generate_pawn_moves(from, color, pins, mode, moves),
                    Piece::Knight => self.generate_knight_moves(from, color, pins, mode, moves),
                    Piece::Bishop | Piece::Rook | Piece::Queen => {
                        self.generate_slider_moves(from, piece, color, pins, moves)
                    }
                    Piece::King => self.generate_king_moves(from, color, mode, moves),
                },
                _ => {}
            }
        }
    }

    /// Whether the opponent of the side to move attacks `square`.
    ///
    /// Enumerates the opponent's attack set, which includes every square
    /// adjacent to the opponent's king.
    pub fn square_under_attack(&self, square: Square) -> bool {
        let attacker = self.side_to_move().opponent();
        let mut attacks = MoveList::new();
        self.generate_pseudo_moves(attacker, &[], GenMode::Attacks, &mut attacks);
        attacks.iter().any(|m| m.to() == square)
    }

    /// Find the legal move joining `from` and `to`, if there is one.
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.get_legal_moves()
            .into_iter()
            .find(|m| m.connects(from, to))
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.get_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            self.apply(m);
            nodes += self.perft(depth - 1);
            self.undo();
        }

        nodes
    }
}
