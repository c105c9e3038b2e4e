//! Edge case tests for special chess positions and moves.

use crate::board::{Color, Piece, Position, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn castle_targets(position: &mut Position) -> Vec<Square> {
    position
        .get_legal_moves()
        .iter()
        .filter(|m| m.is_castle())
        .map(|m| m.to())
        .collect()
}

#[test]
fn test_stalemate_position() {
    let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(position.get_legal_moves().is_empty());
    assert!(position.is_stalemate());
    assert!(!position.is_checkmate());
    assert!(!position.in_check());
}

#[test]
fn test_back_rank_checkmate() {
    let mut position = Position::from_fen("4R1k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(position.get_legal_moves().is_empty());
    assert!(position.is_checkmate());
    assert!(!position.is_stalemate());
    assert_eq!(position.checkers(), vec![sq("e8")]);
}

#[test]
fn test_undo_clears_terminal_flags() {
    let mut position = Position::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        position.apply_coordinate(text).unwrap();
    }
    assert!(position.get_legal_moves().is_empty());
    assert!(position.is_checkmate());

    position.undo();
    assert!(!position.is_checkmate());
    assert!(!position.is_stalemate());
    assert!(!position.get_legal_moves().is_empty());
}

#[test]
fn test_no_castling_out_of_check() {
    let mut position = Position::from_fen("4k3/8/8/8/4r3/8/8/R3K2R w KQ - 0 1");
    assert!(castle_targets(&mut position).is_empty());
    assert!(position.in_check());
}

#[test]
fn test_no_castling_into_check() {
    // The g8 rook covers g1; the queenside is untouched
    let mut position = Position::from_fen("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert_eq!(castle_targets(&mut position), vec![sq("c1")]);
}

#[test]
fn test_queenside_castle_with_b_file_attacked() {
    // b1 must be empty but may be attacked
    let mut position = Position::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert_eq!(castle_targets(&mut position), vec![sq("c1")]);
}

#[test]
fn test_castling_right_gone_after_king_returns() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for text in ["e1f1", "h8h7", "f1e1", "h7h8"] {
        position.apply_coordinate(text).unwrap();
    }
    // Same placement as the start, but the king and the h8 rook have moved
    assert!(castle_targets(&mut position).is_empty());
    let rights = position.castling_rights();
    assert!(!rights.has(Color::White, true));
    assert!(!rights.has(Color::White, false));
    assert!(!rights.has(Color::Black, true));
    assert!(rights.has(Color::Black, false));

    position.apply_coordinate("a1b1").unwrap();
    assert_eq!(castle_targets(&mut position), vec![sq("c8")]);
}

#[test]
fn test_castle_moves_rook() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let mv = position.apply_coordinate("e8c8").unwrap();
    assert!(mv.is_castle());
    assert!(!mv.is_castle_kingside());
    assert_eq!(position.piece_at(sq("c8")), Some((Color::Black, Piece::King)));
    assert_eq!(position.piece_at(sq("d8")), Some((Color::Black, Piece::Rook)));
    assert_eq!(position.piece_at(sq("a8")), None);
    assert_eq!(position.king_square(Color::Black), sq("c8"));
}

#[test]
fn test_en_passant_removes_bypassed_pawn() {
    let mut position = Position::new();
    for text in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        position.apply_coordinate(text).unwrap();
    }
    assert_eq!(position.en_passant_target(), Some(sq("d6")));

    let mv = position.apply_coordinate("e5d6").unwrap();
    assert!(mv.is_en_passant());
    assert_eq!(mv.capture_square(), sq("d5"));
    assert_eq!(position.piece_at(sq("d5")), None);
    assert_eq!(position.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_en_passant_window_closes() {
    let mut position = Position::new();
    for text in ["e2e4", "a7a6", "e4e5", "d7d5", "g1f3", "a6a5"] {
        position.apply_coordinate(text).unwrap();
    }
    assert_eq!(position.en_passant_target(), None);
    assert!(position.find_legal_move(sq("e5"), sq("d6")).is_none());
}

#[test]
fn test_promotion_is_queen_only() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = position.get_legal_moves();
    let from_a7: Vec<_> = moves.iter().filter(|m| m.from() == sq("a7")).collect();
    assert_eq!(from_a7.len(), 1);
    assert!(from_a7[0].is_promotion());

    let mv = *from_a7[0];
    position.apply(&mv);
    assert_eq!(position.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));

    position.undo();
    assert_eq!(position.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
    assert_eq!(position.piece_at(sq("a8")), None);
}

#[test]
fn test_capture_promotion() {
    let mut position = Position::from_fen("1r6/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let mv = position.find_legal_move(sq("a7"), sq("b8")).unwrap();
    assert!(mv.is_promotion());
    assert_eq!(mv.captured(), Some((Color::Black, Piece::Rook)));

    position.apply(&mv);
    assert_eq!(position.piece_at(sq("b8")), Some((Color::White, Piece::Queen)));
    position.undo();
    assert_eq!(position.piece_at(sq("b8")), Some((Color::Black, Piece::Rook)));
}

#[test]
fn test_black_promotion() {
    let mut position = Position::from_fen("k7/8/8/8/8/8/p7/2K5 b - - 0 1");
    position.apply_coordinate("a2a1q").unwrap();
    assert_eq!(position.piece_at(sq("a1")), Some((Color::Black, Piece::Queen)));
}

#[test]
fn test_blocked_pawn_has_no_push() {
    let mut position = Position::from_fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1");
    assert!(position
        .get_legal_moves()
        .iter()
        .all(|m| m.from() != sq("e3")));
}
