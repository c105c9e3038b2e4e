//! Apply/undo tests.

use crate::board::{CastlingRights, Color, Move, Piece, Position, Square};
use rand::prelude::*;

fn find_move(position: &mut Position, from: Square, to: Square) -> Move {
    position
        .find_legal_move(from, to)
        .expect("Expected move not found")
}

#[test]
fn test_en_passant_apply_undo() {
    let mut position =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let before = position.clone();
    let mv = find_move(&mut position, Square(4, 4), Square(5, 5));
    assert!(mv.is_en_passant());
    assert_eq!(mv.captured(), Some((Color::Black, Piece::Pawn)));

    position.apply(&mv);
    assert_eq!(position.piece_at(Square(4, 5)), None);
    assert_eq!(position.piece_at(Square(4, 4)), None);
    assert_eq!(
        position.piece_at(Square(5, 5)),
        Some((Color::White, Piece::Pawn))
    );
    assert_eq!(position.en_passant_target(), None);

    position.undo();
    assert_eq!(position, before);
    assert_eq!(position.en_passant_target(), Some(Square(5, 5)));
}

#[test]
fn test_promotion_apply_undo() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let before = position.clone();
    let mv = find_move(&mut position, Square(6, 0), Square(7, 0));
    assert!(mv.is_promotion());

    position.apply(&mv);
    assert_eq!(
        position.piece_at(Square(7, 0)),
        Some((Color::White, Piece::Queen))
    );

    position.undo();
    assert_eq!(
        position.piece_at(Square(6, 0)),
        Some((Color::White, Piece::Pawn))
    );
    assert_eq!(position, before);
}

#[test]
fn test_castle_apply_undo_moves_both_pieces() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = position.clone();

    let mv = find_move(&mut position, Square(0, 4), Square(0, 6));
    assert!(mv.is_castle());
    position.apply(&mv);
    assert_eq!(
        position.piece_at(Square(0, 6)),
        Some((Color::White, Piece::King))
    );
    assert_eq!(
        position.piece_at(Square(0, 5)),
        Some((Color::White, Piece::Rook))
    );
    assert_eq!(position.piece_at(Square(0, 7)), None);
    assert_eq!(position.king_square(Color::White), Square(0, 6));
    assert!(!position.castling_rights().has(Color::White, true));
    assert!(!position.castling_rights().has(Color::White, false));

    position.undo();
    assert_eq!(position, before);

    let mv = find_move(&mut position, Square(0, 4), Square(0, 2));
    position.apply(&mv);
    assert_eq!(
        position.piece_at(Square(0, 3)),
        Some((Color::White, Piece::Rook))
    );
    assert_eq!(position.piece_at(Square(0, 0)), None);
    position.undo();
    assert_eq!(position, before);
}

#[test]
fn test_rook_capture_revokes_and_undo_restores() {
    // White rook takes the rook on h8
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = find_move(&mut position, Square(0, 7), Square(7, 7));
    position.apply(&mv);
    let rights = position.castling_rights();
    assert!(!rights.has(Color::White, true));
    assert!(rights.has(Color::White, false));
    assert!(!rights.has(Color::Black, true));
    assert!(rights.has(Color::Black, false));

    position.undo();
    assert_eq!(position.castling_rights(), CastlingRights::all());
}

#[test]
fn test_double_push_sets_en_passant_for_one_ply() {
    let mut position = Position::new();
    position.apply_coordinate("e2e4").unwrap();
    assert_eq!(position.en_passant_target(), Some(Square(2, 4)));
    position.apply_coordinate("g8f6").unwrap();
    assert_eq!(position.en_passant_target(), None);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut position = Position::new();
    position.undo();
    assert_eq!(position, Position::new());
    assert_eq!(position.history_len(), 0);
}

#[test]
fn test_legal_moves_stable_after_apply_undo() {
    let mut position = Position::new();
    let initial_moves = position.get_legal_moves();
    let mut initial_list: Vec<String> = initial_moves.iter().map(|m| m.to_string()).collect();
    initial_list.sort();

    for mv in &initial_moves {
        position.apply(mv);
        position.undo();
    }

    let mut after_list: Vec<String> = position
        .get_legal_moves()
        .iter()
        .map(|m| m.to_string())
        .collect();
    after_list.sort();

    assert_eq!(initial_list, after_list);
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut position = Position::new();
    let initial = position.clone();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..200 {
        let moves = position.get_legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        position.apply(mv);
        for color in Color::BOTH {
            assert_eq!(
                position.piece_at(position.king_square(color)),
                Some((color, Piece::King))
            );
        }
    }

    while position.history_len() > 0 {
        position.undo();
    }

    assert_eq!(position, initial);
}
