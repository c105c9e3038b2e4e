use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{CastlingRights, Color, Move, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN.
    ///
    /// Placement and side to move are required. Castling rights and the en
    /// passant target are honoured when present; move counters are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement, eighth rank first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::InvalidFileCount {
                        rank: rank + 1,
                        files: file + 1,
                    });
                }
                if piece == Piece::King {
                    kings[color.index()].push(Square(rank, file));
                }
                position.board[rank][file] = Some((color, piece));
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            match kings[color.index()].as_slice() {
                [king] => position.king_squares[color.index()] = *king,
                found => {
                    return Err(FenError::KingCount {
                        color,
                        found: found.len(),
                    })
                }
            }
        }

        // Parse side to move
        position.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights (optional)
        let mut rights = CastlingRights::none();
        if let Some(field) = parts.get(2) {
            for c in field.chars() {
                match c {
                    'K' => rights.set(Color::White, true),
                    'Q' => rights.set(Color::White, false),
                    'k' => rights.set(Color::Black, true),
                    'q' => rights.set(Color::Black, false),
                    '-' => {}
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }
        position.castling_rights = rights;

        // Parse en passant target (optional)
        position.en_passant_target = match parts.get(3) {
            None | Some(&"-") => None,
            Some(field) => {
                let sq: Square = field.parse().map_err(|_| FenError::InvalidEnPassant {
                    found: (*field).to_string(),
                })?;
                // The target lies behind an enemy pawn that just made its double step
                let mover = position.side_to_move();
                let pushed = mover.opponent();
                let target_rank = if mover == Color::White { 5 } else { 2 };
                let pawn = sq
                    .offset(pushed.pawn_direction(), 0)
                    .and_then(|behind| position.piece_at(behind));
                let valid = sq.rank() == target_rank
                    && position.piece_at(sq).is_none()
                    && pawn == Some((pushed, Piece::Pawn));
                if !valid {
                    return Err(FenError::InvalidEnPassant {
                        found: (*field).to_string(),
                    });
                }
                Some(sq)
            }
        };

        Ok(position)
    }

    /// Parse a position from FEN.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Compact text export of the placement and side to move.
    ///
    /// Castling rights, the en passant target and move counters are not
    /// recorded; those fields are always written as `- - 0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.board[rank][file] {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        format!("{} {} - - 0 1", rows.join("/"), active)
    }

    /// Parse a move in coordinate notation (e.g. "e2e4", "e7e8q") against the
    /// current legal moves.
    ///
    /// Promotions are always to a queen, so the suffix is optional and only
    /// `q` is accepted.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let len = text.chars().count();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = text
            .get(0..2)
            .ok_or_else(invalid_square)?
            .parse()
            .map_err(|_| invalid_square())?;
        let to: Square = text
            .get(2..4)
            .ok_or_else(invalid_square)?
            .parse()
            .map_err(|_| invalid_square())?;
        let wants_promotion = match text.get(4..) {
            Some("") | None => None,
            Some("q") => Some(true),
            Some(_) => Some(false),
        };

        self.find_legal_move(from, to)
            .filter(|mv| wants_promotion.map_or(true, |promote| promote && mv.is_promotion()))
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a coordinate move and apply it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Position;
    ///
    /// let mut position = Position::new();
    /// position.apply_coordinate("e2e4").unwrap();
    /// position.apply_coordinate("e7e5").unwrap();
    /// assert!(position.white_to_move());
    /// ```
    pub fn apply_coordinate(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.apply(&mv);
        Ok(mv)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_start_position_matches_new() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let position = Position::try_from_fen(fen).unwrap();
        assert_eq!(position, Position::new());
    }

    #[test]
    fn test_fen_export_is_partial() {
        let position = Position::new();
        assert_eq!(
            position.to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
        );
    }

    #[test]
    fn test_fen_black_to_move_with_en_passant() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let position = Position::try_from_fen(fen).unwrap();
        assert!(!position.white_to_move());
        assert_eq!(position.en_passant_target(), Some(Square(2, 4)));
    }

    #[test]
    fn test_fen_side_only_is_accepted() {
        let position = Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert!(!position.white_to_move());
        assert_eq!(position.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_fen_export_reimports() {
        let mut position = Position::new();
        position.apply_coordinate("g1f3").unwrap();
        let reparsed = Position::try_from_fen(&position.to_fen()).unwrap();
        assert_eq!(reparsed.board(), position.board());
        assert!(!reparsed.white_to_move());
    }

    #[test]
    fn test_fen_records_king_squares() {
        let position = Position::try_from_fen("8/8/3k4/8/8/8/6K1/8 w - - 0 1").unwrap();
        assert_eq!(position.king_square(Color::White), Square(1, 6));
        assert_eq!(position.king_square(Color::Black), Square(5, 3));
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert!(matches!(result, Err(FenError::TooFewParts { found: 1 })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Position::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
        let wrong_rank =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1");
        assert!(matches!(wrong_rank, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_en_passant_needs_a_pushed_enemy_pawn() {
        // No black pawn on e4 behind e3, and e3 belongs to White's own double step
        let own_side = Position::try_from_fen("4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1");
        assert!(matches!(own_side, Err(FenError::InvalidEnPassant { .. })));

        // Right rank for White to move, but nothing stands on e5
        let no_pawn = Position::try_from_fen("4k3/8/8/8/8/8/4P3/4K3 w - e6 0 1");
        assert!(matches!(no_pawn, Err(FenError::InvalidEnPassant { .. })));

        // Black to move needs a white pawn on e4
        let black_no_pawn = Position::try_from_fen("4k3/3p4/8/8/8/8/8/4K3 b - e3 0 1");
        assert!(matches!(black_no_pawn, Err(FenError::InvalidEnPassant { .. })));

        // Target square occupied
        let occupied = Position::try_from_fen("4k3/8/4n3/4p3/8/8/8/4K3 w - e6 0 1");
        assert!(matches!(occupied, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_en_passant_accepted_round_trips() {
        let mut position = Position::try_from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").unwrap();
        let before = position.clone();
        let mv = position.find_legal_move(Square(4, 3), Square(5, 4)).unwrap();
        assert!(mv.is_en_passant());
        position.apply(&mv);
        assert_eq!(position.piece_at(Square(4, 4)), None);
        position.undo();
        assert_eq!(position, before);
    }

    #[test]
    fn test_fen_error_rank_and_file_counts() {
        let short = Position::try_from_fen("4k3/8/8/8/8/8/4K3 w - - 0 1");
        assert!(matches!(short, Err(FenError::InvalidRankCount { found: 7 })));
        let narrow = Position::try_from_fen("4k3/8/8/8/8/8/7/4K3 w - - 0 1");
        assert!(matches!(
            narrow,
            Err(FenError::InvalidFileCount { rank: 2, files: 7 })
        ));
    }

    #[test]
    fn test_fen_error_missing_king() {
        let result = Position::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            result.unwrap_err(),
            FenError::KingCount {
                color: Color::Black,
                found: 0
            }
        );
    }

    #[test]
    fn test_fen_partial_castling() {
        let position =
            Position::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        let rights = position.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut position = Position::new();
        let mv = position.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(3, 4));
        assert!(mv.is_double_pawn_push());
    }

    #[test]
    fn test_parse_move_promotion_suffix_optional() {
        let mut position = Position::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        assert!(position.parse_move("a7a8q").unwrap().is_promotion());
        assert!(position.parse_move("a7a8").unwrap().is_promotion());
        assert!(matches!(
            position.parse_move("a7a8n"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_move_errors() {
        let mut position = Position::new();
        assert!(matches!(
            position.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            position.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            position.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert!(matches!(
            position.parse_move("e2e4q"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_from_str_trait() {
        let position: Position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert!(position.white_to_move());
    }
}
