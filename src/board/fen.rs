use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{file_to_index, rank_to_index, Board, Color, Move, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove clock and fullmove number fields are optional and default
    /// to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::MissingFields { found: parts.len() });
        }

        // Piece placement, ranks 8 down to 1
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::TooManyRanks);
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::UnknownPiece { ch: c })?;
                    if file >= 8 {
                        return Err(FenError::RankTooWide { rank: 8 - rank_idx });
                    }
                    board.set_piece(Square::new(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => {
                return Err(FenError::BadSideToMove {
                    field: other.to_string(),
                })
            }
        }

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::UnknownCastlingFlag { ch: c }),
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let chars: Vec<char> = parts[3].chars().collect();
            if chars.len() == 2
                && ('a'..='h').contains(&chars[0])
                && ('1'..='8').contains(&chars[1])
            {
                Some(Square::new(
                    rank_to_index(chars[1]),
                    file_to_index(chars[0]),
                ))
            } else {
                return Err(FenError::BadEnPassantSquare {
                    field: parts[3].to_string(),
                });
            }
        };

        if parts.len() >= 5 {
            board.halfmove_clock = parts[4].parse().unwrap_or(0);
        }
        if parts.len() >= 6 {
            board.fullmove_number = parts[5].parse().unwrap_or(1);
        }

        board.hash = board.calculate_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::new(rank, file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        if self.castling_rights.has(Color::White, true) {
            castling.push('K');
        }
        if self.castling_rights.has(Color::White, false) {
            castling.push('Q');
        }
        if self.castling_rights.has(Color::Black, true) {
            castling.push('k');
        }
        if self.castling_rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why
    /// parsing failed.
    ///
    /// # Example
    /// ```
    /// use plywood::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::BadLength { len: uci.len() });
        }

        let chars: Vec<char> = uci.chars().collect();

        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::BadCoordinates {
                text: uci.to_string(),
            });
        }

        let from_sq = Square::new(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to_sq = Square::new(rank_to_index(chars[3]), file_to_index(chars[2]));

        let promotion = if uci.len() == 5 {
            let piece = Piece::from_char(chars[4])
                .ok_or(MoveParseError::BadPromotion { ch: chars[4] })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::BadPromotion { ch: chars[4] });
            }
            Some(piece)
        } else {
            None
        };

        let legal_moves = self.generate_legal_moves();
        for legal_move in &legal_moves {
            if legal_move.from() == from_sq
                && legal_move.to() == to_sq
                && legal_move.promotion_piece() == promotion
            {
                return Ok(*legal_move);
            }
        }

        Err(MoveParseError::NotLegal {
            text: uci.to_string(),
        })
    }

    /// Parse a UCI move and make it on the board in one call.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::state::START_FEN;

    #[test]
    fn test_fen_round_trip_startpos() {
        let board = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_black_to_move_with_ep() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert!(!board.white_to_move());
        assert_eq!(board.en_passant_target, Some(Square::new(2, 4)));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_clocks_round_trip() {
        let fen = "8/8/8/8/8/8/8/K1k5 w - - 42 17";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_number(), 17);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_missing_clocks_default() {
        let board = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -")
            .unwrap();
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn test_fen_error_missing_fields() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::MissingFields { .. })));
    }

    #[test]
    fn test_fen_error_unknown_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::UnknownPiece { .. })));
    }

    #[test]
    fn test_fen_error_bad_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::BadSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_unknown_castling_flag() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::UnknownCastlingFlag { .. })));
    }

    #[test]
    fn test_fen_error_bad_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::BadEnPassantSquare { .. })));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        assert!(board.castling_rights.has(Color::White, true));
        assert!(!board.castling_rights.has(Color::White, false));
        assert!(!board.castling_rights.has(Color::Black, true));
        assert!(board.castling_rights.has(Color::Black, false));
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square::new(1, 4));
        assert_eq!(mv.to(), Square::new(3, 4));
        assert!(mv.is_double_pawn_push());
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion_piece(), Some(Piece::Queen));
    }

    #[test]
    fn test_parse_move_error_bad_length() {
        let mut board = Board::new();
        let result = board.parse_move("e2");
        assert!(matches!(result, Err(MoveParseError::BadLength { .. })));
    }

    #[test]
    fn test_parse_move_error_bad_coordinates() {
        let mut board = Board::new();
        let result = board.parse_move("z9z9");
        assert!(matches!(result, Err(MoveParseError::BadCoordinates { .. })));
    }

    #[test]
    fn test_parse_move_error_not_legal() {
        let mut board = Board::new();
        let result = board.parse_move("e2e5"); // Pawn can't move 3 squares
        assert!(matches!(result, Err(MoveParseError::NotLegal { .. })));
    }

    #[test]
    fn test_parse_move_error_bad_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let result = board.parse_move("a7a8p");
        assert!(matches!(
            result,
            Err(MoveParseError::BadPromotion { .. })
        ));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_FEN.parse().unwrap();
        assert!(board.white_to_move());
    }

    #[test]
    fn test_make_move_uci_advances_clocks() {
        let mut board = Board::new();
        board.make_move_uci("e2e4").unwrap();
        assert!(!board.white_to_move());
        assert_eq!(board.fullmove_number(), 1);
        board.make_move_uci("e7e5").unwrap();
        assert!(board.white_to_move());
        assert_eq!(board.fullmove_number(), 2);
    }
}
