//! Error types for board and move input.

use std::fmt;

/// Failure modes when reading a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four mandatory fields were present
    MissingFields { found: usize },
    /// A character in the placement field names no piece
    UnknownPiece { ch: char },
    /// A character in the castling field is not one of KQkq or '-'
    UnknownCastlingFlag { ch: char },
    /// The active-color field was neither "w" nor "b"
    BadSideToMove { field: String },
    /// The en passant field names no square on the board
    BadEnPassantSquare { field: String },
    /// The placement field lists more than eight ranks
    TooManyRanks,
    /// A placement rank describes more than eight files
    RankTooWide { rank: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingFields { found } => {
                write!(f, "FEN needs its 4 mandatory fields, only {found} present")
            }
            FenError::UnknownPiece { ch } => {
                write!(f, "no piece is written '{ch}'")
            }
            FenError::UnknownCastlingFlag { ch } => {
                write!(f, "castling field cannot contain '{ch}'")
            }
            FenError::BadSideToMove { field } => {
                write!(f, "active color must be 'w' or 'b', not '{field}'")
            }
            FenError::BadEnPassantSquare { field } => {
                write!(f, "'{field}' is not an en passant square")
            }
            FenError::TooManyRanks => {
                write!(f, "piece placement lists more than 8 ranks")
            }
            FenError::RankTooWide { rank } => {
                write!(f, "rank {rank} of the placement spills past the h-file")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Failure modes when reading a move in UCI coordinate notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Coordinate moves are 4 characters, 5 with a promotion piece
    BadLength { len: usize },
    /// The from/to squares do not parse as algebraic coordinates
    BadCoordinates { text: String },
    /// The trailing promotion character is not one of q, r, b, n
    BadPromotion { ch: char },
    /// The move parsed but no legal move matches it
    NotLegal { text: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::BadLength { len } => {
                write!(f, "a coordinate move has 4 or 5 characters, got {len}")
            }
            MoveParseError::BadCoordinates { text } => {
                write!(f, "cannot read squares out of '{text}'")
            }
            MoveParseError::BadPromotion { ch } => {
                write!(f, "'{ch}' is not a piece a pawn can become")
            }
            MoveParseError::NotLegal { text } => {
                write!(f, "'{text}' matches no legal move in this position")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Failure modes when reading a square name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// The text is not a file letter followed by a rank digit
    NotASquare { text: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::NotASquare { text } => {
                write!(f, "expected a square like 'e4', got '{text}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_missing_fields() {
        let err = FenError::MissingFields { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_unknown_piece() {
        let err = FenError::UnknownPiece { ch: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_rank_too_wide() {
        let err = FenError::RankTooWide { rank: 5 };
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_move_error_not_legal() {
        let err = MoveParseError::NotLegal {
            text: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_move_error_bad_promotion() {
        let err = MoveParseError::BadPromotion { ch: 'k' };
        assert!(err.to_string().contains("'k'"));
    }

    #[test]
    fn test_square_error_not_a_square() {
        let err = SquareError::NotASquare {
            text: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }
}
