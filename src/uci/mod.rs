//! Universal Chess Interface (UCI) protocol support.
//!
//! Command tokenizing, position-command application, and time-budget
//! derivation. The blocking stdin loop lives in the binary; malformed input
//! never propagates past this layer - it is reported as an `info string`
//! diagnostic and the engine keeps running.

use std::fmt;

use crate::board::{Board, FenError, Move, MoveParseError};

pub mod command;
pub mod time;

/// Error type for UCI position command parsing
#[derive(Debug, Clone)]
pub enum UciError {
    /// The FEN payload of a position command failed to parse
    Fen(FenError),
    /// A move in the move list could not be applied
    Move {
        text: String,
        source: MoveParseError,
    },
    /// The command ended before a complete position was given
    Truncated,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::Fen(e) => write!(f, "bad FEN in position command: {e}"),
            UciError::Move { text, source } => {
                write!(f, "move '{text}' not applied: {source}")
            }
            UciError::Truncated => {
                write!(f, "position command ends before the position is complete")
            }
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::Fen(e)
    }
}

/// Parse a move in UCI format (e.g., "e2e4", "e7e8q").
///
/// Delegates to `Board::parse_move`. Returns `None` if the move is invalid.
#[must_use]
pub fn parse_uci_move(board: &mut Board, uci_string: &str) -> Option<Move> {
    board.parse_move(uci_string).ok()
}

/// Parse a UCI position command, returning an error on failure.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...". On an illegal move
/// the already-applied prefix is kept and the rest of the list is dropped.
pub fn try_parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let mut i = 1;

    if i >= parts.len() {
        return Err(UciError::Truncated);
    }

    if parts[i] == "startpos" {
        *board = Board::new();
        i += 1;
    } else if parts[i] == "fen" {
        if i + 6 >= parts.len() {
            return Err(UciError::Truncated);
        }
        let fen = parts[i + 1..i + 7].join(" ");
        *board = Board::try_from_fen(&fen)?;
        i += 7;
    } else {
        return Err(UciError::Truncated);
    }

    if i < parts.len() && parts[i] == "moves" {
        i += 1;
        while i < parts.len() {
            let mv = board.parse_move(parts[i]).map_err(|e| UciError::Move {
                text: parts[i].to_string(),
                source: e,
            })?;
            board.make_move(mv);
            i += 1;
        }
    }

    Ok(())
}

/// Parse a UCI position command, reporting failures as `info string`
/// diagnostics.
///
/// This is a convenience wrapper around `try_parse_position_command` for use
/// in the main UCI loop where errors must not kill the engine.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(board, parts) {
        println!("info string error: {e}");
    }
}
