//! Chess engine library speaking the UCI protocol.
//!
//! Provides a complete chess engine with:
//! - Bitboard-based board representation with magic-bitboard slider attacks
//! - Incremental Zobrist hashing and reversible make/unmake
//! - Staged pseudo-legal/legal move generation
//! - Monte Carlo Tree Search with UCT selection and random playouts
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use plywood::board::Board;
//! use plywood::search::Search;
//!
//! // Create a new game from the starting position
//! let mut board = Board::new();
//!
//! // Generate all legal moves
//! let moves = board.generate_legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! // Search for a short while and play the chosen move
//! let mut search = Search::new();
//! if let Some(best) = search.find_best_move(&board, Duration::from_millis(20)) {
//!     board.make_move(best);
//! }
//! ```
//!
//! # Building Positions
//!
//! ```
//! use plywood::board::Board;
//!
//! // From FEN notation
//! let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! assert!(!board.white_to_move());
//! ```
//!
//! # Making Moves
//!
//! ```
//! use plywood::board::Board;
//!
//! let mut board = Board::new();
//!
//! // Parse and make a UCI move
//! board.make_move_uci("e2e4").unwrap();
//! board.make_move_uci("e7e5").unwrap();
//!
//! // Check game state
//! assert!(!board.is_checkmate());
//! assert!(!board.is_stalemate());
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square`, `Move`,
//!   and `CastlingRights`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod search;
pub mod uci;
pub mod zobrist;

/// Force initialization of the process-wide Zobrist keys and attack tables.
///
/// Everything self-initializes lazily, so calling this is not required for
/// correctness; the binary calls it once at startup so the first search does
/// not pay the table-construction cost.
pub fn init() {
    once_cell::sync::Lazy::force(&zobrist::ZOBRIST);
    board::force_init_tables();
}
