mod attack_tables;
mod debug;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, START_FEN};
pub use types::{
    format_square, Bitboard, CastlingRights, Color, Move, MoveList, Piece, Square,
};

pub(crate) use types::{bit_for_square, file_to_index, rank_to_index, PROMOTION_PIECES};

pub(crate) fn force_init_tables() {
    attack_tables::force_init();
}
