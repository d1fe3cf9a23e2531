//! Zobrist hashing keys.
//!
//! All keys are drawn from a single fixed-seed RNG stream so hashes are
//! reproducible across runs and builds.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// The full Zobrist key set for position hashing.
pub struct Zobrist {
    /// Keys indexed `[piece][color][square]`
    pub piece_square: [[[u64; 64]; 2]; 6],
    /// XORed into the hash when it is Black's turn
    pub black_to_move: u64,
    /// One key per castling-rights bitmask value
    pub castling: [u64; 16],
    /// One key per en-passant file (a..h)
    pub en_passant_file: [u64; 8],
}

pub static ZOBRIST: Lazy<Zobrist> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 2]; 6];
    for piece in &mut piece_square {
        for color in piece.iter_mut() {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }
    }

    let black_to_move = rng.gen();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.gen();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.gen();
    }

    Zobrist {
        piece_square,
        black_to_move,
        castling,
        en_passant_file,
    }
});
