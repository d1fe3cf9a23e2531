//! Precomputed attack tables for leaper pieces (pawns, knights, kings).

use once_cell::sync::Lazy;

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << ((nr as usize) * 8 + nf as usize);
            }
        }
        *slot = mask;
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_table(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_table(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

/// Pawn capture targets indexed `[color][square]`. White attacks from rank 8
/// and black attacks from rank 1 are empty.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 1)]),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks_center() {
        // Knight on e4 (sq 28) attacks 8 squares
        assert_eq!(KNIGHT_ATTACKS[28].count_ones(), 8);
    }

    #[test]
    fn test_knight_attacks_corner_no_wrap() {
        // Knight on a1 attacks only b3 and c2
        let expected = (1u64 << 17) | (1u64 << 10);
        assert_eq!(KNIGHT_ATTACKS[0], expected);
        // Knight on h1 attacks only g3 and f2
        let expected = (1u64 << 22) | (1u64 << 13);
        assert_eq!(KNIGHT_ATTACKS[7], expected);
    }

    #[test]
    fn test_king_attacks_counts() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3); // a1
        assert_eq!(KING_ATTACKS[4].count_ones(), 5); // e1
        assert_eq!(KING_ATTACKS[28].count_ones(), 8); // e4
    }

    #[test]
    fn test_pawn_attacks_directions() {
        // White pawn on e4 attacks d5 and f5
        let expected = (1u64 << 35) | (1u64 << 37);
        assert_eq!(PAWN_ATTACKS[0][28], expected);
        // Black pawn on e4 attacks d3 and f3
        let expected = (1u64 << 19) | (1u64 << 21);
        assert_eq!(PAWN_ATTACKS[1][28], expected);
    }

    #[test]
    fn test_pawn_attacks_edge_files_and_last_ranks() {
        // White pawn on a2 attacks only b3
        assert_eq!(PAWN_ATTACKS[0][8], 1u64 << 17);
        // White pawn attacks from rank 8 are empty
        for sq in 56..64 {
            assert_eq!(PAWN_ATTACKS[0][sq], 0);
        }
        // Black pawn attacks from rank 1 are empty
        for sq in 0..8 {
            assert_eq!(PAWN_ATTACKS[1][sq], 0);
        }
    }
}
