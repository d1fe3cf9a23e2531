//! Debug-build consistency checks for the board representation.

use super::{Board, Color, Piece};

impl Board {
    /// Assert that every derived view of the position agrees: piece
    /// bitboards are pairwise disjoint, the color unions and total occupancy
    /// match, the mailbox mirrors the bitboards, and the incremental hash
    /// equals a from-scratch recomputation.
    ///
    /// Intended for tests and debugging; not called on the hot path.
    pub fn assert_consistent(&self) {
        let mut union = 0u64;
        for color in [Color::White, Color::Black] {
            let mut color_union = 0u64;
            for piece in Piece::ALL {
                let bb = self.pieces[color.index()][piece.index()].0;
                assert_eq!(union & bb, 0, "piece bitboards overlap");
                union |= bb;
                color_union |= bb;
            }
            assert_eq!(
                color_union,
                self.occupied[color.index()].0,
                "color occupancy out of sync"
            );
        }
        assert_eq!(
            self.occupied[0].0 & self.occupied[1].0,
            0,
            "color occupancies overlap"
        );
        assert_eq!(
            self.occupied[0].0 | self.occupied[1].0,
            self.all_occupied.0,
            "total occupancy out of sync"
        );

        for sq in 0..64 {
            let bit = 1u64 << sq;
            let mb = self.mailbox[sq];
            match mb {
                None => assert_eq!(self.all_occupied.0 & bit, 0, "mailbox empty, bitboard set"),
                Some((color, piece)) => {
                    assert_ne!(
                        self.pieces[color.index()][piece.index()].0 & bit,
                        0,
                        "mailbox and bitboards disagree on square {sq}"
                    );
                }
            }
        }

        assert_eq!(self.hash, self.calculate_hash(), "incremental hash drifted");
    }
}
