use super::super::attack_tables;
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, PROMOTION_PIECES};

impl Board {
    /// Generate pseudo-legal pawn moves for the side to move with whole-set
    /// bitboard shifts: single and double pushes, captures toward both
    /// files, promotions, and en passant.
    pub(crate) fn generate_pawn_moves(&self, moves: &mut MoveList) {
        let color = self.current_color();
        let pawns = self.pieces[color.index()][Piece::Pawn.index()];
        let empty = self.all_occupied.not();
        let enemy = self.occupied[color.opponent().index()];

        // Targets per move shape, with the from-square recovered by undoing
        // the shift. East = toward file h.
        let (singles, doubles, east_caps, west_caps) = if color == Color::White {
            let singles = pawns.shift_north().and(empty);
            let doubles = singles.and(Bitboard::RANK_3).shift_north().and(empty);
            let east_caps = pawns.shift_north().shift_east().and(enemy);
            let west_caps = pawns.shift_north().shift_west().and(enemy);
            (singles, doubles, east_caps, west_caps)
        } else {
            let singles = pawns.shift_south().and(empty);
            let doubles = singles.and(Bitboard::RANK_6).shift_south().and(empty);
            let east_caps = pawns.shift_south().shift_east().and(enemy);
            let west_caps = pawns.shift_south().shift_west().and(enemy);
            (singles, doubles, east_caps, west_caps)
        };

        let push = color.push_offset();
        let (east_delta, west_delta) = if color == Color::White {
            (9i8, 7i8)
        } else {
            (-7i8, -9i8)
        };
        let promo_mask = if color == Color::White {
            Bitboard::RANK_8
        } else {
            Bitboard::RANK_1
        };

        for to in singles.and(promo_mask.not()).iter() {
            moves.push(Move::quiet(to.offset(-push), to));
        }
        for to in singles.and(promo_mask).iter() {
            for promo in PROMOTION_PIECES {
                moves.push(Move::promotion(to.offset(-push), to, promo));
            }
        }
        for to in doubles.iter() {
            moves.push(Move::double_pawn_push(to.offset(-2 * push), to));
        }

        for (caps, delta) in [(east_caps, east_delta), (west_caps, west_delta)] {
            for to in caps.and(promo_mask.not()).iter() {
                moves.push(Move::capture(to.offset(-delta), to));
            }
            for to in caps.and(promo_mask).iter() {
                for promo in PROMOTION_PIECES {
                    moves.push(Move::promotion_capture(to.offset(-delta), to, promo));
                }
            }
        }

        if let Some(ep) = self.en_passant_target {
            // The pawns able to capture en passant are exactly those a pawn
            // of the opposite color on the target square would attack.
            let sources =
                Bitboard(attack_tables::pawn_attacks(color.opponent(), ep.index())).and(pawns);
            for from in sources.iter() {
                moves.push(Move::en_passant(from, ep));
            }
        }
    }
}
