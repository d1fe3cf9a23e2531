use super::super::attack_tables;
use super::super::{Bitboard, Board, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_slider_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let color = self.current_color();
        let own_occ = self.occupied[color.index()].0;
        let occ = self.all_occupied.0;
        let attacks = match piece {
            Piece::Bishop => attack_tables::bishop_attacks(from.index(), occ),
            Piece::Rook => attack_tables::rook_attacks(from.index(), occ),
            _ => attack_tables::queen_attacks(from.index(), occ),
        };
        self.push_moves_to_targets(from, Bitboard(attacks & !own_occ), moves);
    }
}
