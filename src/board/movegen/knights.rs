use super::super::attack_tables;
use super::super::{Bitboard, Board, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.current_color();
        let own_occ = self.occupied[color.index()].0;
        let targets = Bitboard(attack_tables::knight_attacks(from.index()) & !own_occ);
        self.push_moves_to_targets(from, targets, moves);
    }
}
