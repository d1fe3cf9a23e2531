mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Bitboard, Board, Move, MoveList, Piece, Square};

impl Board {
    /// Generate every move allowed by piece movement rules for the side to
    /// move, ignoring whether the mover's king is left in check. Castling is
    /// the exception: attacked-square constraints are part of its movement
    /// rule and are enforced here.
    #[must_use]
    pub fn generate_pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let c_idx = self.current_color().index();

        self.generate_pawn_moves(&mut moves);

        for from in self.pieces[c_idx][Piece::Knight.index()].iter() {
            self.generate_knight_moves(from, &mut moves);
        }
        for piece in [Piece::Bishop, Piece::Rook, Piece::Queen] {
            for from in self.pieces[c_idx][piece.index()].iter() {
                self.generate_slider_moves(from, piece, &mut moves);
            }
        }
        for from in self.pieces[c_idx][Piece::King.index()].iter() {
            self.generate_king_moves(from, &mut moves);
        }

        moves
    }

    /// Generate all legal moves: pseudo-legal moves that do not leave the
    /// mover's own king in check, verified by make/test/unmake.
    ///
    /// An empty result means checkmate if the king is attacked, stalemate
    /// otherwise.
    #[must_use]
    pub fn generate_legal_moves(&mut self) -> MoveList {
        let current_color = self.current_color();
        let pseudo_moves = self.generate_pseudo_legal_moves();
        let mut legal_moves = MoveList::new();

        for m in &pseudo_moves {
            self.make_move(*m);
            if !self.is_in_check(current_color) {
                legal_moves.push(*m);
            }
            self.unmake_move(*m);
        }
        legal_moves
    }

    /// Classify each target square as quiet or capture by consulting the
    /// mailbox and push the corresponding move.
    pub(crate) fn push_moves_to_targets(
        &self,
        from: Square,
        targets: Bitboard,
        moves: &mut MoveList,
    ) {
        for to in targets.iter() {
            if self.piece_at(to).is_some() {
                moves.push(Move::capture(from, to));
            } else {
                moves.push(Move::quiet(from, to));
            }
        }
    }

    /// The side to move has no legal moves and is in check.
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        let color = self.current_color();
        self.is_in_check(color) && self.generate_legal_moves().is_empty()
    }

    /// The side to move has no legal moves and is not in check.
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        let color = self.current_color();
        !self.is_in_check(color) && self.generate_legal_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree at the given depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.unmake_move(*m);
        }

        nodes
    }
}
