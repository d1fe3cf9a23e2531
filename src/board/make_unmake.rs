use super::state::UnmakeInfo;
use super::{Board, Color, Move, Piece, Square};
use crate::zobrist::ZOBRIST;

impl Board {
    /// Apply a legal move, pushing an unmake snapshot and updating the
    /// Zobrist hash incrementally.
    #[allow(clippy::too_many_lines)] // Inherently branchy: every move kind is handled here
    pub fn make_move(&mut self, m: Move) {
        let color = self.current_color();
        let c_idx = color.index();
        let opponent = color.opponent();

        let (moving_color, moving_piece) = self
            .piece_at(m.from())
            .expect("make_move: 'from' square empty");
        debug_assert_eq!(moving_color, color, "make_move: moving opponent's piece");

        // The captured type is known before anything is disturbed. En passant
        // always captures a pawn; other captures read the destination square.
        let captured_piece = if m.is_en_passant() {
            Some(Piece::Pawn)
        } else if m.is_capture() {
            self.piece_at(m.to()).map(|(_, piece)| piece)
        } else {
            None
        };

        self.history.push(UnmakeInfo {
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            hash: self.hash,
            captured_piece,
        });

        let mut hash = self.hash;
        hash ^= ZOBRIST.castling[self.castling_rights.as_u8() as usize];
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_file[ep.file()];
        }

        self.remove_piece(m.from(), color, moving_piece);
        hash ^= ZOBRIST.piece_square[moving_piece.index()][c_idx][m.from().index()];

        if m.is_en_passant() {
            // The captured pawn sits beside the destination, not on it
            let cap_sq = m.to().offset(-color.push_offset());
            self.remove_piece(cap_sq, opponent, Piece::Pawn);
            hash ^= ZOBRIST.piece_square[Piece::Pawn.index()][opponent.index()][cap_sq.index()];
        } else if let Some(captured) = captured_piece {
            self.remove_piece(m.to(), opponent, captured);
            hash ^= ZOBRIST.piece_square[captured.index()][opponent.index()][m.to().index()];
        }

        let placed_piece = m.promotion_piece().unwrap_or(moving_piece);
        self.set_piece(m.to(), color, placed_piece);
        hash ^= ZOBRIST.piece_square[placed_piece.index()][c_idx][m.to().index()];

        if m.is_castling() {
            let rank = color.back_rank();
            let (rook_from_file, rook_to_file) = if m.is_castle_kingside() { (7, 5) } else { (0, 3) };
            let rook_from = Square::new(rank, rook_from_file);
            let rook_to = Square::new(rank, rook_to_file);
            self.remove_piece(rook_from, color, Piece::Rook);
            self.set_piece(rook_to, color, Piece::Rook);
            hash ^= ZOBRIST.piece_square[Piece::Rook.index()][c_idx][rook_from.index()];
            hash ^= ZOBRIST.piece_square[Piece::Rook.index()][c_idx][rook_to.index()];
        }

        if moving_piece == Piece::Pawn || captured_piece.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        // King moves strip both of the mover's rights; rook moves from a
        // corner strip one; capturing a rook on its corner strips the
        // opponent's.
        if moving_piece == Piece::King {
            self.castling_rights.remove_both(color);
        } else if moving_piece == Piece::Rook {
            let rank = color.back_rank();
            if m.from() == Square::new(rank, 0) {
                self.castling_rights.remove(color, false);
            } else if m.from() == Square::new(rank, 7) {
                self.castling_rights.remove(color, true);
            }
        }
        if captured_piece == Some(Piece::Rook) {
            let rank = opponent.back_rank();
            if m.to() == Square::new(rank, 0) {
                self.castling_rights.remove(opponent, false);
            } else if m.to() == Square::new(rank, 7) {
                self.castling_rights.remove(opponent, true);
            }
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            Some(m.from().offset(color.push_offset()))
        } else {
            None
        };

        if color == Color::Black {
            self.fullmove_number += 1;
        }

        self.white_to_move = !self.white_to_move;
        hash ^= ZOBRIST.black_to_move;
        hash ^= ZOBRIST.castling[self.castling_rights.as_u8() as usize];
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_file[ep.file()];
        }
        self.hash = hash;
    }

    /// Undo the most recently made move. The snapshot restores castling
    /// rights, en-passant target, halfmove clock and hash directly; only the
    /// piece placement is walked back.
    pub fn unmake_move(&mut self, m: Move) {
        let info = self
            .history
            .pop()
            .expect("unmake_move without matching make_move");

        self.white_to_move = !self.white_to_move;
        let color = self.current_color();
        if color == Color::Black {
            self.fullmove_number -= 1;
        }

        self.castling_rights = info.castling_rights;
        self.en_passant_target = info.en_passant_target;
        self.halfmove_clock = info.halfmove_clock;

        // A promoted pawn is removed by its promoted type
        let landed_piece = m.promotion_piece().unwrap_or_else(|| {
            self.piece_at(m.to())
                .expect("unmake_move: 'to' square empty")
                .1
        });
        self.remove_piece(m.to(), color, landed_piece);

        let original_piece = if m.is_promotion() {
            Piece::Pawn
        } else {
            landed_piece
        };
        self.set_piece(m.from(), color, original_piece);

        if let Some(captured) = info.captured_piece {
            let cap_sq = if m.is_en_passant() {
                m.to().offset(-color.push_offset())
            } else {
                m.to()
            };
            self.set_piece(cap_sq, color.opponent(), captured);
        }

        if m.is_castling() {
            let rank = color.back_rank();
            let (rook_from_file, rook_to_file) = if m.is_castle_kingside() { (7, 5) } else { (0, 3) };
            self.remove_piece(Square::new(rank, rook_to_file), color, Piece::Rook);
            self.set_piece(Square::new(rank, rook_from_file), color, Piece::Rook);
        }

        self.hash = info.hash;
    }
}
