//! Random playout simulation.

use rand::rngs::StdRng;
use rand::Rng;

use crate::board::Board;

/// Play uniformly random legal moves from the given position until a
/// terminal state and score it for the side to move at the start:
/// +1.0 win, -1.0 loss, 0.0 draw (stalemate or fifty-move rule).
pub(crate) fn random_playout(board: &mut Board, rng: &mut StdRng) -> f64 {
    let starting_side = board.white_to_move();

    loop {
        let moves = board.generate_legal_moves();

        if moves.is_empty() {
            let mover = board.current_color();
            if board.is_in_check(mover) {
                // Checkmate: loss for whoever is to move here
                return if board.white_to_move() == starting_side {
                    -1.0
                } else {
                    1.0
                };
            }
            return 0.0;
        }

        if board.is_draw() {
            return 0.0;
        }

        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(mv);
    }
}
