use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Pawn pushes, captures, and en-passant captures from one square.
///
/// A pawn reaching the far rank is flagged as a promotion by the move
/// constructor; the promotion kind stays unset until the player chooses.
pub fn generate_pawn_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    let Some(piece_moved) = game_state.piece_at(from) else {
        return;
    };
    let forward = side.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if game_state.piece_at(one_step).is_none() {
            out.push(ChessMove::from_parts(from, one_step, piece_moved, None));

            // Two-square advance from the home rank through an empty square.
            if from.row == side.pawn_row() {
                if let Some(two_step) = from.offset(forward * 2, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(ChessMove::from_parts(from, two_step, piece_moved, None));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(target) if target.color != side => {
                out.push(ChessMove::from_parts(from, to, piece_moved, Some(target)));
            }
            None if game_state.en_passant_target() == Some(to) => {
                // Captures the pawn beside the destination, not behind it.
                let beside = Square::new(from.row, to.col);
                let mut mv =
                    ChessMove::from_parts(from, to, piece_moved, game_state.piece_at(beside));
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}
