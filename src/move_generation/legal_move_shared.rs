use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Orthogonal slide directions (rook).
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Diagonal slide directions (bishop).
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walk each direction one step at a time, stopping at the board edge or the
/// first occupied square (included if enemy, excluded if friendly).
pub fn generate_slide_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece_moved) = game_state.piece_at(from) else {
        return;
    };

    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match game_state.piece_at(to) {
                None => {
                    out.push(ChessMove::from_parts(from, to, piece_moved, None));
                    current = to;
                }
                Some(target) if target.color != side => {
                    out.push(ChessMove::from_parts(from, to, piece_moved, Some(target)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Fixed-offset move generation shared by knight and king steps.
pub fn generate_offset_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece_moved) = game_state.piece_at(from) else {
        return;
    };

    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match game_state.piece_at(to) {
            None => out.push(ChessMove::from_parts(from, to, piece_moved, None)),
            Some(target) if target.color != side => {
                out.push(ChessMove::from_parts(from, to, piece_moved, Some(target)));
            }
            Some(_) => {}
        }
    }
}
