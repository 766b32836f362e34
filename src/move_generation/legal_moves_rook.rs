use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{generate_slide_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_rook_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    generate_slide_moves(game_state, side, from, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::moves::chess_move::ChessMove;
    use crate::utils::fen::parse_fen;

    #[test]
    fn open_board_rook_covers_fourteen_squares() {
        let game = parse_fen("4k3/8/8/8/3R4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::<ChessMove>::new();
        generate_rook_moves(&game, Color::White, Square::new(4, 3), &mut moves);
        assert_eq!(moves.len(), 14);
    }
}
