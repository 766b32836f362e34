use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Queen moves are the union of rook and bishop slides.
pub fn generate_queen_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    generate_rook_moves(game_state, side, from, out);
    generate_bishop_moves(game_state, side, from, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::moves::chess_move::ChessMove;
    use crate::utils::fen::parse_fen;

    #[test]
    fn open_board_queen_covers_rook_and_bishop_rays() {
        let game = parse_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::<ChessMove>::new();
        generate_queen_moves(&game, Color::White, Square::new(4, 3), &mut moves);
        assert_eq!(moves.len(), 14 + 13);
    }
}
