use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{generate_slide_moves, BISHOP_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    generate_slide_moves(game_state, side, from, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::moves::chess_move::ChessMove;
    use crate::utils::fen::parse_fen;

    #[test]
    fn slide_stops_at_first_enemy_piece_inclusive() {
        let game = parse_fen("4k3/8/8/8/3B4/8/8/r3K3 b - - 0 1").expect("FEN should parse");
        let mut moves = Vec::<ChessMove>::new();
        generate_bishop_moves(&game, Color::White, Square::new(4, 3), &mut moves);

        // a1 is occupied by the black rook; the bishop may capture it but
        // not pass through.
        assert!(moves.iter().any(|m| m.end == Square::new(7, 0)));
        assert!(moves.iter().all(|m| m.end != Square::new(7, 0) || m.piece_captured.is_some()));
    }
}
