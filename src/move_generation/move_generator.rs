//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation with a single closed
//! `match` over the piece kind, synthesizes castling candidates, and filters
//! out moves that leave the mover's own king in check. The legality filter
//! trial-applies each candidate on a lightweight position snapshot, so the
//! caller's state is never mutated and the generator is safely reentrant.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Every move for the side to move that obeys piece geometry and occupancy,
/// without self-check filtering and without castling.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    pseudo_legal_moves_for(game_state, game_state.side_to_move())
}

pub(crate) fn pseudo_legal_moves_for(game_state: &GameState, side: Color) -> Vec<ChessMove> {
    let mut out = Vec::<ChessMove>::with_capacity(64);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            let Some(piece) = game_state.piece_at(from) else {
                continue;
            };
            if piece.color != side {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game_state, side, from, &mut out),
                PieceKind::Knight => generate_knight_moves(game_state, side, from, &mut out),
                PieceKind::Bishop => generate_bishop_moves(game_state, side, from, &mut out),
                PieceKind::Rook => generate_rook_moves(game_state, side, from, &mut out),
                PieceKind::Queen => generate_queen_moves(game_state, side, from, &mut out),
                PieceKind::King => generate_king_moves(game_state, side, from, &mut out),
            }
        }
    }

    out
}

/// Pseudo-legal moves plus castling, minus anything that leaves the mover's
/// own king attacked after the turn flips.
///
/// O(moves x moves) per call; fine for a non-search engine, but a
/// perf-sensitive path if ever reused inside a search.
pub fn legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let side = game_state.side_to_move();

    let mut candidates = pseudo_legal_moves_for(game_state, side);
    generate_castling_moves(game_state, &mut candidates);

    let mut legal = Vec::<ChessMove>::with_capacity(candidates.len());
    for mv in candidates {
        let mut trial = game_state.position_snapshot();
        trial.apply_move_for_trial(&mv);
        if !is_king_in_check(&trial, side) {
            legal.push(mv);
        }
    }

    legal
}

#[cfg(test)]
mod tests {
    use super::{legal_moves, pseudo_legal_moves};
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::utils::fen::parse_fen;

    #[test]
    fn starting_position_has_exactly_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(pseudo_legal_moves(&game).len(), 20);
        assert_eq!(legal_moves(&game).len(), 20);
    }

    #[test]
    fn pinned_piece_may_not_expose_its_king() {
        // The e4 knight is pinned by the e8 rook against the e1 king.
        let game = parse_fen("4r1k1/8/8/8/4N3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = legal_moves(&game);
        assert!(moves.iter().all(|m| m.start != Square::new(4, 4)));
    }

    #[test]
    fn every_legal_move_leaves_own_king_safe() {
        let game = parse_fen("r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 0 1")
            .expect("FEN should parse");
        let side = game.side_to_move();
        for mv in legal_moves(&game) {
            let mut trial = game.position_snapshot();
            trial.apply_move_for_trial(&mv);
            assert!(
                !is_king_in_check(&trial, side),
                "move {mv} leaves own king in check"
            );
        }
    }

    #[test]
    fn checkmate_position_has_no_legal_moves() {
        // Queen on g2 guarded by the f3 bishop mates the cornered king.
        let game = parse_fen("7k/8/8/8/8/5b2/6q1/7K w - - 0 1").expect("FEN should parse");
        assert!(legal_moves(&game).is_empty());
    }
}
