use crate::game_state::chess_rules::{
    KING_SIDE_CASTLE_COL, KING_SIDE_ROOK_COL, KING_START_COL, QUEEN_SIDE_CASTLE_COL,
    QUEEN_SIDE_ROOK_COL,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::generate_offset_moves;
use crate::moves::chess_move::ChessMove;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One-square king steps. Castling is synthesized separately by
/// `generate_castling_moves` so the attack test never recurses into it.
pub fn generate_king_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    generate_offset_moves(game_state, side, from, &KING_OFFSETS, out);
}

/// Castling candidates for the side to move.
///
/// Requires in order: rights intact for the wing with that wing's rook on
/// its home square, every square strictly between king and rook empty, and
/// the king's square plus every square it passes through (destination
/// included) unattacked.
pub fn generate_castling_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move();
    let enemy = side.opposite();
    let home = side.home_row();
    let king_sq = game_state.king_square(side);

    if king_sq != Square::new(home, KING_START_COL) {
        return;
    }
    // Cannot castle out of check.
    if is_square_attacked(game_state, king_sq, enemy) {
        return;
    }

    let king = Piece::new(side, PieceKind::King);
    let rook = Piece::new(side, PieceKind::Rook);
    let rights = game_state.castling_rights();

    // A host FEN may grant a right without the rook actually being home;
    // such rights are ignored rather than trusted.
    if rights.king_side(side)
        && game_state.piece_at(Square::new(home, KING_SIDE_ROOK_COL)) == Some(rook)
    {
        let transit = Square::new(home, 5);
        let destination = Square::new(home, KING_SIDE_CASTLE_COL);
        if game_state.piece_at(transit).is_none()
            && game_state.piece_at(destination).is_none()
            && !is_square_attacked(game_state, transit, enemy)
            && !is_square_attacked(game_state, destination, enemy)
        {
            let mut mv = ChessMove::from_parts(king_sq, destination, king, None);
            mv.is_castling = true;
            out.push(mv);
        }
    }

    if rights.queen_side(side)
        && game_state.piece_at(Square::new(home, QUEEN_SIDE_ROOK_COL)) == Some(rook)
    {
        let transit = Square::new(home, 3);
        let destination = Square::new(home, QUEEN_SIDE_CASTLE_COL);
        let knight_square = Square::new(home, 1);
        if game_state.piece_at(transit).is_none()
            && game_state.piece_at(destination).is_none()
            && game_state.piece_at(knight_square).is_none()
            && !is_square_attacked(game_state, transit, enemy)
            && !is_square_attacked(game_state, destination, enemy)
        {
            let mut mv = ChessMove::from_parts(king_sq, destination, king, None);
            mv.is_castling = true;
            out.push(mv);
        }
    }
}
