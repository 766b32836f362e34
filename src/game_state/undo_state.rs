use crate::game_state::chess_types::{CastlingRights, Square};

/// Single restoration record for `apply_move` / `undo_move`.
///
/// Pushed on every applied move and popped on undo so castling rights and
/// the en-passant window are restored to their exact pre-move values rather
/// than recomputed.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
}
