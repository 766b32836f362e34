//! Core authoritative board state.
//!
//! `GameState` owns the 8x8 grid, side-to-move, cached king squares,
//! castling rights, the en-passant window, the pending-promotion suspension,
//! and the move/redo histories that drive undo, redo, and save/load replay.
//! All mutation goes through `apply_move` / `undo_move` / `redo_move` /
//! `resolve_promotion`; the cached king squares are maintained by a single
//! internal helper shared by the forward and backward transitions so the two
//! can never drift.
//!
//! The engine is single-threaded by design: callers that want a concurrent
//! analysis copy must `clone()` the state rather than share it.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::{
    Board, CastlingRights, Color, Piece, PieceKind, Square,
};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen::{generate_fen, parse_fen};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,

    // Cached king locations, kept in sync on every king move.
    white_king_square: Square,
    black_king_square: Square,

    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    pending_promotion: Option<(Square, Color)>,

    // --- Histories ---
    move_log: Vec<ChessMove>,
    redo_log: Vec<ChessMove>,
    undo_stack: Vec<UndoState>,

    // --- Derived terminal flags, refreshed by `legal_moves` ---
    in_checkmate: bool,
    in_stalemate: bool,
    is_draw: bool,
}

impl GameState {
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Build a state from already-parsed setup fields, locating the kings.
    pub(crate) fn from_setup(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> ChessResult<Self> {
        let mut white_king = None;
        let mut black_king = None;
        for row in 0..8u8 {
            for col in 0..8u8 {
                let square = Square::new(row, col);
                if let Some(piece) = board[row as usize][col as usize] {
                    if piece.kind == PieceKind::King {
                        match piece.color {
                            Color::White => white_king = Some(square),
                            Color::Black => black_king = Some(square),
                        }
                    }
                }
            }
        }

        Ok(Self {
            board,
            side_to_move,
            white_king_square: white_king.ok_or(ChessError::MissingKing(Color::White))?,
            black_king_square: black_king.ok_or(ChessError::MissingKing(Color::Black))?,
            castling_rights,
            en_passant_target,
            pending_promotion: None,
            move_log: Vec::new(),
            redo_log: Vec::new(),
            undo_stack: Vec::new(),
            in_checkmate: false,
            in_stalemate: false,
            is_draw: false,
        })
    }

    // --- Host-facing reads ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_square,
            Color::Black => self.black_king_square,
        }
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<(Square, Color)> {
        self.pending_promotion
    }

    #[inline]
    pub fn move_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    #[inline]
    pub fn redo_log(&self) -> &[ChessMove] {
        &self.redo_log
    }

    #[inline]
    pub fn in_checkmate(&self) -> bool {
        self.in_checkmate
    }

    #[inline]
    pub fn in_stalemate(&self) -> bool {
        self.in_stalemate
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    /// Fullmove counter derived from the applied-move log (used by FEN).
    #[inline]
    pub fn fullmove_number(&self) -> usize {
        self.move_log.len() / 2 + 1
    }

    // --- Transitions ---

    /// Validate the requested move against the currently-legal moves by
    /// (start, end) equality and apply the generator's version of it. A
    /// request matching nothing is rejected without mutating any state.
    ///
    /// A promotion move applied without a chosen kind suspends the game:
    /// the board keeps the pawn, `pending_promotion` is set, and every
    /// further transition is rejected until `resolve_promotion` runs. A
    /// promotion applied *with* a kind (the replay path) completes
    /// immediately.
    pub fn apply_move(&mut self, requested: &ChessMove) -> ChessResult<()> {
        if self.pending_promotion.is_some() {
            return Err(ChessError::PromotionPending);
        }
        if let Some(kind) = requested.promotion_kind {
            if !kind.is_promotion_choice() {
                return Err(ChessError::InvalidPromotionKind(kind));
            }
        }

        let candidates = move_generator::legal_moves(self);
        let Some(mut chosen) = candidates
            .into_iter()
            .find(|c| c.start == requested.start && c.end == requested.end)
        else {
            return Err(ChessError::IllegalMove {
                start: requested.start,
                end: requested.end,
            });
        };

        if chosen.is_promotion && requested.promotion_kind.is_some() {
            chosen.promotion_kind = requested.promotion_kind;
        }

        // A genuinely new move invalidates the redo branch.
        self.redo_log.clear();
        self.apply_move_inner(chosen);
        Ok(())
    }

    /// Reverse the most recent applied move exactly, restoring the board,
    /// king squares, castling rights, and en-passant window to their
    /// pre-apply values. Silently no-ops on an empty history. Undoing a
    /// move whose promotion is still unresolved cancels the suspension.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let mover = mv.piece_moved.color;

        self.set_square(mv.start, Some(mv.piece_moved));
        self.set_square(mv.end, mv.piece_captured);

        if mv.is_en_passant {
            // The destination was empty before the move; the captured pawn
            // returns to the square beside it.
            self.set_square(mv.end, None);
            self.set_square(Square::new(mv.start.row, mv.end.col), mv.piece_captured);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mover, mv.start);
        }

        if mv.is_castling {
            let home = mv.start.row;
            if mv.end.col > mv.start.col {
                self.relocate_rook(
                    Square::new(home, mv.end.col - 1),
                    Square::new(home, KING_SIDE_ROOK_COL),
                );
            } else {
                self.relocate_rook(
                    Square::new(home, mv.end.col + 1),
                    Square::new(home, QUEEN_SIDE_ROOK_COL),
                );
            }
        }

        if self.pending_promotion == Some((mv.end, mover)) {
            self.pending_promotion = None;
        }

        if let Some(snapshot) = self.undo_stack.pop() {
            self.castling_rights = snapshot.prev_castling_rights;
            self.en_passant_target = snapshot.prev_en_passant_target;
        }

        self.side_to_move = mover;
        self.in_checkmate = false;
        self.in_stalemate = false;
        self.is_draw = false;

        self.redo_log.push(mv);
    }

    /// Re-apply the most recently undone move. Silently no-ops when the
    /// redo history is empty or a promotion is pending.
    pub fn redo_move(&mut self) {
        if self.pending_promotion.is_some() {
            return;
        }
        let Some(mv) = self.redo_log.pop() else {
            return;
        };
        self.apply_move_inner(mv);
    }

    /// Replace the suspended pawn with the chosen piece, record the choice
    /// on the logged move, and lift the suspension.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> ChessResult<()> {
        let Some((square, color)) = self.pending_promotion else {
            return Err(ChessError::NoPromotionPending);
        };
        if !kind.is_promotion_choice() {
            return Err(ChessError::InvalidPromotionKind(kind));
        }

        self.set_square(square, Some(Piece::new(color, kind)));
        if let Some(last) = self.move_log.last_mut() {
            last.promotion_kind = Some(kind);
        }
        self.pending_promotion = None;
        Ok(())
    }

    /// Compute the legal moves for the side to move and refresh the derived
    /// terminal flags: checkmate iff no moves while in check, stalemate iff
    /// no moves otherwise, and the simplified insufficient-material draw.
    ///
    /// Generation works on value snapshots, so the caller-visible rights and
    /// en-passant window are never disturbed.
    pub fn legal_moves(&mut self) -> ChessResult<Vec<ChessMove>> {
        if self.pending_promotion.is_some() {
            return Err(ChessError::PromotionPending);
        }

        let moves = move_generator::legal_moves(self);
        if moves.is_empty() {
            let checked = self.is_in_check();
            self.in_checkmate = checked;
            self.in_stalemate = !checked;
        } else {
            self.in_checkmate = false;
            self.in_stalemate = false;
        }
        self.is_draw = insufficient_material(&self.board);

        Ok(moves)
    }

    // --- Internals ---

    /// Copy of the position fields only (no histories); used by the
    /// legality filter for trial application.
    pub(crate) fn position_snapshot(&self) -> GameState {
        GameState {
            board: self.board,
            side_to_move: self.side_to_move,
            white_king_square: self.white_king_square,
            black_king_square: self.black_king_square,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            pending_promotion: self.pending_promotion,
            move_log: Vec::new(),
            redo_log: Vec::new(),
            undo_stack: Vec::new(),
            in_checkmate: false,
            in_stalemate: false,
            is_draw: false,
        }
    }

    /// Trial application for the legality filter. The promotion piece's
    /// identity cannot affect whether the mover's own king is attacked, so
    /// an undecided promotion is completed as a queen instead of suspending.
    pub(crate) fn apply_move_for_trial(&mut self, mv: &ChessMove) {
        let mut trial = mv.clone();
        if trial.is_promotion && trial.promotion_kind.is_none() {
            trial.promotion_kind = Some(PieceKind::Queen);
        }
        self.apply_move_core(&trial);
    }

    fn apply_move_inner(&mut self, mv: ChessMove) {
        self.undo_stack.push(UndoState {
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        });
        self.apply_move_core(&mv);
        self.move_log.push(mv);
    }

    /// The one forward board transition: piece relocation, capture removal,
    /// en-passant clearing, castling rook relocation, promotion handling,
    /// the en-passant window, rights revocation, and the side flip.
    fn apply_move_core(&mut self, mv: &ChessMove) {
        let mover = mv.piece_moved.color;

        self.set_square(mv.start, None);
        self.set_square(mv.end, Some(mv.piece_moved));

        if mv.is_en_passant {
            // The captured pawn sits beside the destination, not on it.
            self.set_square(Square::new(mv.start.row, mv.end.col), None);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mover, mv.end);
        }

        if mv.is_castling {
            let home = mv.start.row;
            if mv.end.col > mv.start.col {
                self.relocate_rook(
                    Square::new(home, KING_SIDE_ROOK_COL),
                    Square::new(home, mv.end.col - 1),
                );
            } else {
                self.relocate_rook(
                    Square::new(home, QUEEN_SIDE_ROOK_COL),
                    Square::new(home, mv.end.col + 1),
                );
            }
        }

        if mv.is_promotion {
            match mv.promotion_kind {
                Some(kind) => {
                    self.set_square(mv.end, Some(Piece::new(mover, kind)));
                    self.pending_promotion = None;
                }
                None => self.pending_promotion = Some((mv.end, mover)),
            }
        }

        // The window opens only on a two-square pawn advance and closes on
        // any other move.
        self.en_passant_target = if mv.piece_moved.kind == PieceKind::Pawn
            && mv.start.row.abs_diff(mv.end.row) == 2
        {
            Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
        } else {
            None
        };

        self.revoke_castling_rights(mv);
        self.side_to_move = mover.opposite();
    }

    /// Rights are monotonically revocable: once the king or a wing's home
    /// rook has moved, or that rook has been captured on its home square,
    /// the right never comes back.
    fn revoke_castling_rights(&mut self, mv: &ChessMove) {
        let mover = mv.piece_moved.color;

        if mv.piece_moved.kind == PieceKind::King {
            self.castling_rights.revoke_both(mover);
        }

        if mv.piece_moved.kind == PieceKind::Rook && mv.start.row == mover.home_row() {
            if mv.start.col == KING_SIDE_ROOK_COL {
                self.castling_rights.revoke_king_side(mover);
            } else if mv.start.col == QUEEN_SIDE_ROOK_COL {
                self.castling_rights.revoke_queen_side(mover);
            }
        }

        if let Some(captured) = mv.piece_captured {
            if captured.kind == PieceKind::Rook && mv.end.row == captured.color.home_row() {
                if mv.end.col == KING_SIDE_ROOK_COL {
                    self.castling_rights.revoke_king_side(captured.color);
                } else if mv.end.col == QUEEN_SIDE_ROOK_COL {
                    self.castling_rights.revoke_queen_side(captured.color);
                }
            }
        }
    }

    #[inline]
    fn set_square(&mut self, square: Square, contents: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = contents;
    }

    /// Single maintenance point for the cached king locations, shared by
    /// apply and undo.
    #[inline]
    fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king_square = square,
            Color::Black => self.black_king_square = square,
        }
    }

    fn relocate_rook(&mut self, from: Square, to: Square) {
        let rook = self.piece_at(from);
        self.set_square(from, None);
        self.set_square(to, rook);
    }
}

/// Simplified insufficient-material rule: two lone kings; king versus king
/// plus a single minor piece; or king-and-bishop each with both bishops on
/// the same square color. No repetition or fifty-move detection.
fn insufficient_material(board: &Board) -> bool {
    let mut total = 0usize;
    let mut extras = Vec::<(Piece, Square)>::new();

    for row in 0..8u8 {
        for col in 0..8u8 {
            if let Some(piece) = board[row as usize][col as usize] {
                total += 1;
                if piece.kind != PieceKind::King {
                    extras.push((piece, Square::new(row, col)));
                }
            }
        }
    }

    match (total, extras.as_slice()) {
        (2, []) => true,
        (3, [(piece, _)]) => matches!(piece.kind, PieceKind::Knight | PieceKind::Bishop),
        (4, [(a, a_sq), (b, b_sq)]) => {
            a.kind == PieceKind::Bishop
                && b.kind == PieceKind::Bishop
                && a.color != b.color
                && a_sq.color_parity() == b_sq.color_parity()
        }
        _ => false,
    }
}
