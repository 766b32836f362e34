//! Core value types shared by the board, move generation, and codecs.
//!
//! The board is a plain 8x8 mailbox: each square is empty or holds a
//! `Piece`. Row 0 is black's home rank (rank 8), row 7 is white's home rank
//! (rank 1), and column 0 is file 'a'.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row of this side's back rank (where the king and rooks start).
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row of this side's unmoved pawns.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this side promotes on.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row delta of a forward pawn step (white moves toward row 0).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Piece kind (color is represented separately).
///
/// The set is closed; per-kind behavior is dispatched with a single `match`
/// rather than any registration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used by FEN, move notation, and the move-list panel.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Kinds a pawn may promote to.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A colored piece occupying one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate. Row 0 is black's home rank, column 0 is file 'a'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offset this square by a (row, col) delta, staying on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Parity used for square color (light/dark) checks.
    #[inline]
    pub const fn color_parity(self) -> u8 {
        (self.row + self.col) % 2
    }
}

impl fmt::Display for Square {
    /// Algebraic coordinate form, for example `e4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// The 8x8 mailbox grid.
pub type Board = [[Option<Piece>; 8]; 8];

/// Per-side, per-wing castling eligibility. Snapshotted on every applied
/// move so undo restores rights exactly instead of recomputing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    #[inline]
    pub const fn all() -> Self {
        Self {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }

    #[inline]
    pub const fn none() -> Self {
        Self {
            white_king_side: false,
            white_queen_side: false,
            black_king_side: false,
            black_queen_side: false,
        }
    }

    #[inline]
    pub const fn king_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    #[inline]
    pub const fn queen_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    #[inline]
    pub fn revoke_king_side(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_side = false,
            Color::Black => self.black_king_side = false,
        }
    }

    #[inline]
    pub fn revoke_queen_side(&mut self, color: Color) {
        match color {
            Color::White => self.white_queen_side = false,
            Color::Black => self.black_queen_side = false,
        }
    }

    #[inline]
    pub fn revoke_both(&mut self, color: Color) {
        self.revoke_king_side(color);
        self.revoke_queen_side(color);
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, PieceKind, Square};

    #[test]
    fn color_opposite_round_trips() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite().opposite(), Color::Black);
    }

    #[test]
    fn square_display_uses_algebraic_coordinates() {
        assert_eq!(Square::new(7, 0).to_string(), "a1");
        assert_eq!(Square::new(0, 7).to_string(), "h8");
        assert_eq!(Square::new(4, 4).to_string(), "e4");
    }

    #[test]
    fn square_offset_rejects_off_board_targets() {
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(0, 0).offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn piece_kind_letters_round_trip() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            assert_eq!(PieceKind::from_letter(kind.letter()), Some(kind));
        }
        assert_eq!(PieceKind::from_letter('x'), None);
    }
}
