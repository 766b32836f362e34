//! The move value object.
//!
//! A `ChessMove` is an immutable record of one move, constructed against the
//! board it was generated from: the captured piece and promotion
//! applicability are computed at construction time, not re-derived later, so
//! a move must be (re)built against the current board before being trusted.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::KING_SIDE_CASTLE_COL;
use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};

#[derive(Debug, Clone)]
pub struct ChessMove {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub is_promotion: bool,
    /// Chosen promotion piece. `None` on a freshly-generated promotion move;
    /// filled in by `resolve_promotion` or forced during log replay.
    pub promotion_kind: Option<PieceKind>,
}

impl ChessMove {
    /// Build an ordinary move from the board snapshot. The destination
    /// contents become the captured piece; a pawn reaching the far rank is
    /// flagged as a promotion.
    pub fn new(start: Square, end: Square, board: &Board) -> ChessResult<Self> {
        let piece_moved = piece_at(board, start).ok_or(ChessError::EmptyStartSquare(start))?;
        Ok(Self::from_parts(
            start,
            end,
            piece_moved,
            piece_at(board, end),
        ))
    }

    /// Build a move when the generator has already looked up the pieces.
    pub fn from_parts(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        let is_promotion = piece_moved.kind == PieceKind::Pawn
            && end.row == piece_moved.color.promotion_row();
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant: false,
            is_castling: false,
            is_promotion,
            promotion_kind: None,
        }
    }

    /// Coordinate notation for a square pair, for example `e2e4`.
    pub fn coordinate_notation(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

/// Equality is (start, end, promotion kind). Promotion choice participates
/// so that two different promotions of the same pawn push never compare
/// equal; special-move flags stay derived data and are excluded.
impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.promotion_kind == other.promotion_kind
    }
}

impl Eq for ChessMove {}

impl fmt::Display for ChessMove {
    /// Short algebraic-style text for the move-list panel. Simplified and
    /// not fully disambiguating: pawn moves show the destination (or
    /// `<file>x<dest>` on capture), piece moves show a letter prefix and `x`
    /// on capture, castling renders as `O-O`/`O-O-O`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castling {
            return if self.end.col == KING_SIDE_CASTLE_COL {
                write!(f, "O-O")
            } else {
                write!(f, "O-O-O")
            };
        }

        let captures = self.piece_captured.is_some();
        match self.piece_moved.kind {
            PieceKind::Pawn => {
                if captures {
                    write!(f, "{}x{}", char::from(b'a' + self.start.col), self.end)?;
                } else {
                    write!(f, "{}", self.end)?;
                }
                if let Some(kind) = self.promotion_kind {
                    write!(f, "={}", kind.letter())?;
                }
                Ok(())
            }
            kind => {
                write!(f, "{}", kind.letter())?;
                if captures {
                    write!(f, "x")?;
                }
                write!(f, "{}", self.end)
            }
        }
    }
}

#[inline]
fn piece_at(board: &Board, square: Square) -> Option<Piece> {
    board[square.row as usize][square.col as usize]
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::utils::fen::parse_fen;

    #[test]
    fn construction_records_captured_piece_from_board() {
        let game = parse_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let capture = ChessMove::new(Square::new(4, 4), Square::new(3, 3), game.board())
            .expect("move should build");
        assert_eq!(
            capture.piece_captured,
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert!(!capture.is_promotion);
    }

    #[test]
    fn pawn_reaching_far_rank_is_flagged_as_promotion() {
        let game = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let push = ChessMove::new(Square::new(1, 0), Square::new(0, 0), game.board())
            .expect("move should build");
        assert!(push.is_promotion);
        assert_eq!(push.promotion_kind, None);
    }

    #[test]
    fn equality_includes_promotion_kind() {
        let game = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let a = ChessMove::new(Square::new(1, 0), Square::new(0, 0), game.board())
            .expect("move should build");
        let mut b = a.clone();
        assert_eq!(a, b);

        b.promotion_kind = Some(PieceKind::Knight);
        assert_ne!(a, b);
    }

    #[test]
    fn display_renders_short_algebraic_forms() {
        let game =
            parse_fen("r3k3/1P6/8/3p4/4P3/8/8/R3K2R w KQq - 0 1").expect("FEN should parse");
        let board = game.board();

        let push = ChessMove::new(Square::new(4, 4), Square::new(3, 4), board)
            .expect("move should build");
        assert_eq!(push.to_string(), "e5");

        let capture = ChessMove::new(Square::new(4, 4), Square::new(3, 3), board)
            .expect("move should build");
        assert_eq!(capture.to_string(), "exd5");

        let rook_lift = ChessMove::new(Square::new(7, 0), Square::new(7, 3), board)
            .expect("move should build");
        assert_eq!(rook_lift.to_string(), "Rd1");

        let mut promo = ChessMove::new(Square::new(1, 1), Square::new(0, 0), board)
            .expect("move should build");
        promo.promotion_kind = Some(PieceKind::Queen);
        assert_eq!(promo.to_string(), "bxa8=Q");

        let king = Piece::new(Color::White, PieceKind::King);
        let mut castle = ChessMove::from_parts(Square::new(7, 4), Square::new(7, 6), king, None);
        castle.is_castling = true;
        assert_eq!(castle.to_string(), "O-O");
        let mut long_castle =
            ChessMove::from_parts(Square::new(7, 4), Square::new(7, 2), king, None);
        long_castle.is_castling = true;
        assert_eq!(long_castle.to_string(), "O-O-O");
    }
}
