//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard starting position FEN used to
//! initialize new games, and the home columns of the castling pieces.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column the kings start on.
pub const KING_START_COL: u8 = 4;

/// Column of the king-side (h-file) rook's home square.
pub const KING_SIDE_ROOK_COL: u8 = 7;

/// Column of the queen-side (a-file) rook's home square.
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;

/// King destination column after king-side castling.
pub const KING_SIDE_CASTLE_COL: u8 = 6;

/// King destination column after queen-side castling.
pub const QUEEN_SIDE_CASTLE_COL: u8 = 2;
