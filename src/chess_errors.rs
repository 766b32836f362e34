//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by game-state transitions,
//! move generation, and the parsing utilities. Variants carry contextual
//! payloads (squares, offending characters, source strings) so callers can
//! present precise diagnostics.
//!
//! Usage guidelines:
//! - Transition and parsing functions return `ChessResult<T>` for expected
//!   failure modes (illegal apply requests, malformed input, bad FEN).
//! - Undo/redo on an empty history are *not* errors; they silently no-op.
//! - Replay problems during log loading are reported as `ReplayWarning`
//!   values (see `utils::notation`), never as aborts.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind, Square};

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// An apply request did not match any currently-legal move. The engine
    /// rejects it without mutating any state.
    IllegalMove { start: Square, end: Square },

    /// A transition was requested while a pawn promotion is awaiting its
    /// piece choice. Resolve the promotion first.
    PromotionPending,

    /// `resolve_promotion` was called with no promotion outstanding.
    NoPromotionPending,

    /// The chosen promotion piece is not one of knight/bishop/rook/queen.
    InvalidPromotionKind(PieceKind),

    /// A move was constructed from a start square holding no piece.
    EmptyStartSquare(Square),

    /// A single character used during coordinate parsing was invalid
    /// (a file outside 'a'..'h' or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// A coordinate string (multi-character) failed to parse.
    InvalidAlgebraicString(String),

    /// A FEN string had malformed structure; payload is the offending
    /// field or string for diagnostics.
    InvalidFenString(String),

    /// The board described by a FEN string lacks a king for one side.
    MissingKing(Color),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMove { start, end } => {
                write!(f, "move {start} -> {end} is not a legal move")
            }
            ChessError::PromotionPending => {
                write!(f, "a pawn promotion is pending and must be resolved first")
            }
            ChessError::NoPromotionPending => {
                write!(f, "no pawn promotion is pending")
            }
            ChessError::InvalidPromotionKind(kind) => {
                write!(f, "cannot promote a pawn to {kind:?}")
            }
            ChessError::EmptyStartSquare(square) => {
                write!(f, "no piece on start square {square}")
            }
            ChessError::InvalidAlgebraicChar(ch) => {
                write!(f, "invalid coordinate character: {ch}")
            }
            ChessError::InvalidAlgebraicString(s) => {
                write!(f, "invalid coordinate string: {s}")
            }
            ChessError::InvalidFenString(s) => {
                write!(f, "invalid FEN: {s}")
            }
            ChessError::MissingKing(color) => {
                write!(f, "board has no {color:?} king")
            }
        }
    }
}

impl Error for ChessError {}
