//! Coordinate-notation codec and game-log replay.
//!
//! A saved game is plain text: an informational `#` header line followed by
//! one move per line in coordinate notation (`e2e4`), with optional ` ep`,
//! ` castle`, and ` promotion=<letter>` suffixes. Loading replays the lines
//! against a fresh game through the normal legality pipeline, so a loaded
//! state is exactly as trustworthy as a played one. Lines that fail to parse
//! or to match a legal move are skipped and reported as `ReplayWarning`
//! values; loading never aborts.

use std::fmt;

use chrono::Local;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

const PROMOTION_PREFIX: &str = "promotion=";

/// A move as read from one log line, before it is matched against the
/// legal moves of the replayed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMove {
    pub start: Square,
    pub end: Square,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub promotion_kind: Option<PieceKind>,
}

/// A recoverable problem encountered while replaying a saved log. The line
/// is skipped and replay continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayWarning {
    /// The line did not parse as coordinate notation.
    MalformedLine { line_number: usize, line: String },
    /// The line parsed, but matched no legal move in the replayed position.
    UnmatchedMove { line_number: usize, line: String },
}

impl fmt::Display for ReplayWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayWarning::MalformedLine { line_number, line } => {
                write!(f, "line {line_number}: malformed move '{line}'")
            }
            ReplayWarning::UnmatchedMove { line_number, line } => {
                write!(f, "line {line_number}: '{line}' matches no legal move")
            }
        }
    }
}

/// One log line for a move, for example `e2e4`, `e5d6 ep`, `e1g1 castle`,
/// or `a7a8 promotion=Q`.
pub fn encode_move(mv: &ChessMove) -> String {
    let mut out = mv.coordinate_notation();
    if mv.is_en_passant {
        out.push_str(" ep");
    }
    if mv.is_castling {
        out.push_str(" castle");
    }
    if let Some(kind) = mv.promotion_kind {
        out.push(' ');
        out.push_str(PROMOTION_PREFIX);
        out.push(kind.letter());
    }
    out
}

/// Serialize an applied-move log as save-file text, headed by a dated
/// comment line.
pub fn save_log(moves: &[ChessMove]) -> String {
    let mut out = String::with_capacity(16 + moves.len() * 8);
    out.push_str(&format!(
        "# saved {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    for mv in moves {
        out.push_str(&encode_move(mv));
        out.push('\n');
    }
    out
}

/// Parse one log line into its coordinate pair and suffixes.
pub fn parse_line(line: &str) -> ChessResult<ParsedMove> {
    let mut tokens = line.split_whitespace();
    let coords = tokens
        .next()
        .ok_or_else(|| ChessError::InvalidAlgebraicString(line.to_owned()))?;
    // Length alone is not enough: a 4-byte token may still contain a
    // multi-byte character, which would make the range slices below panic.
    if coords.len() != 4 || !coords.is_ascii() {
        return Err(ChessError::InvalidAlgebraicString(coords.to_owned()));
    }

    let mut parsed = ParsedMove {
        start: algebraic_to_square(&coords[0..2])?,
        end: algebraic_to_square(&coords[2..4])?,
        is_en_passant: false,
        is_castling: false,
        promotion_kind: None,
    };

    for token in tokens {
        match token {
            "ep" => parsed.is_en_passant = true,
            "castle" => parsed.is_castling = true,
            other if other.starts_with(PROMOTION_PREFIX) => {
                let letter = &other[PROMOTION_PREFIX.len()..];
                let mut chars = letter.chars();
                let (Some(ch), None) = (chars.next(), chars.next()) else {
                    return Err(ChessError::InvalidAlgebraicString(other.to_owned()));
                };
                let kind = PieceKind::from_letter(ch)
                    .filter(|k| k.is_promotion_choice())
                    .ok_or(ChessError::InvalidAlgebraicChar(ch))?;
                parsed.promotion_kind = Some(kind);
            }
            other => return Err(ChessError::InvalidAlgebraicString(other.to_owned())),
        }
    }

    Ok(parsed)
}

/// Replay save-file text from the starting position.
///
/// Blank lines and `#` comments are skipped. Each remaining line is matched
/// by (start, end) against the legal moves of the replayed position; a
/// recorded promotion choice is applied directly, so replay never suspends
/// on a pending promotion. Problems are collected as warnings and the
/// offending lines skipped.
pub fn load_log(text: &str) -> (GameState, Vec<ReplayWarning>) {
    let mut game = GameState::new_game();
    let mut warnings = Vec::<ReplayWarning>::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Ok(parsed) = parse_line(line) else {
            warnings.push(ReplayWarning::MalformedLine {
                line_number,
                line: line.to_owned(),
            });
            continue;
        };

        let Ok(legal) = game.legal_moves() else {
            // Unreachable in practice: replay resolves every promotion
            // inline, so the game is never left suspended between lines.
            warnings.push(ReplayWarning::UnmatchedMove {
                line_number,
                line: line.to_owned(),
            });
            continue;
        };

        let matched = legal
            .into_iter()
            .find(|m| m.start == parsed.start && m.end == parsed.end);
        let Some(mut chosen) = matched else {
            warnings.push(ReplayWarning::UnmatchedMove {
                line_number,
                line: line.to_owned(),
            });
            continue;
        };

        if chosen.is_promotion {
            // A missing choice on a promotion line defaults to a queen so
            // the replayed game is never left suspended.
            chosen.promotion_kind = Some(parsed.promotion_kind.unwrap_or(PieceKind::Queen));
        }

        if game.apply_move(&chosen).is_err() {
            warnings.push(ReplayWarning::UnmatchedMove {
                line_number,
                line: line.to_owned(),
            });
        }
    }

    (game, warnings)
}
