//! Attack and check queries.
//!
//! `is_square_attacked` answers "could the attacker capture onto this
//! square" from capture geometry alone (pawn diagonals, knight and king
//! offsets, slides), so it is correct for empty squares too. Both the
//! legality filter and castling validity reuse this one primitive.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::move_generation::legal_moves_knight::KNIGHT_OFFSETS;
use crate::move_generation::legal_moves_king::KING_OFFSETS;

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    // Pawns attack diagonally forward, so an attacking pawn sits one row
    // behind the target relative to its own direction of travel.
    for d_col in [-1i8, 1i8] {
        if let Some(origin) = square.offset(-attacker_color.forward(), d_col) {
            if let Some(piece) = game_state.piece_at(origin) {
                if piece.color == attacker_color && piece.kind == PieceKind::Pawn {
                    return true;
                }
            }
        }
    }

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(origin) = square.offset(d_row, d_col) {
            if let Some(piece) = game_state.piece_at(origin) {
                if piece.color == attacker_color && piece.kind == PieceKind::Knight {
                    return true;
                }
            }
        }
    }

    for &(d_row, d_col) in &KING_OFFSETS {
        if let Some(origin) = square.offset(d_row, d_col) {
            if let Some(piece) = game_state.piece_at(origin) {
                if piece.color == attacker_color && piece.kind == PieceKind::King {
                    return true;
                }
            }
        }
    }

    if slide_attacked(game_state, square, attacker_color, &ROOK_DIRECTIONS, PieceKind::Rook) {
        return true;
    }
    if slide_attacked(game_state, square, attacker_color, &BISHOP_DIRECTIONS, PieceKind::Bishop) {
        return true;
    }

    false
}

/// Walk each ray until the first occupied square; the square is attacked if
/// that piece is an attacker of the matching slider kind or a queen.
fn slide_attacked(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut current = square;
        while let Some(next) = current.offset(d_row, d_col) {
            match game_state.piece_at(next) {
                None => current = next,
                Some(piece) => {
                    if piece.color == attacker_color
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}
