//! FEN parsing and generation.
//!
//! Positions round-trip through Forsyth-Edwards Notation for test setup and
//! diagnostics. The engine does not model the halfmove clock, so that field
//! is accepted on input and written as `0` on output; the fullmove number is
//! derived from the applied-move log. Both clock fields may be omitted on
//! input.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{
    Board, CastlingRights, Color, Piece, PieceKind, Square,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parse a FEN string into a fresh game state with empty histories.
///
/// Both kings must be present; the clock fields are optional and ignored.
pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut fields = fen.split_whitespace();
    let board_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFenString("missing board field".to_owned()))?;
    let side_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFenString("missing side-to-move field".to_owned()))?;
    let castling_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFenString("missing castling field".to_owned()))?;
    let en_passant_field = fields
        .next()
        .ok_or_else(|| ChessError::InvalidFenString("missing en-passant field".to_owned()))?;
    let _halfmove_clock = fields.next();
    let _fullmove_number = fields.next();
    if fields.next().is_some() {
        return Err(ChessError::InvalidFenString(fen.to_owned()));
    }

    let board = parse_board_field(board_field)?;
    let side_to_move = match side_field {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(ChessError::InvalidFenString(other.to_owned())),
    };
    let castling_rights = parse_castling_field(castling_field)?;
    let en_passant_target = if en_passant_field == "-" {
        None
    } else {
        Some(algebraic_to_square(en_passant_field)?)
    };

    GameState::from_setup(board, side_to_move, castling_rights, en_passant_target)
}

fn parse_board_field(field: &str) -> ChessResult<Board> {
    let mut board: Board = [[None; 8]; 8];

    // FEN lists rank 8 first, which is row 0 in the mailbox.
    let mut row = 0usize;
    for rank in field.split('/') {
        if row >= 8 {
            return Err(ChessError::InvalidFenString(field.to_owned()));
        }
        let mut col = 0usize;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as usize;
            } else {
                if col >= 8 {
                    return Err(ChessError::InvalidFenString(rank.to_owned()));
                }
                board[row][col] = Some(piece_from_fen_char(ch)?);
                col += 1;
            }
        }
        if col != 8 {
            return Err(ChessError::InvalidFenString(rank.to_owned()));
        }
        row += 1;
    }
    if row != 8 {
        return Err(ChessError::InvalidFenString(field.to_owned()));
    }

    Ok(board)
}

fn parse_castling_field(field: &str) -> ChessResult<CastlingRights> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }

    let mut rights = CastlingRights::none();
    for ch in field.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(ChessError::InvalidFenString(field.to_owned())),
        }
    }
    Ok(rights)
}

/// Uppercase is white, lowercase is black.
fn piece_from_fen_char(ch: char) -> ChessResult<Piece> {
    let kind = PieceKind::from_letter(ch).ok_or(ChessError::InvalidAlgebraicChar(ch))?;
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Ok(Piece::new(color, kind))
}

/// Render the current position as a six-field FEN string.
pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::with_capacity(90);

    for row in 0..8u8 {
        if row > 0 {
            out.push('/');
        }
        let mut empty_run = 0u8;
        for col in 0..8u8 {
            match game_state.piece_at(Square::new(row, col)) {
                None => empty_run += 1,
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    let letter = piece.kind.letter();
                    out.push(match piece.color {
                        Color::White => letter,
                        Color::Black => letter.to_ascii_lowercase(),
                    });
                }
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
    }

    out.push(' ');
    out.push(match game_state.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    let rights = game_state.castling_rights();
    if rights == CastlingRights::none() {
        out.push('-');
    } else {
        if rights.white_king_side {
            out.push('K');
        }
        if rights.white_queen_side {
            out.push('Q');
        }
        if rights.black_king_side {
            out.push('k');
        }
        if rights.black_queen_side {
            out.push('q');
        }
    }

    out.push(' ');
    match game_state.en_passant_target() {
        Some(square) => out.push_str(&square_to_algebraic(square)),
        None => out.push('-'),
    }

    // Halfmove clock is not modeled; fullmove comes from the log.
    out.push_str(&format!(" 0 {}", game_state.fullmove_number()));

    out
}

#[cfg(test)]
mod tests {
    use super::{generate_fen, parse_fen};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn starting_position_round_trips() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(generate_fen(&game), STARTING_POSITION_FEN);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(
            game.piece_at(Square::new(7, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(game.king_square(Color::Black), Square::new(0, 4));
    }

    #[test]
    fn clock_fields_are_optional() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 w - -").expect("four-field FEN should parse");
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(generate_fen(&game), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }

    #[test]
    fn en_passant_field_is_parsed_as_a_square() {
        let game = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        assert_eq!(game.en_passant_target(), Some(Square::new(5, 4)));
    }

    #[test]
    fn malformed_fens_are_rejected() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/4K3 w - -").is_err(), "seven ranks");
        assert!(
            parse_fen("4k3/9/8/8/8/8/8/4K3 w - -").is_err(),
            "overfull rank"
        );
        assert!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - -").is_err(),
            "bad side field"
        );
        assert!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w KX -").is_err(),
            "bad castling field"
        );
    }

    #[test]
    fn boards_without_both_kings_are_rejected() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - -").err(),
            Some(ChessError::MissingKing(Color::Black))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/8 w - -").err(),
            Some(ChessError::MissingKing(Color::White))
        );
    }
}
