//! Coordinate conversions between algebraic squares and board indices.
//!
//! Converts human-readable coordinates (e.g., `e4`) to `Square` values and
//! back, reused by the FEN and move-notation codecs. File 'a' is column 0;
//! rank 8 is row 0.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert an algebraic coordinate (for example "e4") to a `Square`.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicChar(rank as char));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a `Square` to its algebraic coordinate (for example "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_corner_squares() {
        assert_eq!(
            algebraic_to_square("a1").expect("a1 should parse"),
            Square::new(7, 0)
        );
        assert_eq!(
            algebraic_to_square("h8").expect("h8 should parse"),
            Square::new(0, 7)
        );
        assert_eq!(square_to_algebraic(Square::new(7, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::new(0, 7)), "h8");
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(
            algebraic_to_square("i4"),
            Err(ChessError::InvalidAlgebraicChar('i'))
        );
        assert_eq!(
            algebraic_to_square("a9"),
            Err(ChessError::InvalidAlgebraicChar('9'))
        );
        assert!(matches!(
            algebraic_to_square("e44"),
            Err(ChessError::InvalidAlgebraicString(_))
        ));
    }
}
