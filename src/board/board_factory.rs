//! Standard starting placement.

use crate::pieces::piece::{Color, Piece, PieceKind};
use crate::position::position::SQUARE_COUNT;

/// Back-rank order from column a to column h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// All 64 squares of a new game, indexed like `Position::index`.
pub fn starting_squares() -> [Piece; SQUARE_COUNT] {
    let mut squares = [Piece::Blank; SQUARE_COUNT];

    for (file, kind) in BACK_RANK.into_iter().enumerate() {
        squares[file] = Piece::new(kind, Color::White);
        squares[8 + file] = Piece::Pawn(Color::White);
        squares[48 + file] = Piece::Pawn(Color::Black);
        squares[56 + file] = Piece::new(kind, Color::Black);
    }

    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kings_start_on_e_file() {
        let squares = starting_squares();
        assert_eq!(squares[4], Piece::King(Color::White));
        assert_eq!(squares[60], Piece::King(Color::Black));
    }

    #[test]
    fn middle_ranks_start_blank() {
        let squares = starting_squares();
        assert!(squares[16..48].iter().all(|p| p.is_blank()));
        assert_eq!(squares.iter().filter(|p| !p.is_blank()).count(), 32);
    }
}
