use crate::pieces::piece::{Color, Piece};
use crate::position::position::Position;

/// Pawn geometry and capture rule.
///
/// A pawn moves one square forward onto a blank square, or two from its
/// start row. It captures only one square diagonally forward, and only an
/// opposing piece. The square jumped by a double step is checked by the board.
pub fn is_valid_pawn_move(color: Color, source: Position, target: Position, occupant: Piece) -> bool {
    let d_file = target.file() as i8 - source.file() as i8;
    let d_rank = (target.rank() as i8 - source.rank() as i8) * color.forward();

    match (d_file.abs(), d_rank) {
        (0, 1) => occupant.is_blank(),
        (0, 2) => occupant.is_blank() && source.row() == color.pawn_start_row(),
        (1, 1) => occupant.is_owned_by(color.opposite()),
        _ => false,
    }
}
