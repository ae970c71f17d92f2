//! Material scoring.
//!
//! A side's score is the sum of its piece values (see `PieceKind::score`),
//! minus a penalty for doubled pawns: every column holding `n > 1` pawns of
//! the side costs `n * DOUBLED_PAWN_PENALTY`. A lone pawn on a column costs
//! nothing.

use crate::pieces::piece::{Color, Piece, PieceKind};
use crate::position::column::Column;
use crate::position::position::Position;

/// Numeric representation of a material score.
pub type Score = f64;

pub const DOUBLED_PAWN_PENALTY: Score = 0.5;

/// Scores `color` over `(square, piece)` pairs covering the board.
pub fn material_score<I>(squares: I, color: Color) -> Score
where
    I: IntoIterator<Item = (Position, Piece)> + Clone,
{
    let material: Score = squares
        .clone()
        .into_iter()
        .filter(|(_, piece)| piece.is_owned_by(color))
        .map(|(_, piece)| piece.score())
        .sum();

    let doubled = doubled_pawn_count(squares, color);
    material - doubled as Score * DOUBLED_PAWN_PENALTY
}

/// Number of `color` pawns standing on columns that hold more than one of them.
pub fn doubled_pawn_count<I>(squares: I, color: Color) -> usize
where
    I: IntoIterator<Item = (Position, Piece)>,
{
    let mut per_column = [0usize; 8];
    for (square, piece) in squares {
        if piece.is(PieceKind::Pawn) && piece.is_owned_by(color) {
            per_column[square.file() as usize] += 1;
        }
    }

    Column::ALL
        .iter()
        .map(|column| per_column[column.index() as usize])
        .filter(|&count| count > 1)
        .sum()
}
