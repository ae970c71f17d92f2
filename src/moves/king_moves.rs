use crate::position::position::Position;

/// The king steps one square in any of the eight directions.
#[inline]
pub fn is_valid_king_move(source: Position, target: Position) -> bool {
    let (d_file, d_rank) = source.distance_to(target);
    d_file <= 1 && d_rank <= 1 && (d_file, d_rank) != (0, 0)
}
