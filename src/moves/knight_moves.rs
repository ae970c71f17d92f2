use crate::position::position::Position;

/// The eight L-shaped `(d_file, d_rank)` jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[inline]
pub fn is_valid_knight_move(source: Position, target: Position) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|&(d_file, d_rank)| source.offset(d_file, d_rank) == Ok(target))
}
