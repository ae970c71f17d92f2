use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::rook_moves::is_valid_rook_move;
use crate::position::position::Position;

#[inline]
pub fn is_valid_queen_move(source: Position, target: Position) -> bool {
    is_valid_bishop_move(source, target) || is_valid_rook_move(source, target)
}
