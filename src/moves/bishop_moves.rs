use crate::position::direction::Direction;
use crate::position::position::Position;

/// Bishops travel along a diagonal. Blocking is checked by the board.
#[inline]
pub fn is_valid_bishop_move(source: Position, target: Position) -> bool {
    Direction::between(source, target).is_some_and(|d| d.is_diagonal())
}
