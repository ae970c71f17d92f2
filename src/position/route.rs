//! Lazily walked squares between two positions.

use crate::position::direction::Direction;
use crate::position::position::Position;

/// Iterator over the squares strictly between a source and a target that
/// share a row, column or diagonal. Yields nothing for any other pair.
#[derive(Debug, Clone)]
pub struct Route {
    next: Option<Position>,
    target: Position,
    direction: Option<Direction>,
}

impl Route {
    pub fn new(source: Position, target: Position) -> Route {
        let direction = Direction::between(source, target);
        let next = direction.and_then(|d| source.step(d));
        Route {
            next,
            target,
            direction,
        }
    }
}

impl Iterator for Route {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let current = self.next?;
        if current == self.target {
            self.next = None;
            return None;
        }
        self.next = self.direction.and_then(|d| current.step(d));
        Some(current)
    }
}
