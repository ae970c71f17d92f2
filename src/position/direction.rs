//! The eight unit directions a sliding piece can travel.

use crate::position::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

impl Direction {
    /// `(d_file, d_rank)` of a single step. `Up` points from row 1 toward row 8.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (d_file, d_rank) = self.delta();
        d_file != 0 && d_rank != 0
    }

    /// Direction of travel from `source` to `target` when both share a row,
    /// a column or a diagonal. `None` for unaligned or identical squares.
    pub fn between(source: Position, target: Position) -> Option<Direction> {
        let d_file = target.file() as i8 - source.file() as i8;
        let d_rank = target.rank() as i8 - source.rank() as i8;

        if d_file == 0 && d_rank == 0 {
            return None;
        }
        if d_file != 0 && d_rank != 0 && d_file.abs() != d_rank.abs() {
            return None;
        }

        let unit = (d_file.signum(), d_rank.signum());
        ALL_DIRECTIONS.into_iter().find(|d| d.delta() == unit)
    }
}
