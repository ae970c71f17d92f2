//! Board squares and the geometry between them.
//!
//! A `Position` is an immutable `(column, row)` pair. Positions order by row
//! first and column second, so `a1 < b1 < ... < h1 < a2 < ... < h8`, which is
//! also the order of `Position::index` and of `Position::ALL`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::position::column::Column;
use crate::position::direction::Direction;
use crate::position::route::Route;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    // Field order matters: the derived ordering is row-major.
    rank: u8,
    file: u8,
}

impl Position {
    /// Every square in ascending order, `a1` first and `h8` last.
    pub const ALL: [Position; SQUARE_COUNT] = all_positions();

    /// Builds a square from 1-based coordinates, `(1, 1) == a1`, `(8, 8) == h8`.
    pub fn new(column: u8, row: u8) -> Result<Position, ChessErrors> {
        Position::from_file_rank(column as i32 - 1, row as i32 - 1)
    }

    /// Builds a square from zero-based file and rank indices.
    pub fn from_file_rank(file: i32, rank: i32) -> Result<Position, ChessErrors> {
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return Err(ChessErrors::InvalidPosition {
                column: file + 1,
                row: rank + 1,
            });
        }
        Ok(Position {
            rank: rank as u8,
            file: file as u8,
        })
    }

    pub fn at(column: Column, row: u8) -> Result<Position, ChessErrors> {
        Position::new(column.index() + 1, row)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Zero-based file index.
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Zero-based rank index.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// 1-based row number as printed on the board.
    #[inline]
    pub const fn row(self) -> u8 {
        self.rank + 1
    }

    pub fn column(self) -> Column {
        Column::ALL[self.file as usize]
    }

    #[inline]
    pub fn is_column(self, column: Column) -> bool {
        self.file == column.index()
    }

    /// Shifts the square by a file and rank offset.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Result<Position, ChessErrors> {
        Position::from_file_rank(
            self.file as i32 + d_file as i32,
            self.rank as i32 + d_rank as i32,
        )
    }

    /// One step in `direction`, or `None` at the board edge.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (d_file, d_rank) = direction.delta();
        self.offset(d_file, d_rank).ok()
    }

    /// Counts steps from `self` along `direction`. The walk ends after landing
    /// on `bound`, or when the next step would leave the board.
    pub fn max_distance(self, direction: Direction, bound: Position) -> usize {
        let mut current = self;
        let mut distance = 0;
        while let Some(next) = current.step(direction) {
            distance += 1;
            if next == bound {
                break;
            }
            current = next;
        }
        distance
    }

    /// Squares strictly between `self` and `target`, ordered from `self`.
    ///
    /// Empty for adjacent squares and for pairs that share no row, column or
    /// diagonal. Whether such a pair is a legal move is decided by the piece.
    pub fn route_between(self, target: Position) -> Route {
        Route::new(self, target)
    }

    /// Absolute file and rank distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Position) -> (u8, u8) {
        (self.file.abs_diff(other.file), self.rank.abs_diff(other.rank))
    }
}

const fn all_positions() -> [Position; SQUARE_COUNT] {
    let mut table = [Position { rank: 0, file: 0 }; SQUARE_COUNT];
    let mut sq = 0usize;

    while sq < SQUARE_COUNT {
        table[sq] = Position {
            rank: (sq / 8) as u8,
            file: (sq % 8) as u8,
        };
        sq += 1;
    }

    table
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column(), self.row())
    }
}

impl FromStr for Position {
    type Err = ChessErrors;

    /// Parses long algebraic square names such as `"e4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessErrors::InvalidAlgebraicString(s.to_owned()));
        };
        let column =
            Column::from_char(file).ok_or_else(|| ChessErrors::InvalidAlgebraicString(s.to_owned()))?;
        let row = rank
            .to_digit(10)
            .ok_or_else(|| ChessErrors::InvalidAlgebraicString(s.to_owned()))?;
        Position::at(column, row as u8)
    }
}

impl TryFrom<String> for Position {
    type Error = ChessErrors;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_equality() -> Result<(), ChessErrors> {
        let a8 = Position::new(1, 8)?;
        assert_eq!(a8, Position::new(1, 8)?);
        assert_eq!(a8, "a8".parse()?);
        assert_eq!(a8.column(), Column::A);
        assert_eq!(a8.row(), 8);
        Ok(())
    }

    #[test]
    fn off_board_coordinates_are_rejected() {
        assert_eq!(
            Position::new(9, 1),
            Err(ChessErrors::InvalidPosition { column: 9, row: 1 })
        );
        assert!(Position::new(0, 4).is_err());
        assert!(Position::new(3, 0).is_err());
        assert!(matches!(
            "i1".parse::<Position>(),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
        assert!("a9".parse::<Position>().is_err());
        assert!("a10".parse::<Position>().is_err());
    }

    #[test]
    fn step_moves_one_square() -> Result<(), ChessErrors> {
        let a1 = Position::new(1, 1)?;
        assert_eq!(a1.step(Direction::Up), Some(Position::new(1, 2)?));
        assert_eq!(a1.step(Direction::Down), None);
        assert_eq!(a1.step(Direction::UpRight), Some("b2".parse()?));
        Ok(())
    }

    #[test]
    fn max_distance_up_to_bound() -> Result<(), ChessErrors> {
        let start = Position::new(1, 1)?;
        let end = Position::new(1, 5)?;
        assert_eq!(start.max_distance(Direction::Up, end), 4);
        Ok(())
    }

    #[test]
    fn max_distance_down_stops_at_edge() -> Result<(), ChessErrors> {
        let start = Position::new(8, 5)?;
        let end = Position::new(1, 5)?;
        assert_eq!(start.max_distance(Direction::Down, end), 4);
        Ok(())
    }

    #[test]
    fn max_distance_down_left_clamps_to_board() -> Result<(), ChessErrors> {
        let start = Position::new(7, 8)?;
        let end = Position::new(1, 5)?;
        assert_eq!(start.max_distance(Direction::DownLeft, end), 6);
        Ok(())
    }

    #[test]
    fn max_distance_from_edge_is_zero() -> Result<(), ChessErrors> {
        let h8: Position = "h8".parse()?;
        assert_eq!(h8.max_distance(Direction::UpRight, "a1".parse()?), 0);
        assert_eq!(h8.max_distance(Direction::Left, "d8".parse()?), 4);
        Ok(())
    }

    #[test]
    fn ordering_is_row_major() -> Result<(), ChessErrors> {
        assert!(Position::new(8, 1)? < Position::new(1, 2)?);
        for (i, sq) in Position::ALL.iter().enumerate() {
            assert_eq!(sq.index(), i);
        }
        assert!(Position::ALL.windows(2).all(|w| w[0] < w[1]));
        Ok(())
    }

    #[test]
    fn is_column_matches_file() -> Result<(), ChessErrors> {
        let c5: Position = "c5".parse()?;
        assert!(c5.is_column(Column::C));
        assert!(!c5.is_column(Column::D));
        Ok(())
    }
}
