//! The piece occupying a square.
//!
//! `Piece` is a tagged variant: each playing kind carries its owner, and
//! `Blank` stands for an empty square. Pieces are plain values; a capture
//! replaces the occupant of a square instead of mutating a piece.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};
use crate::position::position::Position;

pub use crate::pieces::color::Color;
pub use crate::pieces::piece_kind::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Piece {
    King(Color),
    Queen(Color),
    Rook(Color),
    Bishop(Color),
    Knight(Color),
    Pawn(Color),
    #[default]
    Blank,
}

impl Piece {
    /// Builds a piece of `kind` owned by `color`. `PieceKind::Blank` ignores the color.
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        match kind {
            PieceKind::King => Piece::King(color),
            PieceKind::Queen => Piece::Queen(color),
            PieceKind::Rook => Piece::Rook(color),
            PieceKind::Bishop => Piece::Bishop(color),
            PieceKind::Knight => Piece::Knight(color),
            PieceKind::Pawn => Piece::Pawn(color),
            PieceKind::Blank => Piece::Blank,
        }
    }

    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::King(_) => PieceKind::King,
            Piece::Queen(_) => PieceKind::Queen,
            Piece::Rook(_) => PieceKind::Rook,
            Piece::Bishop(_) => PieceKind::Bishop,
            Piece::Knight(_) => PieceKind::Knight,
            Piece::Pawn(_) => PieceKind::Pawn,
            Piece::Blank => PieceKind::Blank,
        }
    }

    /// Owner of the piece, `None` for `Blank`.
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::King(c)
            | Piece::Queen(c)
            | Piece::Rook(c)
            | Piece::Bishop(c)
            | Piece::Knight(c)
            | Piece::Pawn(c) => Some(c),
            Piece::Blank => None,
        }
    }

    #[inline]
    pub fn is(self, kind: PieceKind) -> bool {
        self.kind() == kind
    }

    #[inline]
    pub fn is_blank(self) -> bool {
        matches!(self, Piece::Blank)
    }

    #[inline]
    pub fn is_owned_by(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    #[inline]
    pub fn score(self) -> f64 {
        self.kind().score()
    }

    /// Fails with `WrongTurn` unless the piece belongs to `expected`.
    pub fn check_same_color(self, expected: Color) -> Result<(), ChessErrors> {
        if self.is_owned_by(expected) {
            Ok(())
        } else {
            Err(ChessErrors::WrongTurn {
                expected,
                found: self.color(),
            })
        }
    }

    /// Applies the geometry and capture rule of this piece's kind.
    ///
    /// Sliding pieces only check direction here; whether the route is free
    /// is decided by the board. A target held by a piece of the mover's own
    /// color is never legal, and `Blank` never moves.
    pub fn validate_move(self, occupant: Piece, source: Position, target: Position) -> bool {
        let Some(color) = self.color() else {
            return false;
        };
        if source == target || occupant.is_owned_by(color) {
            return false;
        }

        match self {
            Piece::King(_) => king_moves::is_valid_king_move(source, target),
            Piece::Queen(_) => queen_moves::is_valid_queen_move(source, target),
            Piece::Rook(_) => rook_moves::is_valid_rook_move(source, target),
            Piece::Bishop(_) => bishop_moves::is_valid_bishop_move(source, target),
            Piece::Knight(_) => knight_moves::is_valid_knight_move(source, target),
            Piece::Pawn(c) => pawn_moves::is_valid_pawn_move(c, source, target, occupant),
            Piece::Blank => false,
        }
    }

    /// Persisted identifier such as `WHITE_ROOK` or `BLANK`.
    pub fn name(self) -> String {
        match self.color() {
            Some(color) => format!("{}_{}", color.name(), self.kind().name()),
            None => PieceKind::Blank.name().to_owned(),
        }
    }

    /// Unicode glyph used by the board renderer.
    pub fn symbol(self) -> char {
        match self {
            Piece::King(Color::White) => '♔',
            Piece::Queen(Color::White) => '♕',
            Piece::Rook(Color::White) => '♖',
            Piece::Bishop(Color::White) => '♗',
            Piece::Knight(Color::White) => '♘',
            Piece::Pawn(Color::White) => '♙',
            Piece::King(Color::Black) => '♚',
            Piece::Queen(Color::Black) => '♛',
            Piece::Rook(Color::Black) => '♜',
            Piece::Bishop(Color::Black) => '♝',
            Piece::Knight(Color::Black) => '♞',
            Piece::Pawn(Color::Black) => '♟',
            Piece::Blank => '·',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Piece {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(PieceKind::Blank.name()) {
            return Ok(Piece::Blank);
        }

        let invalid = || ChessErrors::InvalidPieceName(s.to_owned());
        let (color, kind) = s.split_once('_').ok_or_else(invalid)?;
        let color: Color = color.parse().map_err(|_| invalid())?;
        match PieceKind::from_name(kind) {
            Some(PieceKind::Blank) | None => Err(invalid()),
            Some(kind) => Ok(Piece::new(kind, color)),
        }
    }
}

impl TryFrom<String> for Piece {
    type Error = ChessErrors;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Piece> for String {
    fn from(value: Piece) -> Self {
        value.name()
    }
}
