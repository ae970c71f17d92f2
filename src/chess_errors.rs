//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Board operations,
//! square parsing, save-game handling and the console front end all return
//! `Result<..., ChessErrors>` so callers can match on one enum.
//!
//! Usage guidelines:
//! - Move rejections (`GameOver`, `WrongTurn`, `IllegalMove`, `BlockedRoute`)
//!   never change the board. The caller presents the failure and re-prompts.
//! - Parsing variants (`InvalidPosition`, `InvalidAlgebraicString`,
//!   `InvalidPieceName`, `InvalidColorName`) come from user or file input.
//! - `SaveGameIo`, `SaveGameFormat` and `ConfigError` wrap failures of the
//!   outer persistence and configuration layers, `ConsoleIo` the terminal.

use std::fmt;

use crate::pieces::piece::{Color, Piece};
use crate::position::position::Position;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ChessErrors {
    /// A move was attempted after a king has been captured.
    GameOver,

    /// The acting piece does not belong to the side to move.
    ///
    /// Payload: the side to move, and the color of the piece that was picked
    /// (`None` when the source square is blank).
    WrongTurn {
        expected: Color,
        found: Option<Color>,
    },

    /// The piece-specific geometry or capture rule rejects the move.
    IllegalMove {
        piece: Piece,
        source: Position,
        target: Position,
    },

    /// A sliding piece's route holds a non-blank occupant.
    ///
    /// Payload: the first occupied square between source and target.
    BlockedRoute {
        source: Position,
        target: Position,
        blocker: Position,
    },

    /// A coordinate outside the 8x8 grid. Payload: 1-based (column, row).
    InvalidPosition { column: i32, row: i32 },

    /// A square name such as `"e4"` could not be parsed.
    InvalidAlgebraicString(String),

    /// A persisted piece identifier such as `"WHITE_ROOK"` could not be parsed.
    InvalidPieceName(String),

    /// A color marker other than `WHITE` or `BLACK`.
    InvalidColorName(String),

    /// Reading or writing a save file failed.
    SaveGameIo(String),

    /// A save file was read but its contents are not a valid saved game.
    SaveGameFormat(String),

    /// The configuration file exists but could not be read or parsed.
    ConfigError(String),

    /// A console line did not match any known command.
    UnknownCommand(String),

    /// Reading from or writing to the terminal failed.
    ConsoleIo(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::GameOver => write!(f, "the game is already over"),
            ChessErrors::WrongTurn { expected, found } => match found {
                Some(color) => write!(f, "it is {expected}'s turn, not {color}'s"),
                None => write!(f, "it is {expected}'s turn and the source square is empty"),
            },
            ChessErrors::IllegalMove {
                piece,
                source,
                target,
            } => write!(f, "{piece} cannot move from {source} to {target}"),
            ChessErrors::BlockedRoute {
                source,
                target,
                blocker,
            } => write!(
                f,
                "cannot jump over the piece on {blocker} moving from {source} to {target}"
            ),
            ChessErrors::InvalidPosition { column, row } => {
                write!(f, "({column}, {row}) is not a square on the board")
            }
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid square name: {s:?}"),
            ChessErrors::InvalidPieceName(s) => write!(f, "invalid piece name: {s:?}"),
            ChessErrors::InvalidColorName(s) => write!(f, "invalid color name: {s:?}"),
            ChessErrors::SaveGameIo(s) => write!(f, "save file i/o failed: {s}"),
            ChessErrors::SaveGameFormat(s) => write!(f, "malformed save file: {s}"),
            ChessErrors::ConfigError(s) => write!(f, "configuration error: {s}"),
            ChessErrors::UnknownCommand(s) => write!(f, "unknown command: {s:?}"),
            ChessErrors::ConsoleIo(s) => write!(f, "console i/o failed: {s}"),
        }
    }
}

impl std::error::Error for ChessErrors {}
