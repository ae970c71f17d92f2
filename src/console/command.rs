//! Console command parsing.

use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::position::position::Position;

pub const HELP_TEXT: &str = "\
commands:
  start              start a new game
  move <src> <dst>   move a piece, e.g. `move e2 e4`
  moves <src>        list the squares the piece on <src> can reach
  auto               let the random player move for the side to move
  status             show both scores
  save               write the game to the save file
  help               show this text
  end                leave the console";

/// One parsed console line. See `HELP_TEXT` for the accepted syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Move(Position, Position),
    Moves(Position),
    Auto,
    Status,
    Save,
    Help,
    End,
}

impl FromStr for Command {
    type Err = ChessErrors;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let unknown = || ChessErrors::UnknownCommand(line.trim().to_owned());

        let Some((keyword, args)) = words.split_first() else {
            return Err(unknown());
        };

        match (keyword.to_ascii_lowercase().as_str(), args) {
            ("start", []) => Ok(Command::Start),
            ("move", [source, target]) => Ok(Command::Move(source.parse()?, target.parse()?)),
            ("moves", [source]) => Ok(Command::Moves(source.parse()?)),
            ("auto", []) => Ok(Command::Auto),
            ("status", []) => Ok(Command::Status),
            ("save", []) => Ok(Command::Save),
            ("help", []) => Ok(Command::Help),
            ("end" | "quit" | "exit", []) => Ok(Command::End),
            _ => Err(unknown()),
        }
    }
}
