//! Save-game snapshots.
//!
//! A `SavedGame` is the persisted shape of a board: every square mapped to its
//! piece identifier, the color of the last side to move and a timestamp.
//! Snapshots are stored as JSON:
//!
//! ```json
//! {"squares":{"a1":"WHITE_ROOK","a2":"WHITE_PAWN","a3":"BLANK",...},
//!  "last_turn":"BLACK","saved_at":"2026-10-19T12:00:00Z"}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::board::board::Board;
use crate::chess_errors::ChessErrors;
use crate::pieces::piece::{Color, Piece};
use crate::position::position::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub squares: BTreeMap<Position, Piece>,
    #[serde(default)]
    pub last_turn: Option<Color>,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

impl SavedGame {
    /// Snapshot of all 64 squares. The last mover is the side not to move.
    pub fn capture(board: &Board) -> SavedGame {
        SavedGame {
            squares: board.iter().collect(),
            last_turn: Some(board.turn().opposite()),
            saved_at: Utc::now(),
        }
    }

    /// A fresh board with this snapshot recovered onto it.
    pub fn restore(&self) -> Board {
        let mut board = Board::new();
        board.recover_board(self.squares.iter().map(|(p, piece)| (*p, *piece)), self.last_turn);
        board
    }

    pub fn to_json(&self) -> Result<String, ChessErrors> {
        serde_json::to_string_pretty(self).map_err(|e| ChessErrors::SaveGameFormat(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<SavedGame, ChessErrors> {
        serde_json::from_str(json).map_err(|e| ChessErrors::SaveGameFormat(e.to_string()))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ChessErrors> {
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| ChessErrors::SaveGameIo(format!("{}: {e}", path.display())))?;
        info!("saved game to {}", path.display());
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<SavedGame, ChessErrors> {
        let json = fs::read_to_string(path)
            .map_err(|e| ChessErrors::SaveGameIo(format!("{}: {e}", path.display())))?;
        let saved = SavedGame::from_json(&json)?;
        info!(
            "loaded game saved at {} from {}",
            saved.saved_at.to_rfc3339(),
            path.display()
        );
        Ok(saved)
    }
}
