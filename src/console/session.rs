//! One interactive game driven by console commands.
//!
//! `ConsoleSession` owns the board for the duration of a game and turns each
//! `Command` into the text the front end prints. Rejected moves come back as
//! errors and leave the session usable.

use log::{debug, info, warn};

use crate::board::board::Board;
use crate::board::saved_game::SavedGame;
use crate::chess_errors::ChessErrors;
use crate::config::GameConfig;
use crate::console::command::{Command, HELP_TEXT};
use crate::pieces::piece::Color;
use crate::players::random_player::RandomPlayer;
use crate::utils::render_board::render_board;

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command.
    Continue(String),
    /// Print the text and stop.
    Quit(String),
}

/// One game on the console: the board, the session settings and the
/// random player used by `auto`.
pub struct ConsoleSession {
    board: Board,
    config: GameConfig,
    player: RandomPlayer,
}

impl ConsoleSession {
    pub fn new(board: Board, config: GameConfig, player: RandomPlayer) -> Self {
        Self {
            board,
            config,
            player,
        }
    }

    /// Session resumed from `config.save_path`.
    pub fn resume(config: GameConfig, player: RandomPlayer) -> Result<Self, ChessErrors> {
        let board = SavedGame::load_from_path(&config.save_path)?.restore();
        Ok(Self::new(board, config, player))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Parses and executes one console line.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, ChessErrors> {
        let command: Command = line.parse()?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, ChessErrors> {
        debug!("executing {command:?}");
        match command {
            Command::Start => {
                self.board = Board::new();
                info!("new game started");
                Ok(Reply::Continue(self.describe()))
            }
            Command::Move(source, target) => {
                self.board.move_piece(source, target)?;
                Ok(self.after_move())
            }
            Command::Moves(source) => {
                let targets: Vec<String> = self
                    .board
                    .movable_positions(source)
                    .iter()
                    .map(|p| p.to_string())
                    .collect();
                if targets.is_empty() {
                    Ok(Reply::Continue(format!("{source}: no moves")))
                } else {
                    Ok(Reply::Continue(format!("{source}: {}", targets.join(" "))))
                }
            }
            Command::Auto => {
                if self.board.is_game_over() {
                    return Err(ChessErrors::GameOver);
                }
                let Some((source, target)) = self.player.choose_move(&self.board) else {
                    return Ok(Reply::Continue(format!(
                        "{} has no legal move",
                        self.board.turn()
                    )));
                };
                self.board.move_piece(source, target)?;
                let reply = self.after_move();
                Ok(prefix_reply(format!("played {source} {target}\n"), reply))
            }
            Command::Status => Ok(Reply::Continue(self.scores())),
            Command::Save => {
                SavedGame::capture(&self.board).save_to_path(&self.config.save_path)?;
                Ok(Reply::Continue(format!(
                    "saved to {}",
                    self.config.save_path.display()
                )))
            }
            Command::Help => Ok(Reply::Continue(HELP_TEXT.to_owned())),
            Command::End => Ok(Reply::Quit(self.scores())),
        }
    }

    /// Reply for a move that has already been applied. An autosave failure
    /// is reported in the text, since the move itself stands.
    fn after_move(&mut self) -> Reply {
        let mut out = render_board(&self.board);
        if self.config.autosave {
            if let Err(e) = SavedGame::capture(&self.board).save_to_path(&self.config.save_path) {
                warn!("autosave failed: {e}");
                out = format!("autosave failed: {e}\n{out}");
            }
        }

        if self.config.show_scores {
            out.push('\n');
            out.push_str(&self.scores());
        }

        if self.board.is_game_over() {
            let winner = self.board.turn().opposite();
            out.push_str(&format!("\n{winner} captured the king, game over"));
            return Reply::Quit(out);
        }

        out.push_str(&format!("\n{} to move", self.board.turn()));
        Reply::Continue(out)
    }

    fn describe(&self) -> String {
        format!("{}\n{} to move", render_board(&self.board), self.board.turn())
    }

    fn scores(&self) -> String {
        format!(
            "{}: {} / {}: {}",
            Color::White,
            self.board.calculate_score(Color::White),
            Color::Black,
            self.board.calculate_score(Color::Black)
        )
    }
}

fn prefix_reply(prefix: String, reply: Reply) -> Reply {
    match reply {
        Reply::Continue(text) => Reply::Continue(prefix + &text),
        Reply::Quit(text) => Reply::Quit(prefix + &text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::pieces::piece::Piece;
    use crate::position::position::Position;

    fn session() -> ConsoleSession {
        ConsoleSession::new(Board::new(), GameConfig::default(), RandomPlayer::new(Some(11)))
    }

    #[test]
    fn status_reports_both_scores() -> Result<(), ChessErrors> {
        let reply = session().handle_line("status")?;
        assert_eq!(reply, Reply::Continue("WHITE: 38 / BLACK: 38".to_owned()));
        Ok(())
    }

    #[test]
    fn accepted_move_shows_board_and_next_side() -> Result<(), ChessErrors> {
        let mut session = session();
        let Reply::Continue(text) = session.handle_line("move e2 e4")? else {
            panic!("game should continue");
        };
        assert!(text.contains("BLACK to move"));
        assert_eq!(session.board().turn(), Color::Black);
        Ok(())
    }

    #[test]
    fn rejected_move_keeps_session_usable() -> Result<(), ChessErrors> {
        let mut session = session();
        assert!(matches!(
            session.handle_line("move e7 e5"),
            Err(ChessErrors::WrongTurn { .. })
        ));
        assert!(session.handle_line("move e2 e4").is_ok());
        Ok(())
    }

    #[test]
    fn capturing_the_king_quits() -> Result<(), ChessErrors> {
        let mut board = Board::empty();
        let saved: BTreeMap<Position, Piece> = [
            ("e1", Piece::King(Color::White)),
            ("e8", Piece::King(Color::Black)),
            ("e2", Piece::Queen(Color::White)),
        ]
        .iter()
        .map(|(name, piece)| (name.parse().expect("valid square"), *piece))
        .collect();
        board.recover_board(saved, None);

        let mut session =
            ConsoleSession::new(board, GameConfig::default(), RandomPlayer::new(Some(5)));
        let Reply::Quit(text) = session.handle_line("move e2 e8")? else {
            panic!("game should be over");
        };
        assert!(text.contains("WHITE captured the king"));
        assert_eq!(session.handle_line("auto"), Err(ChessErrors::GameOver));
        Ok(())
    }

    #[test]
    fn moves_lists_reachable_squares() -> Result<(), ChessErrors> {
        let reply = session().handle_line("moves g1")?;
        assert_eq!(reply, Reply::Continue("g1: f3 h3".to_owned()));
        Ok(())
    }

    #[test]
    fn auto_plays_for_the_side_to_move() -> Result<(), ChessErrors> {
        let mut session = session();
        let Reply::Continue(text) = session.handle_line("auto")? else {
            panic!("game should continue");
        };
        assert!(text.starts_with("played "));
        assert_eq!(session.board().turn(), Color::Black);
        Ok(())
    }

    #[test]
    fn start_resets_the_board() -> Result<(), ChessErrors> {
        let mut session = session();
        session.handle_line("move e2 e4")?;
        session.handle_line("start")?;
        assert_eq!(session.board(), &Board::new());
        Ok(())
    }

    #[test]
    fn save_then_resume() -> Result<(), ChessErrors> {
        let config = GameConfig {
            save_path: std::env::temp_dir().join(format!(
                "chess_referee_session_{}.json",
                std::process::id()
            )),
            ..GameConfig::default()
        };
        let mut first = ConsoleSession::new(Board::new(), config.clone(), RandomPlayer::new(Some(2)));
        first.handle_line("move d2 d4")?;
        first.handle_line("save")?;

        let resumed = ConsoleSession::resume(config.clone(), RandomPlayer::new(Some(2)))?;
        let _ = std::fs::remove_file(&config.save_path);
        assert_eq!(resumed.board(), first.board());
        Ok(())
    }

    fn temp_save_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("chess_referee_{name}_{}.json", std::process::id()))
    }

    /// White to move with every piece stuck: the king is walled in by its own
    /// pieces, the knight's targets are all white, and each pawn is blocked
    /// with nothing to capture.
    fn boxed_in_white() -> Board {
        let mut board = Board::empty();
        let saved: BTreeMap<Position, Piece> = [
            ("a1", Piece::King(Color::White)),
            ("b1", Piece::Pawn(Color::White)),
            ("a2", Piece::Pawn(Color::White)),
            ("b2", Piece::Knight(Color::White)),
            ("a4", Piece::Pawn(Color::White)),
            ("c4", Piece::Pawn(Color::White)),
            ("d3", Piece::Pawn(Color::White)),
            ("d1", Piece::Pawn(Color::White)),
            ("a3", Piece::Pawn(Color::Black)),
            ("a5", Piece::Pawn(Color::Black)),
            ("c5", Piece::Pawn(Color::Black)),
            ("d4", Piece::Pawn(Color::Black)),
            ("d2", Piece::Pawn(Color::Black)),
            ("h8", Piece::King(Color::Black)),
        ]
        .iter()
        .map(|(name, piece)| (name.parse().expect("valid square"), *piece))
        .collect();
        board.recover_board(saved, None);
        board
    }

    #[test]
    fn autosave_writes_the_board_after_each_move() -> Result<(), ChessErrors> {
        let config = GameConfig {
            save_path: temp_save_path("autosave"),
            autosave: true,
            ..GameConfig::default()
        };
        let mut session = ConsoleSession::new(Board::new(), config.clone(), RandomPlayer::new(Some(4)));
        session.handle_line("move g1 f3")?;

        let restored = SavedGame::load_from_path(&config.save_path)?.restore();
        let _ = std::fs::remove_file(&config.save_path);
        assert_eq!(&restored, session.board());
        assert_eq!(restored.turn(), Color::Black);
        Ok(())
    }

    #[test]
    fn failed_autosave_still_reports_the_move() -> Result<(), ChessErrors> {
        let config = GameConfig {
            save_path: std::path::PathBuf::from("/nonexistent_chess_referee_dir/game.json"),
            autosave: true,
            ..GameConfig::default()
        };
        let mut session = ConsoleSession::new(Board::new(), config, RandomPlayer::new(Some(4)));
        let Reply::Continue(text) = session.handle_line("move e2 e4")? else {
            panic!("game should continue");
        };
        assert!(text.starts_with("autosave failed: "));
        assert!(text.contains("BLACK to move"));
        assert_eq!(session.board().turn(), Color::Black);
        Ok(())
    }

    #[test]
    fn failed_autosave_keeps_the_game_over_reply() -> Result<(), ChessErrors> {
        let mut board = Board::empty();
        let saved: BTreeMap<Position, Piece> = [
            ("e1", Piece::King(Color::White)),
            ("e8", Piece::King(Color::Black)),
            ("e2", Piece::Rook(Color::White)),
        ]
        .iter()
        .map(|(name, piece)| (name.parse().expect("valid square"), *piece))
        .collect();
        board.recover_board(saved, None);
        let config = GameConfig {
            save_path: std::path::PathBuf::from("/nonexistent_chess_referee_dir/game.json"),
            autosave: true,
            ..GameConfig::default()
        };
        let mut session = ConsoleSession::new(board, config, RandomPlayer::new(Some(4)));
        let Reply::Quit(text) = session.handle_line("move e2 e8")? else {
            panic!("game should be over");
        };
        assert!(text.contains("autosave failed"));
        assert!(text.contains("WHITE captured the king"));
        Ok(())
    }

    #[test]
    fn hidden_scores_are_left_out_of_move_replies() -> Result<(), ChessErrors> {
        let config = GameConfig {
            show_scores: false,
            ..GameConfig::default()
        };
        let mut session = ConsoleSession::new(Board::new(), config, RandomPlayer::new(Some(4)));
        let Reply::Continue(text) = session.handle_line("move e2 e4")? else {
            panic!("game should continue");
        };
        assert!(!text.contains("WHITE: "));
        assert!(!text.contains(" / BLACK: "));
        Ok(())
    }

    #[test]
    fn shown_scores_follow_the_board() -> Result<(), ChessErrors> {
        let Reply::Continue(text) = session().handle_line("move e2 e4")? else {
            panic!("game should continue");
        };
        assert!(text.contains("WHITE: 38 / BLACK: 38"));
        Ok(())
    }

    #[test]
    fn auto_without_a_legal_move_is_not_game_over() -> Result<(), ChessErrors> {
        let board = boxed_in_white();
        assert!(!board.is_game_over());
        assert!(board.legal_moves().is_empty());

        let mut session = ConsoleSession::new(board, GameConfig::default(), RandomPlayer::new(Some(9)));
        assert_eq!(
            session.handle_line("auto")?,
            Reply::Continue("WHITE has no legal move".to_owned())
        );
        assert_eq!(session.board().turn(), Color::White);
        Ok(())
    }

    #[test]
    fn end_quits_with_scores() -> Result<(), ChessErrors> {
        assert!(matches!(session().handle_line("end")?, Reply::Quit(_)));
        Ok(())
    }
}
