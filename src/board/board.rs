//! Board and game state.
//!
//! `Board` owns the square→piece mapping and the side to move. The mapping is
//! a fixed `[Piece; 64]` array indexed by `Position::index`, so every square
//! always has exactly one occupant (`Piece::Blank` for empty squares).
//!
//! The game ends when the number of kings on the board is not exactly two,
//! i.e. once a king has been captured. There is no check detection.

use log::{debug, info};

use crate::board::board_factory::starting_squares;
use crate::board::scoring::{material_score, Score};
use crate::chess_errors::ChessErrors;
use crate::pieces::piece::{Color, Piece, PieceKind};
use crate::position::position::{Position, SQUARE_COUNT};

const KINGS_IN_PLAY: usize = 2;

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Both kings are on the board.
    InProgress,
    /// The king count is no longer two.
    Terminated,
}

/// The 64 squares and the side to move.
///
/// Every accepted move passes through `check_move`, so the board never holds
/// a position reached by an illegal move. The game ends once a king is taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    squares: [Piece; SQUARE_COUNT],
    turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            squares: starting_squares(),
            turn: Color::White,
        }
    }

    /// A board with every square blank, White to move.
    pub fn empty() -> Self {
        Self {
            squares: [Piece::Blank; SQUARE_COUNT],
            turn: Color::White,
        }
    }

    /// Overlays a saved square→piece mapping onto the board.
    ///
    /// Squares absent from `saved` keep their current occupant. The side to
    /// move becomes the opposite of `last_turn`, the last side that moved;
    /// when unknown it is taken to be Black, so White moves next.
    pub fn recover_board<I>(&mut self, saved: I, last_turn: Option<Color>)
    where
        I: IntoIterator<Item = (Position, Piece)>,
    {
        let mut recovered = 0usize;
        for (position, piece) in saved {
            self.squares[position.index()] = piece;
            recovered += 1;
        }
        self.turn = last_turn.unwrap_or(Color::Black).opposite();
        info!("recovered {} squares, {} to move", recovered, self.turn);
    }

    /// All 64 occupants in ascending square order (`a1`, `b1`, ..., `h8`).
    pub fn show_board(&self) -> Vec<Piece> {
        self.squares.to_vec()
    }

    /// `(square, piece)` pairs in ascending square order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + Clone + '_ {
        Position::ALL.into_iter().zip(self.squares.iter().copied())
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Piece {
        self.squares[position.index()]
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Terminated
        } else {
            GameStatus::InProgress
        }
    }

    /// True once the board no longer holds exactly two kings.
    pub fn is_game_over(&self) -> bool {
        let kings = self
            .squares
            .iter()
            .filter(|piece| piece.is(PieceKind::King))
            .count();
        kings != KINGS_IN_PLAY
    }

    /// Runs every rule `move_piece` enforces without touching the board.
    pub fn check_move(&self, source: Position, target: Position) -> Result<(), ChessErrors> {
        if self.is_game_over() {
            return Err(ChessErrors::GameOver);
        }

        let source_piece = self.piece_at(source);
        let target_piece = self.piece_at(target);

        source_piece.check_same_color(self.turn)?;
        if !source_piece.validate_move(target_piece, source, target) {
            return Err(ChessErrors::IllegalMove {
                piece: source_piece,
                source,
                target,
            });
        }

        if !source_piece.is(PieceKind::Knight) {
            if let Some(blocker) = source
                .route_between(target)
                .find(|&square| !self.piece_at(square).is_blank())
            {
                return Err(ChessErrors::BlockedRoute {
                    source,
                    target,
                    blocker,
                });
            }
        }

        Ok(())
    }

    /// Moves the piece on `source` to `target`, capturing whatever stood there,
    /// and passes the turn. A rejected move leaves the board unchanged.
    pub fn move_piece(&mut self, source: Position, target: Position) -> Result<(), ChessErrors> {
        self.check_move(source, target)?;

        let moving = self.piece_at(source);
        let captured = self.piece_at(target);
        self.squares[source.index()] = Piece::Blank;
        self.squares[target.index()] = moving;
        self.turn = self.turn.opposite();

        debug!("{moving} {source} -> {target}, replaced {captured}");
        if captured.is(PieceKind::King) {
            info!("{captured} captured on {target}, game over");
        }
        Ok(())
    }

    /// Material score of `color` with the doubled pawn penalty applied.
    pub fn calculate_score(&self, color: Color) -> Score {
        material_score(self.iter(), color)
    }

    /// Material score of the side to move.
    pub fn calculate_current_score(&self) -> Score {
        self.calculate_score(self.turn)
    }

    /// Squares the piece on `source` may move to right now.
    pub fn movable_positions(&self, source: Position) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&target| self.check_move(source, target).is_ok())
            .collect()
    }

    /// Every `(source, target)` pair the side to move may play.
    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.iter()
            .filter(|(_, piece)| piece.is_owned_by(self.turn))
            .flat_map(|(source, _)| {
                self.movable_positions(source)
                    .into_iter()
                    .map(move |target| (source, target))
            })
            .collect()
    }
}
