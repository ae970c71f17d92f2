//! Random-move player.
//!
//! Selects uniformly from the legal moves of the side to move and is used for
//! self-play in the console, smoke testing, and benchmarks.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::Board;
use crate::position::position::Position;

/// Picks one of the legal moves at random.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// A player with a reproducible move sequence when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        debug!("random player seeded with {seed}");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `None` when the side to move has no legal move or the game is over.
    pub fn choose_move(&mut self, board: &Board) -> Option<(Position, Position)> {
        let legal_moves = board.legal_moves();
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(None)
    }
}
