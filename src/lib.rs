//! Crate root module declarations for the chess referee.
//!
//! The core is the board state machine (`board`), built on square geometry
//! (`position`) and per-kind piece rules (`pieces`, `moves`). Save games,
//! configuration, rendering, the random player and the console session are
//! thin layers over `Board`.

pub mod chess_errors;
pub mod config;

pub mod position {
    pub mod column;
    pub mod direction;
    pub mod position;
    pub mod route;
}

pub mod pieces {
    pub mod color;
    pub mod piece;
    pub mod piece_kind;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod board {
    pub mod board;
    pub mod board_factory;
    pub mod saved_game;
    pub mod scoring;
}

pub mod players {
    pub mod random_player;
}

pub mod console {
    pub mod command;
    pub mod session;
}

pub mod utils {
    pub mod render_board;
}
