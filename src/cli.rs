use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chess_referee", version, about = "Two-player chess rules referee")]
pub struct Cli {
    /// YAML configuration file. Falls back to CHESS_REFEREE_CONFIG_PATH.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play an interactive game on the console.
    Play {
        /// Continue the game stored at the configured save path.
        #[arg(long)]
        resume: bool,
        /// Seed for the `auto` command's random player.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a saved game with both scores.
    Show {
        /// Save file to read instead of the configured one.
        path: Option<PathBuf>,
    },
    /// Let two random players play until a king falls or the ply limit is hit.
    Auto {
        #[arg(long, default_value_t = 200)]
        plies: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
}
