use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{info, warn};

use chess_referee::board::board::Board;
use chess_referee::board::saved_game::SavedGame;
use chess_referee::chess_errors::ChessErrors;
use chess_referee::config::{GameConfig, CONFIG_PATH_ENV, LOG_LEVEL_ENV};
use chess_referee::console::command::HELP_TEXT;
use chess_referee::console::session::{ConsoleSession, Reply};
use chess_referee::pieces::piece::Color;
use chess_referee::players::random_player::RandomPlayer;
use chess_referee::utils::render_board::render_board;

mod cli;

fn main() -> Result<(), ChessErrors> {
    let cli = cli::Cli::parse();
    let cfg_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
    let cfg = GameConfig::load(cfg_path.as_deref())?;

    let env = Env::default().filter_or(LOG_LEVEL_ENV, cfg.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Some(cli::Commands::Play { resume, seed }) => play(cfg, resume, seed),
        Some(cli::Commands::Show { path }) => show(&path.unwrap_or(cfg.save_path)),
        Some(cli::Commands::Auto { plies, seed }) => auto(plies, seed),
        None => {
            cli::Cli::command()
                .print_help()
                .map_err(|e| ChessErrors::ConsoleIo(e.to_string()))?;
            Ok(())
        }
    }
}

fn play(cfg: GameConfig, resume: bool, seed: Option<u64>) -> Result<(), ChessErrors> {
    let player = RandomPlayer::new(seed);
    let mut session = if resume {
        ConsoleSession::resume(cfg, player)?
    } else {
        ConsoleSession::new(Board::new(), cfg, player)
    };

    println!("{HELP_TEXT}\n");
    println!("{}", render_board(session.board()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| ChessErrors::ConsoleIo(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        match session.handle_line(&line) {
            Ok(Reply::Continue(text)) => println!("{text}"),
            Ok(Reply::Quit(text)) => {
                println!("{text}");
                break;
            }
            Err(e) => {
                warn!("rejected {:?}: {e}", line.trim());
                println!("{e}");
            }
        }
        stdout.flush().ok();
    }
    Ok(())
}

fn show(path: &std::path::Path) -> Result<(), ChessErrors> {
    let board = SavedGame::load_from_path(path)?.restore();
    println!("{}", render_board(&board));
    println!(
        "{}: {} / {}: {}",
        Color::White,
        board.calculate_score(Color::White),
        Color::Black,
        board.calculate_score(Color::Black)
    );
    println!("{} to move", board.turn());
    Ok(())
}

fn auto(plies: u32, seed: Option<u64>) -> Result<(), ChessErrors> {
    let mut board = Board::new();
    let mut player = RandomPlayer::new(seed);

    let mut played = 0u32;
    while played < plies {
        let Some((source, target)) = player.choose_move(&board) else {
            break;
        };
        board.move_piece(source, target)?;
        played += 1;
        println!("{played}. {source} {target}");
    }

    println!("{}", render_board(&board));
    if board.is_game_over() {
        println!("{} captured the king after {played} plies", board.turn().opposite());
    } else {
        info!("stopped after {played} plies without a capture of a king");
        println!("no king captured after {played} plies");
    }
    Ok(())
}
