//! Strictly Minimax - command-line driver
//!
//! Analyzes boards and runs optimal self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::{SeedableRng, rngs::StdRng};
use strictly_minimax::{Board, EngineConfig, MoveReport, Player, play_game};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::BestMove { board } => run_best_move(&config, &board, cli.json),
        Command::SelfPlay { games, seed } => {
            run_self_play(config.with_games(games).with_seed(seed), cli.json)
        }
    }
}

/// Builds the opening-move RNG from the configured seed.
fn make_rng(config: &EngineConfig) -> StdRng {
    match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Print the analysis of a single board
#[instrument(skip(config))]
fn run_best_move(config: &EngineConfig, board: &str, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let report = MoveReport::analyze(&board, &mut make_rng(config));
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Play the configured number of self-play games and summarize them
#[instrument(skip(config), fields(games = config.games()))]
fn run_self_play(config: EngineConfig, json: bool) -> Result<()> {
    let mut rng = make_rng(&config);
    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);

    for game in 1..=*config.games() {
        let record = play_game(&mut rng)?;
        if json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("game {}: {}", game, record);
        }
        match record.outcome().winner() {
            Some(Player::X) => x_wins += 1,
            Some(Player::O) => o_wins += 1,
            None => draws += 1,
        }
    }

    info!(x_wins, o_wins, draws, "Self-play complete");
    println!("X wins: {}, O wins: {}, draws: {}", x_wins, o_wins, draws);
    Ok(())
}
