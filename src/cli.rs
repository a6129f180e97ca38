//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};

/// Strictly Minimax - optimal tic-tac-toe by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe move selection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = "strictly_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show whose turn it is and the optimal move for a board
    BestMove {
        /// Nine cells in row-major order using X, O and . (e.g. "XX./OO./...")
        board: String,
    },

    /// Play games of optimal play against itself
    SelfPlay {
        /// Number of games to play (overrides the config file)
        #[arg(short, long)]
        games: Option<u32>,

        /// Seed for the random opening move (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },
}
