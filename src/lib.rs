//! Strictly Minimax - optimal tic-tac-toe by exhaustive game-tree search
//!
//! Given any board, the engine works out whose turn it is, which moves are
//! legal, and which move guarantees the best result against a perfect
//! opponent.
//!
//! # Architecture
//!
//! - **Board/State**: board values, turn inference, legal moves, move application
//! - **Rules**: winner detection, terminal test, utility
//! - **Search**: minimax with mutually recursive max/min value functions
//! - **Self-play**: drives both sides with minimax until the game ends
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, Board, minimax, result};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let board: Board = "XX./OO./...".parse()?;
//! let action = minimax(&board).ok_or("game over")?;
//! assert_eq!(action, Action::new(0, 2));
//! let next = result(&board, action)?;
//! assert_eq!(strictly_minimax::utility(&next), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod report;
mod selfplay;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Board analysis
pub use report::MoveReport;

// Crate-level exports - Self-play
pub use selfplay::{GameRecord, play_game, play_out};

// Crate-level exports - Game types and operations (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, BoardParseError, Cell, InvalidActionError, InvalidActionReason, Outcome,
    Player, Utility, actions, game_value, initial_state, is_draw, is_full, max_value, min_value,
    minimax, minimax_with_rng, player, result, terminal, utility, winner,
};
