mod action;
mod rules;
mod search;
mod state;
mod types;

pub use action::{Action, InvalidActionError, InvalidActionReason};
pub use rules::{is_draw, is_full, terminal, utility, winner};
pub use search::{game_value, max_value, min_value, minimax, minimax_with_rng};
pub use state::{actions, initial_state, player, result};
pub use types::{Board, BoardParseError, Cell, Outcome, Player, Utility};
