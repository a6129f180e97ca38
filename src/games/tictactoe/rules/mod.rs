//! Game rules for tic-tac-toe.
//!
//! Pure functions that judge a board: who won, whether play is over, and
//! what the final position is worth.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, terminal, utility};
pub use win::winner;
