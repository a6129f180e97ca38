//! Core domain types for tic-tac-toe.

use super::action::Action;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side of the board; which one moves next is derived from the mark counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// Score of a finished game from X's point of view: 1, 0 or -1.
pub type Utility = i32;

/// Result of scanning the board for three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// A player holds a complete line.
    #[display("{} wins", _0)]
    Winner(Player),
    /// No line is complete.
    #[display("no winner")]
    NoWinner,
}

impl Outcome {
    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::NoWinner => None,
        }
    }
}

impl From<Option<Player>> for Outcome {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Outcome::NoWinner, Outcome::Winner)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain `Copy` values. Making a move produces a new board, so a
/// caller's board is never altered behind its back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns a copy of this board with `(row, col)` set to `cell`.
    ///
    /// Returns `None` when the coordinates are out of range.
    pub fn with(&self, row: usize, col: usize, cell: Cell) -> Option<Self> {
        let mut next = *self;
        *next.cells.get_mut(row)?.get_mut(col)? = cell;
        Some(next)
    }

    /// Checks if a cell is empty. Out-of-range coordinates are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Returns a copy with `mark` placed at `action`.
    ///
    /// `action` must be in bounds; callers take it from the legal-move set.
    pub(crate) fn place(mut self, action: Action, mark: Player) -> Self {
        self.cells[action.row][action.col] = Cell::Occupied(mark);
        self
    }

    /// Counts the cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|cell| *cell == Cell::Occupied(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing the textual board format.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(#[error(not(source))] char),
    /// The input did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells written as `X`, `O`, `.` or `_`.
    ///
    /// Whitespace, `|` and `/` are ignored so `"XO./.X./..O"` and the
    /// `Display` output both parse.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let cell = match c.to_ascii_uppercase() {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                '.' | '_' => Cell::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / 3][i % 3] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().all(|c| c == Cell::Empty));
        assert_eq!(board.cells().count(), 9);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(1, 1, Cell::Occupied(Player::X)).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(1, 1), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_with_out_of_range() {
        assert!(Board::new().with(3, 0, Cell::Occupied(Player::O)).is_none());
        assert!(Board::new().with(0, 3, Cell::Occupied(Player::O)).is_none());
        assert!(!Board::new().is_empty(0, 3));
    }

    #[test]
    fn test_display_and_parse_agree() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let board: Board = "x o _ | _ _ _ | _ _ _".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(0, 1), Some(Cell::Occupied(Player::O)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('?'))
        );
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(3))
        );
    }

    #[test]
    fn test_opponent_swaps_sides() {
        for player in [Player::X, Player::O] {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_outcome_from_option() {
        assert_eq!(Outcome::from(Some(Player::O)), Outcome::Winner(Player::O));
        assert_eq!(Outcome::from(None), Outcome::NoWinner);
        assert_eq!(Outcome::Winner(Player::X).to_string(), "X wins");
        assert_eq!(Outcome::Winner(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::NoWinner.winner(), None);
    }
}
