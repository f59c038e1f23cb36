//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules::WinningLine;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
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
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Places a cell value at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.moves_played() == 9
    }

    /// Number of occupied cells.
    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of cells holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

/// Current status of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended with a completed line.
    Won(Player, WinningLine),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true once the round has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the outcome of a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player, _) => Some(Outcome::Winner(*player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the round.
    Winner(Player),
    /// Round ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} Wins!", player),
            Outcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// Complete round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates a fresh round: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    ///
    /// After the round ends this stays on the player who moved last.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub(crate) fn place(&mut self, pos: Position) {
        self.board.set(pos, Cell::Occupied(self.current_player));
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_board_counts() {
        let mut board = Board::new();
        assert_eq!(board.moves_played(), 0);
        board.set(Position::Center, Cell::Occupied(Player::X));
        board.set(Position::TopLeft, Cell::Occupied(Player::O));
        board.set(Position::BottomRight, Cell::Occupied(Player::X));
        assert_eq!(board.moves_played(), 3);
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert!(!board.is_full());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Winner(Player::O).to_string(), "Player O Wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a Draw!");
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Winner(Player::X).winner(), Some(Player::X));
    }
}
