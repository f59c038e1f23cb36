//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win the round when one player holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the position lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns true if the player holds every cell of this line.
    pub fn is_held_by(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|pos| board.get(*pos) == Cell::Occupied(player))
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// The 8 lines of a 3x3 board: rows, columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first line, in [`WINNING_LINES`] order, held entirely by `player`.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.is_held_by(board, player))
}

/// Checks if there is a winner on the board.
///
/// Returns the player and the line they completed.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    for line in WINNING_LINES {
        let [a, b, c] = line.positions();
        let cell = board.get(a);
        if let Cell::Occupied(player) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}
