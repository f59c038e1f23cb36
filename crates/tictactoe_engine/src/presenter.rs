//! Seam between the engine and whatever draws it.
//!
//! A front end turns its raw input into [`Intent`]s, hands them to
//! [`GameEngine::dispatch`](crate::GameEngine::dispatch), and renders the
//! [`GameView`] snapshot through a [`Presenter`]. Nothing in the engine
//! knows how the view is drawn.

use crate::error::ParseIntentError;
use crate::position::Position;
use crate::score::ScoreTally;
use crate::types::{Cell, GameState, GameStatus, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An input event forwarded by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Place the current player's mark at a board index (0-8).
    Move(usize),
    /// Clear the board, keep the score.
    ResetRound,
    /// Clear the board and the score.
    ResetMatch,
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    /// Parses `"0"`..`"8"` as moves, `"reset"` and `"new"` as resets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Ok(Intent::Move(index));
        }
        match trimmed.to_lowercase().as_str() {
            "r" | "reset" => Ok(Intent::ResetRound),
            "n" | "new" => Ok(Intent::ResetMatch),
            _ => Err(ParseIntentError {
                input: s.to_string(),
            }),
        }
    }
}

/// Render state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Mark in the cell, if any.
    pub mark: Option<Player>,
    /// Whether a click on this cell would be accepted.
    pub enabled: bool,
    /// Whether the cell belongs to the winning line.
    pub highlighted: bool,
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
    /// Player to move, or the last mover once the round is over.
    pub current_player: Player,
    /// Round status.
    pub status: GameStatus,
    /// One-line status text.
    pub message: String,
    /// Running score.
    pub scores: ScoreTally,
}

impl GameView {
    /// Builds the view for a state and score.
    pub fn new(state: &GameState, scores: ScoreTally) -> Self {
        let status = *state.status();
        let in_progress = !status.is_terminal();
        let cells = Position::ALL.map(|pos| {
            let cell = state.board().get(pos);
            CellView {
                mark: cell.player(),
                enabled: in_progress && cell == Cell::Empty,
                highlighted: matches!(status, GameStatus::Won(_, line) if line.contains(pos)),
            }
        });
        let message = match status.outcome() {
            Some(outcome) => outcome.to_string(),
            None => format!("Player {}'s Turn", state.current_player()),
        };

        Self {
            cells,
            current_player: state.current_player(),
            status,
            message,
            scores,
        }
    }

    /// Cell at a position.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

/// Something that can draw a [`GameView`].
pub trait Presenter {
    /// Failure while drawing.
    type Error;

    /// Draws the view.
    fn present(&mut self, view: &GameView) -> Result<(), Self::Error>;
}
