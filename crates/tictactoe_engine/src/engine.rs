//! The game engine: one round in play plus the running score of the match.

use crate::error::InvalidMove;
use crate::invariants::check_all;
use crate::position::Position;
use crate::presenter::{GameView, Intent};
use crate::rules::{WinningLine, find_winning_line, is_full};
use crate::score::ScoreTally;
use crate::types::{GameState, GameStatus, Outcome, Player};
use tracing::{debug, info, instrument};

/// What the engine did with an [`Intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The move was played; carries the resulting status.
    Applied(GameStatus),
    /// The move was refused and nothing changed.
    Ignored(InvalidMove),
    /// The board was cleared, score kept.
    RoundReset,
    /// The board and the score were cleared.
    MatchReset,
}

/// Tic-tac-toe engine.
///
/// Owns the board, whose turn it is, the round status and the score.
/// Callers construct and own it; all mutation goes through its methods.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
    scores: ScoreTally,
    saved_scores: ScoreTally,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move and a zero score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current round state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the running score.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Returns the score as last saved.
    ///
    /// The engine saves after every finished round and every match reset.
    pub fn saved_scores(&self) -> &ScoreTally {
        &self.saved_scores
    }

    /// Places the current player's mark at a board index (0-8).
    ///
    /// Checks for a win first, then for a full board; otherwise the turn
    /// passes to the opponent. A finished round is scored exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the index is off the board, the cell is
    /// taken or the round is over. The engine is left unchanged.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, InvalidMove> {
        if self.state.status().is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        let pos = Position::from_index(index).ok_or(InvalidMove::OutOfRange { index })?;
        self.apply_position(pos)
    }

    /// Places the current player's mark at a position.
    ///
    /// # Errors
    ///
    /// Same as [`apply_move`](Self::apply_move), minus the range check.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_position(&mut self, pos: Position) -> Result<GameStatus, InvalidMove> {
        if self.state.status().is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            return Err(InvalidMove::Occupied(pos));
        }

        let player = self.state.current_player();
        self.state.place(pos);

        if let Some(line) = find_winning_line(self.state.board(), player) {
            self.finish(GameStatus::Won(player, line));
        } else if is_full(self.state.board()) {
            self.finish(GameStatus::Draw);
        } else {
            self.state.pass_turn();
        }

        debug_assert!(
            check_all(&self.state).is_ok(),
            "Round invariants violated after move"
        );

        Ok(*self.state.status())
    }

    fn finish(&mut self, status: GameStatus) {
        self.state.set_status(status);
        if let Some(outcome) = status.outcome() {
            self.scores.record(outcome);
            self.saved_scores = self.scores;
            info!(%outcome, scores = ?self.scores, "Round finished");
        }
    }

    /// Winner of the round, if it has been won.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|o| o.winner())
    }

    /// Line that won the round, if it has been won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.state.status() {
            GameStatus::Won(_, line) => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the round ended in a draw.
    pub fn is_draw(&self) -> bool {
        *self.state.status() == GameStatus::Draw
    }

    /// Returns true once the round has ended.
    pub fn is_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    /// Outcome of the round, once it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.status().outcome()
    }

    /// Empty cells a move may target; none once the round is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.state.board())
        }
    }

    /// Clears the board for a new round. X moves first; the score is kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        info!("Resetting round");
        self.state = GameState::new();
    }

    /// Clears the board and zeroes the score.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.reset_round();
        info!("Resetting match score");
        self.scores.reset();
        self.saved_scores = self.scores;
    }

    /// Routes a front-end intent to the matching operation.
    ///
    /// A refused move is returned as [`Dispatch::Ignored`]; it is never
    /// an error for the front end.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Dispatch {
        match intent {
            Intent::Move(index) => match self.apply_move(index) {
                Ok(status) => Dispatch::Applied(status),
                Err(err) => {
                    debug!(%err, index, "Ignoring invalid move");
                    Dispatch::Ignored(err)
                }
            },
            Intent::ResetRound => {
                self.reset_round();
                Dispatch::RoundReset
            }
            Intent::ResetMatch => {
                self.reset_match();
                Dispatch::MatchReset
            }
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView::new(&self.state, self.scores)
    }
}
