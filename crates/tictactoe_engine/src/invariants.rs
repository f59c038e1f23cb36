//! Invariants of a round.
//!
//! Logical properties that must hold after every move. The engine
//! asserts them in debug builds; they are also testable on their own
//! against hand-built states.

use crate::rules::{WINNING_LINES, check_winner, is_draw, is_full};
use crate::types::{GameState, GameStatus, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X moves first, so X has as many marks as O or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// While the round runs, the mover is X on even move counts and O on odd.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        if state.status().is_terminal() {
            return true;
        }
        let expected = if state.board().moves_played() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// The recorded status agrees with what the board shows.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::InProgress => check_winner(board).is_none() && !is_full(board),
            GameStatus::Won(player, line) => {
                WINNING_LINES.contains(line) && line.is_held_by(board, *player)
            }
            GameStatus::Draw => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (
    MarkBalanceInvariant,
    TurnConsistentInvariant,
    StatusConsistentInvariant,
);

/// Checks every round invariant against the state.
pub fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    RoundInvariants::check_all(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Cell;

    #[test]
    fn test_fresh_state_holds() {
        assert!(check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_detects_unbalanced_marks() {
        let mut state = GameState::new();
        state
            .board_mut()
            .set(Position::TopLeft, Cell::Occupied(Player::O));

        let violations = check_all(&state).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&MarkBalanceInvariant::description()));
        assert!(descriptions.contains(&TurnConsistentInvariant::description()));
    }

    #[test]
    fn test_detects_missed_win() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state.board_mut().set(pos, Cell::Occupied(Player::X));
        }
        for pos in [Position::Center, Position::BottomLeft] {
            state.board_mut().set(pos, Cell::Occupied(Player::O));
        }

        assert!(!StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_terminal_state_skips_turn_check() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state.board_mut().set(pos, Cell::Occupied(Player::X));
        }
        for pos in [Position::Center, Position::BottomLeft] {
            state.board_mut().set(pos, Cell::Occupied(Player::O));
        }
        let (player, line) = check_winner(state.board()).expect("winner");
        state.set_status(GameStatus::Won(player, line));

        assert!(check_all(&state).is_ok());
    }

    fn fill(state: &mut GameState, xs: [Position; 5], os: [Position; 4]) {
        for pos in xs {
            state.board_mut().set(pos, Cell::Occupied(Player::X));
        }
        for pos in os {
            state.board_mut().set(pos, Cell::Occupied(Player::O));
        }
    }

    #[test]
    fn test_draw_status_requires_no_line() {
        use Position::*;

        // X O X / X O O / O X X: full, nobody holds a line
        let mut drawn = GameState::new();
        fill(
            &mut drawn,
            [TopLeft, TopRight, MiddleLeft, BottomCenter, BottomRight],
            [TopCenter, Center, MiddleRight, BottomLeft],
        );
        drawn.set_status(GameStatus::Draw);
        assert!(StatusConsistentInvariant::holds(&drawn));

        // X X X / O O X / X O O: full, but X holds the top row
        let mut won = GameState::new();
        fill(
            &mut won,
            [TopLeft, TopCenter, TopRight, MiddleRight, BottomLeft],
            [MiddleLeft, Center, BottomCenter, BottomRight],
        );
        won.set_status(GameStatus::Draw);
        assert!(!StatusConsistentInvariant::holds(&won));
    }

    #[test]
    fn test_full_board_cannot_be_in_progress() {
        use Position::*;

        let mut state = GameState::new();
        fill(
            &mut state,
            [TopLeft, TopRight, MiddleLeft, BottomCenter, BottomRight],
            [TopCenter, Center, MiddleRight, BottomLeft],
        );
        assert!(!StatusConsistentInvariant::holds(&state));
    }
}
