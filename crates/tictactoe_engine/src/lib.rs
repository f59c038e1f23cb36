//! Tic-tac-toe engine - board, turns, win/draw detection and score tally.
//!
//! The engine is a plain owned value with no UI dependency. A front end
//! forwards player input as [`Intent`]s and renders the [`GameView`] it
//! gets back through its own [`Presenter`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index).expect("legal move");
//! }
//!
//! assert_eq!(engine.winner(), Some(Player::X));
//! assert!(matches!(engine.state().status(), GameStatus::Won(Player::X, _)));
//! assert_eq!(*engine.scores().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod invariants;
mod position;
mod presenter;
mod rules;
mod score;
mod types;

// Crate-level exports - Engine
pub use engine::{Dispatch, GameEngine};

// Crate-level exports - Errors
pub use error::{InvalidMove, ParseIntentError};

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, RoundInvariants,
    StatusConsistentInvariant, TurnConsistentInvariant, check_all,
};

// Crate-level exports - Presentation adapter seam
pub use presenter::{CellView, GameView, Intent, Presenter};

// Crate-level exports - Rules
pub use rules::{WINNING_LINES, WinningLine, check_winner, find_winning_line, is_draw, is_full};

// Crate-level exports - Game types
pub use position::Position;
pub use score::ScoreTally;
pub use types::{Board, Cell, GameState, GameStatus, Outcome, Player};
