//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from
//! the engine so they can be checked on any board, including ones
//! built by hand in tests.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, WinningLine, check_winner, find_winning_line};
