//! Engine error types.

use crate::position::Position;

/// A move the engine refused. The state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// The index is not a board cell.
    #[display("Position {} is out of bounds (must be 0-8)", index)]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The round has already ended.
    #[display("Round is already over")]
    GameOver,
}

/// Text that does not name an [`Intent`](crate::Intent).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unrecognized intent: {:?}", input)]
pub struct ParseIntentError {
    /// The rejected input.
    pub input: String,
}
