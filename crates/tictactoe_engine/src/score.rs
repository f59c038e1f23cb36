//! Running score across the rounds of a match.

use crate::types::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Wins per player and draws, for the lifetime of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Rounds drawn.
    draws: u32,
}

impl ScoreTally {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Rounds recorded so far.
    pub fn rounds(&self) -> u32 {
        self.x + self.o + self.draws
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x += 1,
            Outcome::Winner(Player::O) => self.o += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut tally = ScoreTally::new();
        tally.record(Outcome::Winner(Player::X));
        tally.record(Outcome::Winner(Player::X));
        tally.record(Outcome::Winner(Player::O));
        tally.record(Outcome::Draw);

        assert_eq!(tally.wins(Player::X), 2);
        assert_eq!(*tally.o(), 1);
        assert_eq!(*tally.draws(), 1);
        assert_eq!(tally.rounds(), 4);
    }

    #[test]
    fn test_reset_zeroes() {
        let mut tally = ScoreTally::new();
        tally.record(Outcome::Draw);
        tally.reset();
        assert_eq!(tally, ScoreTally::default());
    }
}
