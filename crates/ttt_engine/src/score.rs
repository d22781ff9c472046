//! Running win tally across games.

use super::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins per mark for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
}

impl Score {
    /// Creates a 0-0 tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Records one completed game won by `winner`.
    #[instrument(skip(self))]
    pub(crate) fn record_win(&mut self, winner: Player) {
        match winner {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, "Score updated");
    }

    /// Zeroes both counters.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {} | O: {}", self.x_wins, self.o_wins)
    }
}
