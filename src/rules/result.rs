//! Result of a completed game.

use serde::{Deserialize, Serialize};

use crate::core::{Metric, PlayerId};

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// A player ran out of cards.
    Exhausted,
    /// The comparison cap was reached first.
    RoundCap,
    /// The recycle cap was reached first.
    ResetCap,
}

/// Summary of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Seed that replays this game.
    pub seed: u64,
    /// Winner, or `None` when a cap stopped the game.
    pub winner: Option<PlayerId>,
    pub end: EndReason,
    /// Pile recycles across both players.
    pub reset_count: u64,
    /// Comparisons made.
    pub rounds: u64,
    /// War iterations (chained ties count once each).
    pub wars: u64,
    pub abandoned_ties: u64,
    /// Deepest chain of consecutive ties.
    pub longest_war: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == Some(player)
    }

    /// True if the game ended with a winner.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// The value of `metric` for this game.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Resets => self.reset_count,
            Metric::Rounds => self.rounds,
            Metric::Wars => self.wars,
        }
    }
}
