//! Simulation configuration.
//!
//! - `SimConfig`: every tunable of a run (game count, burn count, caps, seed)
//! - `TieOrder`: which check a tie runs first at low card counts
//! - `Metric`: which per-game statistic a batch reports
//!
//! Configs can be built in code with the `with_*` setters or loaded from a
//! JSON file; either way call [`SimConfig::validate`] before running.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::DECK_SIZE;
use crate::core::PLAYER_COUNT;

/// Order of the two low-card checks made when the probes tie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieOrder {
    /// Abandon the tie if either total is short, and only then top up draw
    /// piles for the war. A short hand's reserve is never reshuffled just to
    /// be abandoned.
    #[default]
    AbandonFirst,
    /// Top up short draw piles first, then abandon if a total is still short.
    /// Recycles (and counts) even when the tie ends up abandoned. A top-up
    /// with an empty reserve moves nothing and is not counted as a reset.
    RecycleFirst,
}

/// Per-game statistic collected into a batch series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Number of pile recycles.
    #[default]
    Resets,
    /// Number of comparisons.
    Rounds,
    /// Number of war iterations.
    Wars,
}

impl Metric {
    /// Human-readable name used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Metric::Resets => "reset count",
            Metric::Rounds => "round count",
            Metric::Wars => "war count",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Games per batch.
    pub game_count: usize,

    /// Face-down cards each player sets aside per war iteration.
    pub burn_count: usize,

    /// Comparison cap per game. Reaching it ends the game with no result.
    pub max_rounds: u64,

    /// Optional recycle cap per game.
    pub max_resets: Option<u64>,

    /// Master seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Statistic the batch series reports.
    pub metric: Metric,

    /// Low-card tie policy.
    pub tie_order: TieOrder,

    /// Values per row when printing the series.
    pub per_row: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            game_count: 1000,
            burn_count: 3,
            max_rounds: 10_000,
            max_resets: None,
            seed: None,
            metric: Metric::Resets,
            tie_order: TieOrder::AbandonFirst,
            per_row: 8,
        }
    }
}

impl SimConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing fields keep defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Cards each player must hold for a tie to become a war:
    /// the probe, the burned cards and the next probe.
    #[must_use]
    pub const fn war_threshold(&self) -> usize {
        self.burn_count + 2
    }

    #[must_use]
    pub fn with_game_count(mut self, count: usize) -> Self {
        self.game_count = count;
        self
    }

    #[must_use]
    pub fn with_burn_count(mut self, burn: usize) -> Self {
        self.burn_count = burn;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_max_resets(mut self, resets: u64) -> Self {
        self.max_resets = Some(resets);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub fn with_tie_order(mut self, order: TieOrder) -> Self {
        self.tie_order = order;
        self
    }

    #[must_use]
    pub fn with_per_row(mut self, per_row: usize) -> Self {
        self.per_row = per_row;
        self
    }

    /// Check that the configuration describes a playable run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_count == 0 {
            return Err(ConfigError::NoGames);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.per_row == 0 {
            return Err(ConfigError::EmptyRow);
        }

        let available = DECK_SIZE / PLAYER_COUNT;
        if self.war_threshold() > available {
            return Err(ConfigError::BurnTooLarge {
                burn_count: self.burn_count,
                needed: self.war_threshold(),
                available,
            });
        }

        Ok(())
    }
}
