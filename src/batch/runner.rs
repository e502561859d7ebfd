//! Batch runner - plays many games with one configuration.

use tracing::info;

use super::{BatchReport, BatchStats};
use crate::core::{ConfigError, GameRng, SimConfig};
use crate::games::war::WarGameBuilder;
use crate::rules::GameResult;

/// Plays `game_count` games and collects their results.
///
/// Games run one after another. Each game gets a seed forked from the master
/// RNG, so a batch is reproducible from its master seed and any single game
/// from its own recorded seed.
pub struct BatchRunner {
    config: SimConfig,
    master: GameRng,
}

impl BatchRunner {
    /// Create a runner. Fails if the configuration is invalid.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let master = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self { config, master })
    }

    /// Get configuration
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Master seed of this batch.
    pub fn seed(&self) -> u64 {
        self.master.seed()
    }

    /// Play the whole batch.
    pub fn run(self) -> BatchReport {
        self.run_with(|_, _| {})
    }

    /// Play the whole batch, calling `on_game(index, result)` after each game.
    pub fn run_with(mut self, mut on_game: impl FnMut(usize, &GameResult)) -> BatchReport {
        let seed = self.master.seed();
        let builder = WarGameBuilder::from_config(&self.config);

        info!(
            games = self.config.game_count,
            burn = self.config.burn_count,
            max_rounds = self.config.max_rounds,
            seed,
            "starting batch"
        );

        let mut results = Vec::with_capacity(self.config.game_count);
        for index in 0..self.config.game_count {
            let game_seed = self.master.fork().seed();
            let result = builder.clone().build(game_seed).play();
            on_game(index, &result);
            results.push(result);
        }

        let stats = BatchStats::from_results(&results, self.config.metric);
        info!(
            finished = stats.finished,
            no_result = stats.no_result,
            mean = stats.mean,
            "batch complete"
        );

        BatchReport {
            seed,
            results,
            stats,
            per_row: self.config.per_row,
        }
    }
}
