//! Batch statistics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Metric, PlayerId, PlayerMap};
use crate::rules::GameResult;

/// Summary statistics over a batch of games.
///
/// `series_mean` averages over every game, counting a capped game as 0 the
/// way the printed series does. The remaining figures cover finished games
/// only; games stopped by a cap are counted in `no_result` and left out of
/// `mean`, `min`, `max`, `std_dev` and `histogram`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Statistic the numbers below describe.
    pub metric: Metric,

    /// Games played.
    pub games: usize,

    /// Games that ended with a winner.
    pub finished: usize,

    /// Games stopped by a round or reset cap.
    pub no_result: usize,

    /// Wins per player.
    pub wins: PlayerMap<usize>,

    /// Mean of the series: every game, capped games as 0.
    pub series_mean: f64,

    /// Mean over finished games.
    pub mean: f64,
    pub min: u64,
    pub max: u64,

    /// Population standard deviation.
    pub std_dev: f64,

    /// Value -> number of finished games with that value.
    #[serde(skip)]
    pub histogram: FxHashMap<u64, usize>,
}

impl BatchStats {
    /// Create new empty statistics.
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    /// Compute statistics for `metric` over `results`.
    pub fn from_results(results: &[GameResult], metric: Metric) -> Self {
        let mut stats = Self::new(metric);
        stats.games = results.len();

        let mut values = Vec::with_capacity(results.len());
        for result in results {
            match result.winner {
                Some(winner) => {
                    stats.wins[winner] += 1;
                    let value = result.metric(metric);
                    *stats.histogram.entry(value).or_default() += 1;
                    values.push(value);
                }
                None => stats.no_result += 1,
            }
        }
        stats.finished = values.len();

        if values.is_empty() {
            return stats;
        }

        let total = values.iter().sum::<u64>() as f64;
        let n = values.len() as f64;
        stats.series_mean = total / stats.games as f64;
        stats.mean = total / n;
        stats.min = values.iter().copied().min().unwrap_or(0);
        stats.max = values.iter().copied().max().unwrap_or(0);
        let variance = values
            .iter()
            .map(|&v| {
                let d = v as f64 - stats.mean;
                d * d
            })
            .sum::<f64>()
            / n;
        stats.std_dev = variance.sqrt();

        stats
    }

    /// Fraction of finished games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.finished == 0 {
            0.0
        } else {
            self.wins[player] as f64 / self.finished as f64
        }
    }

    /// Histogram entries sorted by value.
    #[must_use]
    pub fn sorted_histogram(&self) -> Vec<(u64, usize)> {
        let mut entries: Vec<_> = self.histogram.iter().map(|(&v, &c)| (v, c)).collect();
        entries.sort_unstable();
        entries
    }

    /// Most common value, ties broken toward the smaller value.
    #[must_use]
    pub fn mode(&self) -> Option<u64> {
        self.sorted_histogram()
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(value, _)| value)
    }
}
