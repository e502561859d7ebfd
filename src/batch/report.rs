//! Text rendering of batch results.

use std::fmt;

use serde::Serialize;

use super::BatchStats;
use crate::core::PlayerId;
use crate::rules::GameResult;

/// Render values as comma-separated rows of `per_row` values.
///
/// ```
/// use war_sim::batch::format_series;
///
/// assert_eq!(format_series(&[1, 2, 3, 4, 5], 2), "1, 2,\n3, 4,\n5");
/// ```
#[must_use]
pub fn format_series(values: &[u64], per_row: usize) -> String {
    values
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Everything a batch produced.
#[derive(Clone, Debug, Serialize)]
pub struct BatchReport {
    /// Master seed the per-game seeds were forked from.
    pub seed: u64,
    pub results: Vec<GameResult>,
    pub stats: BatchStats,
    #[serde(skip)]
    pub per_row: usize,
}

impl BatchReport {
    /// The metric for every game, in play order. Capped games report 0.
    #[must_use]
    pub fn series(&self) -> Vec<u64> {
        self.results
            .iter()
            .map(|r| if r.is_finished() { r.metric(self.stats.metric) } else { 0 })
            .collect()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;

        writeln!(f, "{}", format_series(&self.series(), self.per_row))?;
        writeln!(f)?;
        writeln!(f, "Mean {} = {:.2}", stats.metric, stats.series_mean)?;
        writeln!(f)?;
        writeln!(f, "Games:      {} (seed {})", stats.games, self.seed)?;
        writeln!(f, "Finished:   {}", stats.finished)?;
        writeln!(f, "No result:  {}", stats.no_result)?;
        for player in PlayerId::BOTH {
            writeln!(
                f,
                "{} wins: {} ({:.1}%)",
                player,
                stats.wins[player],
                stats.win_rate(player) * 100.0
            )?;
        }
        if stats.finished > 0 {
            writeln!(f, "Mean (finished): {:.2}", stats.mean)?;
            writeln!(f, "Min / max:  {} / {}", stats.min, stats.max)?;
            writeln!(f, "Std dev:    {:.2}", stats.std_dev)?;
            if let Some(mode) = stats.mode() {
                writeln!(f, "Mode:       {mode}")?;
            }
        }
        Ok(())
    }
}
