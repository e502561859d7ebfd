//! War game implementation.

use tracing::{debug, trace};

use crate::cards::{build_deck, deal, Card};
use crate::core::{GameRng, SimConfig, TieOrder};
use crate::rules::{EndReason, GameResult, RoundResolver, Step};
use crate::zones::Table;

/// A single simulated game of War.
///
/// Owns its table, resolver and RNG; nothing is shared between games.
#[derive(Clone, Debug)]
pub struct WarGame {
    table: Table,
    resolver: RoundResolver,
    rng: GameRng,
    seed: u64,
    max_rounds: u64,
    max_resets: Option<u64>,
    rounds: u64,
    wars: u64,
    abandoned_ties: u64,
    longest_war: u32,
}

/// Builder for creating a WarGame.
#[derive(Clone, Debug)]
pub struct WarGameBuilder {
    burn_count: usize,
    tie_order: TieOrder,
    max_rounds: u64,
    max_resets: Option<u64>,
    piles: Option<(Vec<Card>, Vec<Card>)>,
}

impl Default for WarGameBuilder {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take burn count, tie order and caps from a simulation config.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            burn_count: config.burn_count,
            tie_order: config.tie_order,
            max_rounds: config.max_rounds,
            max_resets: config.max_resets,
            piles: None,
        }
    }

    pub fn burn_count(mut self, burn: usize) -> Self {
        self.burn_count = burn;
        self
    }

    pub fn tie_order(mut self, order: TieOrder) -> Self {
        self.tie_order = order;
        self
    }

    pub fn max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn max_resets(mut self, resets: Option<u64>) -> Self {
        self.max_resets = resets;
        self
    }

    /// Start from fixed draw piles instead of dealing a shuffled deck.
    pub fn piles(mut self, a: Vec<Card>, b: Vec<Card>) -> Self {
        self.piles = Some((a, b));
        self
    }

    /// Build the game. The seed drives the deal and every recycle.
    pub fn build(self, seed: u64) -> WarGame {
        let mut rng = GameRng::new(seed);

        let (a, b) = match self.piles {
            Some(piles) => piles,
            None => deal(build_deck(), &mut rng),
        };

        WarGame {
            table: Table::from_draw_piles(a, b),
            resolver: RoundResolver::new(self.burn_count, self.tie_order),
            rng,
            seed,
            max_rounds: self.max_rounds,
            max_resets: self.max_resets,
            rounds: 0,
            wars: 0,
            abandoned_ties: 0,
            longest_war: 0,
        }
    }
}

impl WarGame {
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn resolver(&self) -> &RoundResolver {
        &self.resolver
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Comparisons made so far.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.resolver.is_over()
    }

    /// The cap that stops this game now, if any.
    #[must_use]
    pub fn cap_reached(&self) -> Option<EndReason> {
        if self.rounds >= self.max_rounds {
            return Some(EndReason::RoundCap);
        }
        match self.max_resets {
            Some(cap) if self.table.reset_count() >= cap => Some(EndReason::ResetCap),
            _ => None,
        }
    }

    /// Advance by one comparison, updating the game counters.
    pub fn step(&mut self) -> Step {
        let step = self.resolver.step(&mut self.table, &mut self.rng);

        if step.is_comparison() {
            self.rounds += 1;
        }
        match step {
            Step::War { depth, .. } => {
                self.wars += 1;
                self.longest_war = self.longest_war.max(depth);
            }
            Step::Abandoned { .. } => self.abandoned_ties += 1,
            Step::Decided { .. } | Step::GameOver { .. } => {}
        }

        trace!(round = self.rounds, ?step, "step");
        step
    }

    /// Play until a player runs out of cards or a cap is reached.
    pub fn play(mut self) -> GameResult {
        let end = loop {
            if self.is_over() {
                break EndReason::Exhausted;
            }
            if let Some(cap) = self.cap_reached() {
                break cap;
            }
            self.step();
        };

        let result = self.result(end);
        debug!(
            seed = result.seed,
            winner = ?result.winner,
            ?end,
            rounds = result.rounds,
            resets = result.reset_count,
            "game finished"
        );
        result
    }

    /// Summarize the game as it stands.
    #[must_use]
    pub fn result(&self, end: EndReason) -> GameResult {
        GameResult {
            seed: self.seed,
            winner: self.resolver.winner(),
            end,
            reset_count: self.table.reset_count(),
            rounds: self.rounds,
            wars: self.wars,
            abandoned_ties: self.abandoned_ties,
            longest_war: self.longest_war,
        }
    }
}

/// Deal and play one full game.
///
/// `seed: None` draws a seed from OS entropy; either way the seed used is
/// recorded in the result.
pub fn play_one_game(config: &SimConfig, seed: Option<u64>) -> GameResult {
    let seed = seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    WarGameBuilder::from_config(config).build(seed).play()
}
