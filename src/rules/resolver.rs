//! Round resolver: the War state machine.
//!
//! Each call to [`RoundResolver::step`] performs one comparison of the two
//! players' top cards (the probes):
//!
//! - Different ranks: the higher card takes both probes plus any pending war
//!   pool into its reserve.
//! - Equal ranks: if both players can afford it, each stakes the probe and
//!   `burn_count` face-down cards into the pool and the next step compares the
//!   newly exposed cards. A player holding fewer than `burn_count + 2` cards
//!   cannot fight; the tie is abandoned and each probe returns to its owner.
//!
//! Empty draw piles are recycled at the start of a step. Chained ties are
//! handled by staying in `War` across steps, never by recursion.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::Card;
use crate::core::{report_violation, GameRng, InvariantViolation, PlayerId, SimConfig, TieOrder};
use crate::zones::Table;

/// Resolver state between steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolverState {
    /// No comparison made yet.
    Idle,
    /// Last comparison was decisive.
    Comparing,
    /// A war is pending; `depth` counts chained ties.
    War { depth: u32 },
    /// Last tie was abandoned for lack of cards.
    Abandoned,
    /// A player ran out of cards.
    GameOver { winner: PlayerId },
}

/// What a single step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Decisive comparison. `pooled` counts war pool cards taken as well.
    Decided {
        winner: PlayerId,
        high: Card,
        low: Card,
        pooled: usize,
    },
    /// Tie escalated to a war; `pool` is the pool size after staking.
    War { depth: u32, rank: Card, pool: usize },
    /// Tie abandoned; probes returned to their owners.
    Abandoned { rank: Card },
    /// Game already over; nothing was compared.
    GameOver { winner: PlayerId },
}

impl Step {
    /// True if the step compared two cards.
    #[must_use]
    pub fn is_comparison(&self) -> bool {
        !matches!(self, Step::GameOver { .. })
    }
}

/// The War state machine.
///
/// Holds only the rules (burn count, tie policy) and the current state; the
/// cards live on the [`Table`] passed to each step.
#[derive(Clone, Debug)]
pub struct RoundResolver {
    burn_count: usize,
    tie_order: TieOrder,
    state: ResolverState,
}

impl RoundResolver {
    /// Create a resolver in the `Idle` state.
    #[must_use]
    pub fn new(burn_count: usize, tie_order: TieOrder) -> Self {
        Self {
            burn_count,
            tie_order,
            state: ResolverState::Idle,
        }
    }

    /// Create a resolver from a simulation config.
    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.burn_count, config.tie_order)
    }

    #[must_use]
    pub fn state(&self) -> ResolverState {
        self.state
    }

    #[must_use]
    pub fn burn_count(&self) -> usize {
        self.burn_count
    }

    #[must_use]
    pub fn tie_order(&self) -> TieOrder {
        self.tie_order
    }

    /// Cards a player needs for a tie to become a war.
    #[must_use]
    pub fn war_threshold(&self) -> usize {
        self.burn_count + 2
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.state, ResolverState::GameOver { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            ResolverState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Advance the game by one comparison.
    pub fn step(&mut self, table: &mut Table, rng: &mut GameRng) -> Step {
        if let ResolverState::GameOver { winner } = self.state {
            return Step::GameOver { winner };
        }

        if let Some(loser) = table.exhausted_player() {
            return self.finish(loser.opponent());
        }

        for player in PlayerId::BOTH {
            if table.hand(player).draw_is_empty() {
                table.recycle(player, rng);
            }
        }

        let step = self.compare(table, rng);

        if let Err(violation) = table.verify() {
            report_violation(&violation);
        }

        step
    }

    fn finish(&mut self, winner: PlayerId) -> Step {
        debug!(%winner, "game over");
        self.state = ResolverState::GameOver { winner };
        Step::GameOver { winner }
    }

    fn compare(&mut self, table: &mut Table, rng: &mut GameRng) -> Step {
        let (a, b) = match (table.hand(PlayerId::A).top(), table.hand(PlayerId::B).top()) {
            (Some(a), Some(b)) => (a, b),
            (a, _) => {
                let player = if a.is_none() { PlayerId::A } else { PlayerId::B };
                report_violation(&InvariantViolation::NoProbe {
                    player,
                    total: table.hand(player).total(),
                });
                return self.finish(player.opponent());
            }
        };

        match a.cmp(&b) {
            Ordering::Greater => self.award(table, PlayerId::A, a, b),
            Ordering::Less => self.award(table, PlayerId::B, b, a),
            Ordering::Equal => self.tie(table, rng, a),
        }
    }

    fn award(&mut self, table: &mut Table, winner: PlayerId, high: Card, low: Card) -> Step {
        let loser = winner.opponent();

        let won = [table.hand_mut(winner).take_top(), table.hand_mut(loser).take_top()];
        table.hand_mut(winner).extend_reserve(won.into_iter().flatten());
        let pooled = table.award_pool(winner);

        trace!(%winner, %high, %low, pooled, "decided");

        self.state = if table.hand(loser).is_exhausted() {
            debug!(%winner, "game over");
            ResolverState::GameOver { winner }
        } else {
            ResolverState::Comparing
        };

        Step::Decided {
            winner,
            high,
            low,
            pooled,
        }
    }

    fn tie(&mut self, table: &mut Table, rng: &mut GameRng, rank: Card) -> Step {
        let threshold = self.war_threshold();

        if self.tie_order == TieOrder::RecycleFirst {
            top_up(table, rng, threshold);
        }

        if PlayerId::BOTH.iter().any(|&p| table.hand(p).total() < threshold) {
            return self.abandon(table, rank);
        }

        if self.tie_order == TieOrder::AbandonFirst {
            top_up(table, rng, threshold);
        }

        table.stake(self.burn_count + 1);

        let depth = match self.state {
            ResolverState::War { depth } => depth + 1,
            _ => 1,
        };
        self.state = ResolverState::War { depth };

        let pool = table.pool().len();
        debug!(%rank, depth, pool, "war");
        Step::War { depth, rank, pool }
    }

    fn abandon(&mut self, table: &mut Table, rank: Card) -> Step {
        for player in PlayerId::BOTH {
            let hand = table.hand_mut(player);
            if let Some(probe) = hand.take_top() {
                hand.push_reserve(probe);
            }
        }

        debug!(
            %rank,
            a = table.hand(PlayerId::A).total(),
            b = table.hand(PlayerId::B).total(),
            pending = table.pool().len(),
            "tie abandoned"
        );
        self.state = ResolverState::Abandoned;
        Step::Abandoned { rank }
    }
}

/// Recycle every draw pile too small to fund a war.
fn top_up(table: &mut Table, rng: &mut GameRng, threshold: usize) {
    for player in PlayerId::BOTH {
        if table.hand(player).draw_len() < threshold {
            table.recycle(player, rng);
        }
    }
}
