//! # war-sim
//!
//! A simulator for the card game War, built to gather statistics on how long
//! games last.
//!
//! ## Design Principles
//!
//! 1. **No shared state**: every game owns its piles, war pool and RNG.
//!    Nothing survives between games.
//!
//! 2. **Iterative state machine**: ties and chained wars are resolved by an
//!    explicit `RoundResolver` stepping one comparison at a time, bounded by
//!    a round cap. No recursion.
//!
//! 3. **Reproducible**: all randomness flows from a seeded ChaCha8 RNG. A
//!    batch replays from its master seed, a game from its recorded seed.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `cards`: card ranks, deck building and dealing
//! - `zones`: hands (draw/reserve piles), the war pool, the table
//! - `rules`: the round resolver and game results
//! - `games`: the playable War game
//! - `batch`: batch runner, statistics and reports

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;
pub mod batch;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, InvariantViolation, Metric, PlayerId, PlayerMap, SimConfig, TieOrder,
};

pub use crate::cards::{build_deck, deal, Card, DECK_SIZE};

pub use crate::zones::{Hand, Table, WarPool};

pub use crate::rules::{EndReason, GameResult, ResolverState, RoundResolver, Step};

pub use crate::games::war::{play_one_game, WarGame, WarGameBuilder};

pub use crate::batch::{BatchReport, BatchRunner, BatchStats};
