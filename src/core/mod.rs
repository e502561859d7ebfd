//! Core simulator types: players, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every other module.
//! It knows nothing about the War rules themselves.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{Metric, SimConfig, TieOrder};
pub use error::{report_violation, ConfigError, InvariantViolation};
