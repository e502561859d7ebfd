//! War rules: the round resolver state machine and game results.
//!
//! The resolver only moves cards between piles on a [`crate::zones::Table`];
//! it never owns them. Game-level bookkeeping (caps, counters) lives in
//! [`crate::games::war`].

pub mod resolver;
pub mod result;

pub use resolver::{ResolverState, RoundResolver, Step};
pub use result::{EndReason, GameResult};
