//! War: two players, one deck, highest card takes the trick.
//!
//! - A shuffled 52-card deck is split 26/26
//! - Each round both players turn over their top card; the higher rank takes both
//! - Ties go to war: each side stakes cards face down and compares again
//! - Exhausted draw piles are refilled by shuffling the reserve
//! - The player who runs out of cards loses

mod game;

pub use game::{play_one_game, WarGame, WarGameBuilder};
