//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Card`: a rank in 1..=13, suit discarded
//! - `build_deck` / `deal`: the standard 52-card deck and its split into
//!   two 26-card draw piles

pub mod card;
pub mod deck;

pub use card::{Card, MAX_RANK, MIN_RANK};
pub use deck::{build_deck, deal, shuffle, DECK_SIZE, SUITS};
