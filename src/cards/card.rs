//! Card ranks.
//!
//! A War card is nothing but its rank. Suits never break ties, so they are
//! not modelled and four cards share every rank.

use serde::{Deserialize, Serialize};

/// Lowest rank (ace, played low).
pub const MIN_RANK: u8 = 1;
/// Highest rank (king).
pub const MAX_RANK: u8 = 13;

/// A playing card, identified by rank only.
///
/// Ranks run 1 (ace) to 13 (king): 11 is the jack, 12 the queen.
/// Comparison is by rank.
///
/// ## Example
///
/// ```
/// use war_sim::cards::Card;
///
/// let jack = Card::new(11);
/// assert!(jack > Card::new(10));
/// assert_eq!(jack.to_string(), "J");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card of the given rank.
    ///
    /// Panics if `rank` is outside 1..=13.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        assert!(rank >= MIN_RANK && rank <= MAX_RANK, "Card rank must be 1-13");
        Self(rank)
    }

    /// Create a card, or `None` for an out-of-range rank.
    #[must_use]
    pub const fn try_new(rank: u8) -> Option<Self> {
        if rank >= MIN_RANK && rank <= MAX_RANK {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// Get the rank value.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Iterate over every rank from ace to king.
    pub fn all_ranks() -> impl Iterator<Item = Card> {
        (MIN_RANK..=MAX_RANK).map(Card)
    }
}

impl TryFrom<u8> for Card {
    type Error = String;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Card::try_new(rank).ok_or_else(|| format!("card rank must be 1-13, got {rank}"))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => f.write_str("A"),
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            n => write!(f, "{n}"),
        }
    }
}
