//! The war pool: cards staked on an unresolved tie chain.

use smallvec::SmallVec;

use super::Hand;
use crate::cards::Card;

/// Cards set aside by both players during a war.
///
/// Inline capacity covers a single war at the default burn count
/// (`2 * (3 + 1)` cards) plus one chained war; longer chains spill to the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarPool {
    cards: SmallVec<[Card; 16]>,
}

impl WarPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Stake cards on the current war.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Move every staked card into `winner`'s reserve pile.
    ///
    /// Returns the number of cards moved.
    pub fn drain_into(&mut self, winner: &mut Hand) -> usize {
        let moved = self.cards.len();
        winner.extend_reserve(self.cards.drain(..));
        moved
    }
}
