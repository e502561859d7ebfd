//! A player's two piles.
//!
//! The draw pile is played from the front; won cards go to the back of the
//! reserve pile. When the draw pile runs short the reserve is shuffled and
//! placed behind it (a recycle).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// One player's draw and reserve piles.
///
/// ## Usage
///
/// ```
/// use war_sim::cards::Card;
/// use war_sim::core::GameRng;
/// use war_sim::zones::Hand;
///
/// let mut hand = Hand::new([Card::new(9)]);
/// let card = hand.take_top().unwrap();
/// hand.push_reserve(card);
///
/// assert!(hand.draw_is_empty());
/// assert!(hand.recycle(&mut GameRng::new(1)));
/// assert_eq!(hand.top(), Some(Card::new(9)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    draw: VecDeque<Card>,
    reserve: Vec<Card>,
}

impl Hand {
    /// Create a hand whose draw pile holds `cards`, front first.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            draw: cards.into_iter().collect(),
            reserve: Vec::new(),
        }
    }

    /// Create a hand with explicit draw and reserve piles.
    pub fn with_piles(
        draw: impl IntoIterator<Item = Card>,
        reserve: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            draw: draw.into_iter().collect(),
            reserve: reserve.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    #[must_use]
    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    /// Cards held in both piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw.len() + self.reserve.len()
    }

    #[must_use]
    pub fn draw_is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    /// True once the player holds no cards at all.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.total() == 0
    }

    /// The next card to be played.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.draw.front().copied()
    }

    /// Remove and return the next card to be played.
    pub fn take_top(&mut self) -> Option<Card> {
        self.draw.pop_front()
    }

    /// Remove up to `n` cards from the front of the draw pile.
    pub fn take_front(&mut self, n: usize) -> impl Iterator<Item = Card> + '_ {
        let n = n.min(self.draw.len());
        self.draw.drain(..n)
    }

    pub fn push_reserve(&mut self, card: Card) {
        self.reserve.push(card);
    }

    pub fn extend_reserve(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.reserve.extend(cards);
    }

    /// Draw pile, front first.
    pub fn draw_pile(&self) -> impl Iterator<Item = Card> + '_ {
        self.draw.iter().copied()
    }

    /// Reserve pile, oldest first.
    #[must_use]
    pub fn reserve_pile(&self) -> &[Card] {
        &self.reserve
    }

    /// Shuffle the reserve and place it behind the draw pile.
    ///
    /// Returns `false` (and does nothing) when the reserve is empty.
    pub fn recycle(&mut self, rng: &mut GameRng) -> bool {
        if self.reserve.is_empty() {
            return false;
        }
        rng.shuffle(&mut self.reserve);
        self.draw.extend(self.reserve.drain(..));
        true
    }
}
