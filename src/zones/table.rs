//! Everything on the table during one game.

use tracing::debug;

use super::{Hand, WarPool};
use crate::cards::Card;
use crate::core::{GameRng, InvariantViolation, PlayerId, PlayerMap};

/// Both hands, the war pool and the recycle counter.
///
/// The card total is fixed when the table is set and never changes: cards
/// only move between piles.
#[derive(Clone, Debug)]
pub struct Table {
    hands: PlayerMap<Hand>,
    pool: WarPool,
    reset_count: u64,
    card_total: usize,
}

impl Table {
    /// Seat two hands. The current card count becomes the conserved total.
    pub fn new(a: Hand, b: Hand) -> Self {
        let card_total = a.total() + b.total();
        Self {
            hands: PlayerMap::from_pair(a, b),
            pool: WarPool::new(),
            reset_count: 0,
            card_total,
        }
    }

    /// Seat two players with fresh draw piles.
    pub fn from_draw_piles(a: Vec<Card>, b: Vec<Card>) -> Self {
        Self::new(Hand::new(a), Hand::new(b))
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    pub fn hand_mut(&mut self, player: PlayerId) -> &mut Hand {
        &mut self.hands[player]
    }

    #[must_use]
    pub fn pool(&self) -> &WarPool {
        &self.pool
    }

    /// Move the whole pool into `winner`'s reserve. Returns the cards moved.
    pub fn award_pool(&mut self, winner: PlayerId) -> usize {
        self.pool.drain_into(&mut self.hands[winner])
    }

    /// Move up to `n` cards from the front of each draw pile into the pool.
    pub fn stake(&mut self, n: usize) {
        let (a, b) = self.hands.both_mut();
        self.pool.extend(a.take_front(n));
        self.pool.extend(b.take_front(n));
    }

    /// Number of recycles so far.
    #[must_use]
    pub fn reset_count(&self) -> u64 {
        self.reset_count
    }

    /// Cards on the table, fixed at construction.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.card_total
    }

    /// Cards currently counted across all piles and the pool.
    #[must_use]
    pub fn counted_cards(&self) -> usize {
        self.hands.iter().map(|(_, h)| h.total()).sum::<usize>() + self.pool.len()
    }

    /// Recycle a player's reserve into their draw pile.
    ///
    /// Counts a reset only when cards actually moved.
    pub fn recycle(&mut self, player: PlayerId, rng: &mut GameRng) -> bool {
        let recycled = self.hands[player].recycle(rng);
        if recycled {
            self.reset_count += 1;
            debug!(
                %player,
                draw = self.hands[player].draw_len(),
                resets = self.reset_count,
                "recycled reserve"
            );
        }
        recycled
    }

    /// The first player holding no cards, if any.
    #[must_use]
    pub fn exhausted_player(&self) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.is_exhausted())
            .map(|(player, _)| player)
    }

    /// Check card conservation.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let found = self.counted_cards();
        if found != self.card_total {
            return Err(InvariantViolation::CardCount {
                expected: self.card_total,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r)).collect()
    }

    #[test]
    fn test_new_table() {
        let table = Table::from_draw_piles(cards(&[1, 2, 3]), cards(&[4, 5]));
        assert_eq!(table.card_total(), 5);
        assert_eq!(table.counted_cards(), 5);
        assert_eq!(table.hand(PlayerId::A).draw_len(), 3);
        assert_eq!(table.hand(PlayerId::B).draw_len(), 2);
        assert_eq!(table.reset_count(), 0);
        assert!(table.verify().is_ok());
        assert_eq!(table.exhausted_player(), None);
    }

    #[test]
    fn test_stake_and_award() {
        let mut table = Table::from_draw_piles(cards(&[7, 1, 2, 9]), cards(&[7, 3, 4, 5]));
        table.stake(2);
        assert_eq!(table.pool().len(), 4);
        assert_eq!(table.hand(PlayerId::A).top(), Some(Card::new(2)));
        assert!(table.verify().is_ok());

        assert_eq!(table.award_pool(PlayerId::B), 4);
        assert!(table.pool().is_empty());
        assert_eq!(table.hand(PlayerId::B).reserve_len(), 4);
        assert!(table.verify().is_ok());
    }

    #[test]
    fn test_recycle_counts_only_real_moves() {
        let mut rng = GameRng::new(1);
        let mut table = Table::new(
            Hand::with_piles(cards(&[]), cards(&[3, 4])),
            Hand::new(cards(&[6])),
        );

        assert!(table.recycle(PlayerId::A, &mut rng));
        assert_eq!(table.reset_count(), 1);
        assert_eq!(table.hand(PlayerId::A).draw_len(), 2);

        assert!(!table.recycle(PlayerId::B, &mut rng));
        assert_eq!(table.reset_count(), 1);
    }

    #[test]
    fn test_exhausted_player() {
        let mut table = Table::from_draw_piles(cards(&[5]), cards(&[3]));
        let card = table.hand_mut(PlayerId::B).take_top().unwrap();
        table.hand_mut(PlayerId::A).push_reserve(card);
        assert_eq!(table.exhausted_player(), Some(PlayerId::B));
    }

    #[test]
    fn test_verify_detects_lost_card() {
        let mut table = Table::from_draw_piles(cards(&[5, 6]), cards(&[3]));
        let _ = table.hand_mut(PlayerId::A).take_top();
        assert_eq!(
            table.verify(),
            Err(InvariantViolation::CardCount { expected: 3, found: 2 })
        );
    }
}
