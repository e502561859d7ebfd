//! Deck building, shuffling and dealing.

use tracing::trace;

use super::card::{Card, MAX_RANK};
use crate::core::GameRng;

/// Copies of each rank in a standard deck.
pub const SUITS: usize = 4;
/// Cards in a standard deck.
pub const DECK_SIZE: usize = MAX_RANK as usize * SUITS;

/// Build a standard 52-card deck in rank order: four aces, four twos, ...
#[must_use]
pub fn build_deck() -> Vec<Card> {
    Card::all_ranks()
        .flat_map(|card| std::iter::repeat(card).take(SUITS))
        .collect()
}

/// Shuffle cards uniformly at random.
pub fn shuffle(cards: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(cards);
}

/// Shuffle a deck and split it into two contiguous halves.
///
/// The first half goes to player A, the second to player B. For an odd deck
/// player B receives the extra card.
#[must_use]
pub fn deal(mut deck: Vec<Card>, rng: &mut GameRng) -> (Vec<Card>, Vec<Card>) {
    shuffle(&mut deck, rng);
    let second = deck.split_off(deck.len() / 2);
    trace!(a = deck.len(), b = second.len(), "dealt deck");
    (deck, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_counts(cards: &[Card]) -> [usize; MAX_RANK as usize + 1] {
        let mut counts = [0; MAX_RANK as usize + 1];
        for card in cards {
            counts[card.rank() as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_build_deck() {
        let deck = build_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(
            &deck[..5],
            &[Card::new(1), Card::new(1), Card::new(1), Card::new(1), Card::new(2)]
        );
        assert_eq!(deck[51], Card::new(13));

        let counts = rank_counts(&deck);
        assert_eq!(counts[0], 0);
        assert!(counts[1..].iter().all(|&c| c == SUITS));
    }

    #[test]
    fn test_deal_splits_evenly() {
        let mut rng = GameRng::new(42);
        let (a, b) = deal(build_deck(), &mut rng);
        assert_eq!(a.len(), 26);
        assert_eq!(b.len(), 26);

        let mut all = a.clone();
        all.extend(&b);
        all.sort();
        assert_eq!(all, build_deck());
    }

    #[test]
    fn test_deal_is_reproducible() {
        let first = deal(build_deck(), &mut GameRng::new(1234));
        let second = deal(build_deck(), &mut GameRng::new(1234));
        assert_eq!(first, second);

        let other = deal(build_deck(), &mut GameRng::new(4321));
        assert_ne!(first, other);
    }

    #[test]
    fn test_deal_odd_deck() {
        let deck: Vec<Card> = (1..=5).map(Card::new).collect();
        let (a, b) = deal(deck, &mut GameRng::new(3));
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_deal_rank_shares_are_fair() {
        // Each rank should make up about 4/52 of player A's hand.
        let mut rng = GameRng::new(2024);
        let trials = 2000;
        let mut counts = [0usize; MAX_RANK as usize + 1];
        for _ in 0..trials {
            let (a, _) = deal(build_deck(), &mut rng);
            for (rank, n) in rank_counts(&a).iter().enumerate() {
                counts[rank] += n;
            }
        }

        let expected = (trials * 26) as f64 * SUITS as f64 / DECK_SIZE as f64;
        for &count in &counts[1..] {
            let ratio = count as f64 / expected;
            assert!((0.95..1.05).contains(&ratio), "rank share off: {ratio}");
        }
    }
}
