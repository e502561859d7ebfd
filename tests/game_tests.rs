//! Full-game tests: dealing, conservation over a whole game, caps and
//! reproducibility.

use war_sim::cards::{build_deck, deal, Card, DECK_SIZE};
use war_sim::core::{GameRng, PlayerId, SimConfig, TieOrder};
use war_sim::games::war::{play_one_game, WarGameBuilder};
use war_sim::rules::{EndReason, Step};

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&r| Card::new(r)).collect()
}

/// A fixed seed reproduces the deal exactly.
#[test]
fn test_deal_reproducible_from_seed() {
    let (a1, b1) = deal(build_deck(), &mut GameRng::new(77));
    let (a2, b2) = deal(build_deck(), &mut GameRng::new(77));
    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
    assert_eq!(a1.len() + b1.len(), DECK_SIZE);
}

/// The game's opening piles are exactly what `deal` produces for its seed.
#[test]
fn test_game_uses_seeded_deal() {
    let (a, b) = deal(build_deck(), &mut GameRng::new(31));
    let game = WarGameBuilder::new().build(31);

    assert_eq!(game.table().hand(PlayerId::A).draw_pile().collect::<Vec<_>>(), a);
    assert_eq!(game.table().hand(PlayerId::B).draw_pile().collect::<Vec<_>>(), b);
}

/// 52 cards are on the table after every step of a full game.
#[test_log::test]
fn test_conservation_through_full_game() {
    for order in [TieOrder::AbandonFirst, TieOrder::RecycleFirst] {
        let mut game = WarGameBuilder::new().tie_order(order).max_rounds(20_000).build(2024);

        while !game.is_over() && game.cap_reached().is_none() {
            game.step();
            let table = game.table();
            assert_eq!(table.counted_cards(), DECK_SIZE, "{order:?} round {}", game.rounds());
        }
    }
}

/// Each kind of step moves the war pool the way it should.
#[test]
fn test_step_kinds_over_a_game() {
    let mut game = WarGameBuilder::new().max_rounds(5_000).build(9);
    let mut saw_decided = false;

    while !game.is_over() && game.cap_reached().is_none() {
        let pool_before = game.table().pool().len();
        match game.step() {
            Step::Decided { pooled, .. } => {
                saw_decided = true;
                assert_eq!(pooled, pool_before);
                assert!(game.table().pool().is_empty());
            }
            Step::War { pool, .. } => assert!(pool > pool_before),
            Step::Abandoned { .. } => assert_eq!(game.table().pool().len(), pool_before),
            Step::GameOver { .. } => {}
        }
    }

    assert!(saw_decided);
}

/// The round cap always stops a game, however stuck it is.
#[test]
fn test_round_cap_bounds_stuck_game() {
    // Every remaining card is a 3; each tie is abandoned forever.
    let result = WarGameBuilder::new()
        .burn_count(0)
        .max_rounds(400)
        .piles(cards(&[5, 5, 3]), cards(&[5, 5, 3]))
        .build(0)
        .play();

    assert_eq!(result.end, EndReason::RoundCap);
    assert_eq!(result.rounds, 400);
    assert_eq!(result.winner, None);
    assert_eq!(result.wars, 2);
    assert_eq!(result.longest_war, 2);
    assert_eq!(result.abandoned_ties, 398);
}

/// The reset cap stops a game too.
#[test]
fn test_reset_cap_bounds_stuck_game() {
    let result = WarGameBuilder::new()
        .burn_count(0)
        .max_resets(Some(10))
        .piles(cards(&[5, 5, 3]), cards(&[5, 5, 3]))
        .build(0)
        .play();

    assert_eq!(result.end, EndReason::ResetCap);
    assert_eq!(result.reset_count, 10);
    assert_eq!(result.winner, None);
}

/// Same config and seed, same game; the tie order changes nothing about the
/// deal.
#[test]
fn test_play_one_game_reproducible() {
    let config = SimConfig::new().with_max_rounds(20_000);
    for seed in [1, 2, 3] {
        assert_eq!(play_one_game(&config, Some(seed)), play_one_game(&config, Some(seed)));
    }

    let recycle_first = config.clone().with_tie_order(TieOrder::RecycleFirst);
    let a = WarGameBuilder::from_config(&config).build(5);
    let b = WarGameBuilder::from_config(&recycle_first).build(5);
    assert_eq!(
        a.table().hand(PlayerId::A).draw_pile().collect::<Vec<_>>(),
        b.table().hand(PlayerId::A).draw_pile().collect::<Vec<_>>()
    );
}

/// A one-sided deal ends with the stronger hand winning and no recycling.
#[test]
fn test_dominant_hand_wins_without_recycling() {
    let result = WarGameBuilder::new()
        .piles(cards(&[13, 13, 13, 12]), cards(&[1, 2, 3, 4]))
        .build(0)
        .play();

    assert_eq!(result.winner, Some(PlayerId::A));
    assert_eq!(result.rounds, 4);
    assert_eq!(result.reset_count, 0);
    assert_eq!(result.wars, 0);
}

/// Heavier burns still finish most games within a generous cap.
#[test]
fn test_burn_counts_play_out() {
    for burn in [0, 1, 3, 6] {
        let config = SimConfig::new().with_burn_count(burn).with_max_rounds(50_000);
        let finished = (0..10)
            .map(|seed| play_one_game(&config, Some(seed)))
            .filter(|r| r.is_finished())
            .count();
        assert!(finished >= 7, "burn {burn}: only {finished} of 10 finished");
    }
}
