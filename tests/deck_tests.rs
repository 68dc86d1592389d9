//! Deck manager behavior tests.
//!
//! These tests cover the observable contract of a reading session:
//! - Initial counts and the empty-deck sentinel
//! - Conservation of cards across deck and drawn history
//! - Draw positions and reset
//! - Shuffle uniformity and reproducibility

use std::collections::HashMap;

use proptest::prelude::*;
use tarot_deck::cards::{Card, CardCatalog, CardCategory, CardId};
use tarot_deck::core::{DeckConfig, DeckRng};
use tarot_deck::deck::{DeckManager, Orientation};

fn three_cards() -> Vec<Card> {
    (0..3u32)
        .map(|i| {
            Card::new(
                CardId::new(i),
                format!("major-{}", i + 1),
                format!("cards.a{:02}.name", i + 1),
                i + 1,
                CardCategory::Major,
            )
        })
        .collect()
}

fn marseille_prefix(count: usize) -> Vec<Card> {
    CardCatalog::marseille().cards()[..count].to_vec()
}

fn sorted_ids<'a>(cards: impl Iterator<Item = &'a Card>) -> Vec<CardId> {
    let mut ids: Vec<_> = cards.map(|c| c.id).collect();
    ids.sort();
    ids
}

fn held_ids(deck: &DeckManager) -> Vec<CardId> {
    sorted_ids(deck.deck().iter().chain(deck.drawn_cards().iter().map(|d| &d.card)))
}

// =============================================================================
// Three-Card Session
// =============================================================================

#[test]
fn test_three_card_session() {
    let cards = three_cards();
    let mut deck = DeckManager::new(cards.clone(), DeckRng::new(42));

    assert_eq!(deck.remaining(), 3);
    assert!(deck.drawn_cards().is_empty());

    let first = deck.draw_card().expect("deck has cards");
    assert!(cards.contains(&first.card));
    assert!(matches!(first.orientation, Orientation::Upright | Orientation::Reversed));
    assert_eq!(first.position, 0);
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.drawn_cards().len(), 1);

    assert!(deck.draw_card().is_some());
    assert!(deck.draw_card().is_some());
    assert_eq!(deck.remaining(), 0);
    assert!(!deck.has_cards());

    assert!(deck.draw_card().is_none());
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.drawn_cards().len(), 3);

    deck.reset();
    assert_eq!(deck.remaining(), 3);
    assert!(deck.drawn_cards().is_empty());
}

#[test]
fn test_repeated_shuffles_keep_count() {
    let mut deck = DeckManager::new(three_cards(), DeckRng::new(1));
    for _ in 0..10 {
        deck.shuffle();
    }
    assert_eq!(deck.remaining(), 3);
}

// =============================================================================
// Full Deck
// =============================================================================

#[test]
fn test_full_marseille_reading() {
    let catalog = CardCatalog::marseille();
    let config = DeckConfig::default().with_seed(7).shuffled();
    let mut deck = DeckManager::with_config(catalog.cards().to_vec(), &config);

    let drawn = deck.draw_many(catalog.len() + 5);
    assert_eq!(drawn.len(), 80);
    for (i, card) in drawn.iter().enumerate() {
        assert_eq!(card.position, i);
    }
    assert_eq!(sorted_ids(drawn.iter().map(|d| &d.card)), sorted_ids(catalog.iter()));

    let reversed = drawn.iter().filter(|d| d.orientation.is_reversed()).count();
    assert!(reversed > 20 && reversed < 60, "reversed = {reversed}");
}

#[test]
fn test_same_seed_same_reading() {
    let reading = |seed| {
        let mut deck = DeckManager::new(marseille_prefix(80), DeckRng::new(seed));
        deck.shuffle();
        deck.draw_many(10)
    };

    assert_eq!(reading(99), reading(99));
    assert_ne!(reading(99), reading(100));
}

#[test]
fn test_shuffle_is_uniform_over_permutations() {
    let mut counts: HashMap<Vec<CardId>, usize> = HashMap::new();
    let mut deck = DeckManager::new(three_cards(), DeckRng::new(2024));

    for _ in 0..6000 {
        deck.reset();
        deck.shuffle();
        let order: Vec<_> = deck.deck().iter().map(|c| c.id).collect();
        *counts.entry(order).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    for (order, count) in &counts {
        assert!((800..1200).contains(count), "{order:?} seen {count} times");
    }
}

#[test]
fn test_reset_restores_supplied_order() {
    let catalog = CardCatalog::marseille();
    let mut deck = DeckManager::new(catalog.cards().to_vec(), DeckRng::new(5));

    deck.shuffle();
    deck.draw_many(30);
    deck.shuffle();
    deck.reset();

    assert_eq!(deck.deck(), catalog.cards());
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Copy, Debug)]
enum Op {
    Shuffle,
    Draw,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![1 => Just(Op::Shuffle), 3 => Just(Op::Draw), 1 => Just(Op::Reset)]
}

proptest! {
    #[test]
    fn prop_initial_counts(count in 0usize..=80, seed in any::<u64>()) {
        let deck = DeckManager::new(marseille_prefix(count), DeckRng::new(seed));

        prop_assert_eq!(deck.remaining(), count);
        prop_assert_eq!(deck.has_cards(), count > 0);
        prop_assert!(deck.drawn_cards().is_empty());
    }

    #[test]
    fn prop_cards_are_conserved(
        count in 0usize..=80,
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let cards = marseille_prefix(count);
        let expected = sorted_ids(cards.iter());
        let mut deck = DeckManager::new(cards, DeckRng::new(seed));

        for op in ops {
            let drawn_before = deck.drawn_cards().len();
            match op {
                Op::Shuffle => deck.shuffle(),
                Op::Reset => deck.reset(),
                Op::Draw => match deck.draw_card() {
                    Some(drawn) => prop_assert_eq!(drawn.position, drawn_before),
                    None => {
                        prop_assert_eq!(deck.remaining(), 0);
                        prop_assert_eq!(deck.drawn_cards().len(), drawn_before);
                    }
                },
            }

            prop_assert_eq!(held_ids(&deck), expected.clone());
            prop_assert_eq!(deck.remaining() + deck.drawn_cards().len(), count);
        }
    }

    #[test]
    fn prop_positions_follow_draw_order(count in 1usize..=80, draws in 0usize..=80, seed in any::<u64>()) {
        let mut deck = DeckManager::new(marseille_prefix(count), DeckRng::new(seed));
        deck.shuffle();

        let k = draws.min(count);
        deck.draw_many(k);

        prop_assert_eq!(deck.drawn_cards().len(), k);
        for (i, drawn) in deck.drawn_cards().iter().enumerate() {
            prop_assert_eq!(drawn.position, i);
        }
    }

    #[test]
    fn prop_shuffle_preserves_deck_multiset(count in 0usize..=80, pre_draws in 0usize..10, seed in any::<u64>()) {
        let mut deck = DeckManager::new(marseille_prefix(count), DeckRng::new(seed));
        deck.draw_many(pre_draws);

        let before = sorted_ids(deck.deck().iter());
        let history = deck.drawn_cards().to_vec();
        deck.shuffle();

        prop_assert_eq!(sorted_ids(deck.deck().iter()), before);
        prop_assert_eq!(deck.drawn_cards(), history.as_slice());
    }

    #[test]
    fn prop_reset_restores_everything(
        count in 0usize..=80,
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 0..100),
    ) {
        let cards = marseille_prefix(count);
        let mut deck = DeckManager::new(cards.clone(), DeckRng::new(seed));

        for op in ops {
            match op {
                Op::Shuffle => deck.shuffle(),
                Op::Draw => {
                    deck.draw_card();
                }
                Op::Reset => deck.reset(),
            }
        }

        deck.reset();
        prop_assert_eq!(deck.remaining(), count);
        prop_assert!(deck.drawn_cards().is_empty());
        prop_assert_eq!(deck.deck(), cards.as_slice());
    }
}
