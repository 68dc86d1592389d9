//! Deck manager: shuffle, draw, and reset for one reading session.
//!
//! The end of the deck vector is the top of the deck. Drawing pops from
//! the end; the original collection is kept so `reset` can restore it.
//!
//! ## Conservation
//!
//! At every point, the cards in the deck plus the cards in the drawn
//! history are exactly the original collection, each card once.

use tracing::{debug, trace};

use super::drawn::{DrawnCard, Orientation};
use super::events::{DeckEvent, SubscriptionId, Subscribers};
use crate::cards::Card;
use crate::core::{DeckConfig, DeckRng, RandomSource};

/// Owns the deck and drawn history of a single reading session.
///
/// Not safe for concurrent mutation; wrap it in a mutex if several
/// callers need to share one session.
///
/// ## Usage
///
/// ```
/// use tarot_deck::cards::CardCatalog;
/// use tarot_deck::core::DeckRng;
/// use tarot_deck::deck::DeckManager;
///
/// let catalog = CardCatalog::marseille();
/// let mut deck = DeckManager::new(catalog.cards().to_vec(), DeckRng::new(42));
///
/// deck.shuffle();
/// let first = deck.draw_card().unwrap();
///
/// assert_eq!(first.position, 0);
/// assert_eq!(deck.remaining(), 79);
///
/// deck.reset();
/// assert_eq!(deck.remaining(), 80);
/// assert!(deck.drawn_cards().is_empty());
/// ```
#[derive(Debug)]
pub struct DeckManager<R = DeckRng> {
    original: Vec<Card>,
    deck: Vec<Card>,
    drawn: Vec<DrawnCard>,
    rng: R,
    subscribers: Subscribers,
}

impl DeckManager<DeckRng> {
    /// Build a session from a config.
    #[must_use]
    pub fn with_config(cards: Vec<Card>, config: &DeckConfig) -> Self {
        let mut manager = Self::new(cards, config.rng());
        if config.shuffle_on_start {
            manager.shuffle();
        }
        manager
    }
}

impl<R: RandomSource> DeckManager<R> {
    /// Start a session with the given cards in the given order.
    ///
    /// An empty collection is allowed and yields a permanently empty deck.
    #[must_use]
    pub fn new(cards: Vec<Card>, rng: R) -> Self {
        debug!(cards = cards.len(), "deck initialized");
        Self {
            deck: cards.clone(),
            original: cards,
            drawn: Vec::new(),
            rng,
            subscribers: Subscribers::new(),
        }
    }

    /// Uniformly permute the remaining cards in place.
    ///
    /// Fisher-Yates from the last index down to 1, choosing `j` in
    /// `[0, i]` for each step. Drawn cards are untouched.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.deck);

        let remaining = self.deck.len();
        debug!(remaining, "deck shuffled");
        self.subscribers.emit(&DeckEvent::Shuffled { remaining });
    }

    /// Take the top card with a random orientation.
    ///
    /// Returns `None` when the deck is empty; that is a normal state, and
    /// nothing changes.
    pub fn draw_card(&mut self) -> Option<DrawnCard> {
        let Some(card) = self.deck.pop() else {
            trace!("draw on empty deck");
            self.subscribers.emit(&DeckEvent::Exhausted);
            return None;
        };

        let orientation = if self.rng.coin_flip() {
            Orientation::Upright
        } else {
            Orientation::Reversed
        };

        let drawn = DrawnCard {
            card,
            orientation,
            position: self.drawn.len(),
        };

        debug!(
            card = %drawn.card,
            %orientation,
            position = drawn.position,
            remaining = self.deck.len(),
            "card drawn"
        );

        self.drawn.push(drawn.clone());
        self.subscribers.emit(&DeckEvent::Drawn(drawn.clone()));
        Some(drawn)
    }

    /// Draw up to `count` cards, stopping early if the deck runs out.
    pub fn draw_many(&mut self, count: usize) -> Vec<DrawnCard> {
        let mut cards = Vec::with_capacity(count.min(self.deck.len()));
        for _ in 0..count {
            match self.draw_card() {
                Some(drawn) => cards.push(drawn),
                None => break,
            }
        }
        cards
    }

    /// Restore the original collection in its original order and clear
    /// the drawn history.
    pub fn reset(&mut self) {
        self.deck.clone_from(&self.original);
        self.drawn.clear();

        let remaining = self.deck.len();
        debug!(remaining, "deck reset");
        self.subscribers.emit(&DeckEvent::Reset { remaining });
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.deck.is_empty()
    }

    /// Cards drawn so far, in draw order.
    #[must_use]
    pub fn drawn_cards(&self) -> &[DrawnCard] {
        &self.drawn
    }

    /// Remaining cards; the last element is the top of the deck.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// The collection the session was started with.
    #[must_use]
    pub fn original(&self) -> &[Card] {
        &self.original
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Register an observer for deck changes.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&DeckEvent) + Send + 'static,
    {
        self.subscribers.subscribe(Box::new(callback))
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
