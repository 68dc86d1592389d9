//! Card catalog: the static card set a session draws from.
//!
//! The `CardCatalog` keeps cards in their canonical order and provides
//! fast lookup by `CardId` and slug.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::card::{Card, CardCategory, CardDetails, CardId};
use crate::core::CatalogError;

/// Number of cards in each category of the Marseille set.
const fn category_size(category: CardCategory) -> u32 {
    match category {
        CardCategory::Major => 22,
        CardCategory::Special => 2,
        _ => 14,
    }
}

/// Ordered collection of cards with lookup indexes.
///
/// ## Example
///
/// ```
/// use tarot_deck::cards::{CardCatalog, CardCategory};
///
/// let catalog = CardCatalog::marseille();
/// assert_eq!(catalog.len(), 80);
/// assert_eq!(catalog.by_category(CardCategory::Major).count(), 22);
///
/// let fool = catalog.get_by_slug("major-1").unwrap();
/// assert_eq!(fool.filename, "a01.jpg");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
    by_slug: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from cards in order, rejecting duplicate ids or slugs.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        let catalog = Self::from_cards(cards)?;
        debug!(cards = catalog.len(), "loaded card catalog from JSON");
        Ok(catalog)
    }

    /// The 80-card Tarot de Marseille set.
    ///
    /// Order: 22 Major Arcana, then wands, cups, swords, coins (14 each),
    /// then the two special cards. Ids run from 0 in that order.
    #[must_use]
    pub fn marseille() -> Self {
        let mut catalog = Self::new();
        let mut next_id = 0u32;

        for category in CardCategory::ALL {
            // Special cards are numbered from 0, everything else from 1.
            let first = u32::from(category != CardCategory::Special);
            for number in first..first + category_size(category) {
                let stem = format!("{}{:02}", category.file_prefix(), number);
                let card = Card::new(
                    CardId::new(next_id),
                    format!("{}-{}", category.as_str(), number),
                    CardDetails::for_stem(&stem).name,
                    number,
                    category,
                )
                .with_filename(format!("{stem}.jpg"));

                catalog.push_unchecked(card);
                next_id += 1;
            }
        }

        catalog
    }

    /// Add a card at the end of the catalog.
    pub fn insert(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.by_id.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        if self.by_slug.contains_key(&card.slug) {
            return Err(CatalogError::DuplicateSlug(card.slug));
        }
        self.push_unchecked(card);
        Ok(())
    }

    fn push_unchecked(&mut self, card: Card) {
        let index = self.cards.len();
        self.by_id.insert(card.id, index);
        self.by_slug.insert(card.slug.clone(), index);
        self.cards.push(card);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&i| &self.cards[i])
    }

    /// Get a card by slug.
    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&Card> {
        self.by_slug.get(slug).map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All cards, in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards of one category, in catalog order.
    pub fn by_category(&self, category: CardCategory) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.category == category)
    }

    /// Cards matching a predicate, in catalog order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}
