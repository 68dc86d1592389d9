//! Card records - static tarot card data.
//!
//! A `Card` is created once from static data and never mutated. Everything
//! a view needs to show it (display name, meanings, image) is referenced
//! by key or filename; resolving those is left to the caller.

use serde::{Deserialize, Serialize};

/// Stable identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The two card groupings of a tarot deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    Major,
    Minor,
}

/// Suits of the Minor Arcana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Coins,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Coins];
}

/// Catalog category of a card.
///
/// `Special` covers the two extra cards of the Marseille set; they sit
/// outside the Major Arcana and have no suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    Major,
    Wands,
    Cups,
    Swords,
    Coins,
    Special,
}

impl CardCategory {
    /// Catalog order.
    pub const ALL: [CardCategory; 6] = [
        CardCategory::Major,
        CardCategory::Wands,
        CardCategory::Cups,
        CardCategory::Swords,
        CardCategory::Coins,
        CardCategory::Special,
    ];

    /// Filename prefix used by the Marseille image set.
    #[must_use]
    pub const fn file_prefix(self) -> char {
        match self {
            CardCategory::Major => 'a',
            CardCategory::Wands => 'b',
            CardCategory::Cups => 'c',
            CardCategory::Swords => 'd',
            CardCategory::Coins => 'e',
            CardCategory::Special => 'z',
        }
    }

    /// Lowercase name, also the slug prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardCategory::Major => "major",
            CardCategory::Wands => "wands",
            CardCategory::Cups => "cups",
            CardCategory::Swords => "swords",
            CardCategory::Coins => "coins",
            CardCategory::Special => "special",
        }
    }

    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            CardCategory::Wands => Some(Suit::Wands),
            CardCategory::Cups => Some(Suit::Cups),
            CardCategory::Swords => Some(Suit::Swords),
            CardCategory::Coins => Some(Suit::Coins),
            CardCategory::Major | CardCategory::Special => None,
        }
    }

    #[must_use]
    pub const fn arcana(self) -> Arcana {
        match self {
            CardCategory::Major => Arcana::Major,
            _ => Arcana::Minor,
        }
    }
}

/// An immutable tarot card.
///
/// ## Example
///
/// ```
/// use tarot_deck::cards::{Card, CardCategory, CardId};
///
/// let fool = Card::new(CardId::new(0), "major-1", "cards.a01.name", 1, CardCategory::Major)
///     .with_filename("a01.jpg");
///
/// assert!(fool.is_major_arcana());
/// assert_eq!(fool.details().meaning_reversed, "cards.a01.meaningReversed");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier.
    pub id: CardId,

    /// Human-readable stable key, e.g. `major-1`.
    pub slug: String,

    /// Display-name reference (an i18n key).
    pub name_key: String,

    /// Ordinal number within the card's category.
    pub number: u32,

    pub category: CardCategory,

    /// Image file name, opaque to this crate.
    #[serde(default)]
    pub filename: String,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(
        id: CardId,
        slug: impl Into<String>,
        name_key: impl Into<String>,
        number: u32,
        category: CardCategory,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            name_key: name_key.into(),
            number,
            category,
            filename: String::new(),
        }
    }

    /// Set the image filename (builder pattern).
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Major-vs-minor membership flag.
    #[must_use]
    pub fn is_major_arcana(&self) -> bool {
        self.category == CardCategory::Major
    }

    #[must_use]
    pub fn arcana(&self) -> Arcana {
        self.category.arcana()
    }

    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.category.suit()
    }

    /// Filename without its extension, e.g. `a01`. Falls back to the slug.
    #[must_use]
    pub fn stem(&self) -> &str {
        if self.filename.is_empty() {
            return &self.slug;
        }
        self.filename
            .rsplit_once('.')
            .map_or(self.filename.as_str(), |(stem, _)| stem)
    }

    /// i18n keys for the card's name, description, and meanings.
    #[must_use]
    pub fn details(&self) -> CardDetails {
        CardDetails::for_stem(self.stem())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.slug, self.id)
    }
}

/// Localized text references for a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub name: String,
    pub description: String,
    pub meaning_up: String,
    pub meaning_reversed: String,
}

impl CardDetails {
    /// Keys under `cards.<stem>.*`.
    #[must_use]
    pub fn for_stem(stem: &str) -> Self {
        Self {
            name: format!("cards.{stem}.name"),
            description: format!("cards.{stem}.description"),
            meaning_up: format!("cards.{stem}.meaningUp"),
            meaning_reversed: format!("cards.{stem}.meaningReversed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_category_arcana_and_suit() {
        assert_eq!(CardCategory::Major.arcana(), Arcana::Major);
        assert_eq!(CardCategory::Cups.arcana(), Arcana::Minor);
        assert_eq!(CardCategory::Special.arcana(), Arcana::Minor);

        assert_eq!(CardCategory::Swords.suit(), Some(Suit::Swords));
        assert_eq!(CardCategory::Major.suit(), None);
        assert_eq!(CardCategory::Special.suit(), None);
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new(CardId::new(30), "wands-9", "cards.b09.name", 9, CardCategory::Wands)
            .with_filename("b09.jpg");

        assert!(!card.is_major_arcana());
        assert_eq!(card.suit(), Some(Suit::Wands));
        assert_eq!(card.stem(), "b09");
        assert_eq!(card.to_string(), "wands-9 (Card(30))");
    }

    #[test]
    fn test_stem_without_filename() {
        let card = Card::new(CardId::new(0), "major-1", "k", 1, CardCategory::Major);
        assert_eq!(card.stem(), "major-1");
    }

    #[test]
    fn test_details_keys() {
        let details = CardDetails::for_stem("z00");
        assert_eq!(details.name, "cards.z00.name");
        assert_eq!(details.description, "cards.z00.description");
        assert_eq!(details.meaning_up, "cards.z00.meaningUp");
        assert_eq!(details.meaning_reversed, "cards.z00.meaningReversed");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(1), "cups-2", "cards.c02.name", 2, CardCategory::Cups);

        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"category\":\"cups\""));

        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
