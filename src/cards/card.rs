//! Cards and deck items.
//!
//! A [`Card`] is a category label plus a symbol. A [`WildItem`] is the
//! single-active-mode wild: two distinct symbols and nothing else.
//! [`DeckItem`] is what the deck actually holds.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::{EngineError, Result};

/// Category shown on a wild card in persistent mode.
pub const WILD_CATEGORY: &str = "WILD";

/// A playable card.
///
/// Immutable value. In persistent mode a wild card keeps its symbol, carries
/// `is_wild = true` and shows [`WILD_CATEGORY`] instead of its category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Category prompt shown to players.
    pub category: String,
    /// Symbol used for matching.
    pub symbol: Symbol,
    /// Persistent-mode wild flag.
    #[serde(default, rename = "isWild")]
    pub is_wild: bool,
}

impl Card {
    /// A regular card.
    pub fn new(category: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            category: category.into(),
            symbol,
            is_wild: false,
        }
    }

    /// A persistent-mode wild card.
    #[must_use]
    pub fn wild(symbol: Symbol) -> Self {
        Self {
            category: WILD_CATEGORY.to_string(),
            symbol,
            is_wild: true,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol, self.category)
    }
}

/// Single-active-mode wild: makes two symbols equivalent while it is active.
///
/// The two symbols always differ; both the constructor and deserialization
/// enforce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWildItem")]
pub struct WildItem {
    symbol1: Symbol,
    symbol2: Symbol,
}

#[derive(Deserialize)]
struct RawWildItem {
    symbol1: Symbol,
    symbol2: Symbol,
}

impl TryFrom<RawWildItem> for WildItem {
    type Error = EngineError;

    fn try_from(raw: RawWildItem) -> Result<Self> {
        WildItem::new(raw.symbol1, raw.symbol2)
    }
}

impl WildItem {
    /// Create a wild item. Fails with `InvalidWildPair` if both symbols match.
    pub fn new(symbol1: Symbol, symbol2: Symbol) -> Result<Self> {
        if symbol1 == symbol2 {
            return Err(EngineError::InvalidWildPair(symbol1));
        }
        Ok(Self { symbol1, symbol2 })
    }

    #[must_use]
    pub fn symbol1(&self) -> Symbol {
        self.symbol1
    }

    #[must_use]
    pub fn symbol2(&self) -> Symbol {
        self.symbol2
    }
}

impl std::fmt::Display for WildItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WILD {}={}", self.symbol1, self.symbol2)
    }
}

/// One entry in the deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckItem {
    /// A card that lands in the drawer's stack.
    Card(Card),
    /// A single-active-mode wild that only changes the active pair.
    Wild(WildItem),
}

impl DeckItem {
    /// The card, if this item is one.
    #[must_use]
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            DeckItem::Card(card) => Some(card),
            DeckItem::Wild(_) => None,
        }
    }

    /// Whether drawing this item touches the equivalence state.
    #[must_use]
    pub fn is_wild(&self) -> bool {
        match self {
            DeckItem::Card(card) => card.is_wild,
            DeckItem::Wild(_) => true,
        }
    }
}

impl From<Card> for DeckItem {
    fn from(card: Card) -> Self {
        DeckItem::Card(card)
    }
}

impl From<WildItem> for DeckItem {
    fn from(wild: WildItem) -> Self {
        DeckItem::Wild(wild)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_card() {
        let card = Card::new("Movies", Symbol::Star);
        assert_eq!(card.category, "Movies");
        assert!(!card.is_wild);
        assert_eq!(card.to_string(), "★ Movies");
    }

    #[test]
    fn test_wild_card_uses_sentinel() {
        let card = Card::wild(Symbol::Circle);
        assert_eq!(card.category, WILD_CATEGORY);
        assert!(card.is_wild);
        assert_eq!(card.symbol, Symbol::Circle);
    }

    #[test]
    fn test_wild_item_rejects_same_symbol() {
        assert_eq!(
            WildItem::new(Symbol::Heart, Symbol::Heart),
            Err(EngineError::InvalidWildPair(Symbol::Heart))
        );
        let wild = WildItem::new(Symbol::Heart, Symbol::Square).unwrap();
        assert_eq!(wild.symbol1(), Symbol::Heart);
        assert_eq!(wild.symbol2(), Symbol::Square);
    }

    #[test]
    fn test_wild_item_deserialize_validates() {
        let bad = r#"{"symbol1":"★","symbol2":"★"}"#;
        assert!(serde_json::from_str::<WildItem>(bad).is_err());

        let good = r#"{"symbol1":"★","symbol2":"●"}"#;
        let wild: WildItem = serde_json::from_str(good).unwrap();
        assert_eq!(wild.symbol2(), Symbol::Circle);
    }

    #[test]
    fn test_deck_item_shapes() {
        let item: DeckItem =
            serde_json::from_str(r#"{"Wild":{"symbol1":"◆","symbol2":"▲"}}"#).unwrap();
        assert!(matches!(item, DeckItem::Wild(_)));
        assert!(item.is_wild());
        assert!(serde_json::from_str::<DeckItem>(r#"{"Wild":{"symbol1":"◆","symbol2":"◆"}}"#).is_err());

        let item: DeckItem =
            serde_json::from_str(r#"{"Card":{"category":"Books","symbol":"♥","isWild":false}}"#).unwrap();
        assert_eq!(item.as_card().map(|c| c.symbol), Some(Symbol::Heart));
        assert!(!item.is_wild());
    }

    #[test]
    fn test_card_without_wild_flag_deserializes() {
        let card: Card = serde_json::from_str(r#"{"category":"Foods","symbol":"■"}"#).unwrap();
        assert!(!card.is_wild);
    }
}
