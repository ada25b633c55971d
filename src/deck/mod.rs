//! The shared draw deck.
//!
//! A `Deck` is a fixed, non-empty sequence of [`DeckItem`]s plus a cursor.
//! Drawing returns the item under the cursor and advances it by one; the
//! cursor never moves back.
//!
//! ```
//! use symbol_clash::cards::{Card, Symbol};
//! use symbol_clash::core::EngineError;
//! use symbol_clash::deck::Deck;
//!
//! let mut deck = Deck::from_items(vec![Card::new("Movies", Symbol::Star).into()]).unwrap();
//! assert!(deck.draw().is_ok());
//! assert_eq!(deck.index(), 1);
//! assert_eq!(deck.draw(), Err(EngineError::DeckExhausted));
//! ```

mod generator;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::DeckItem;
use crate::core::{EngineError, Result};

/// Draw items plus the draw cursor.
///
/// Invariant: `0 <= index <= items.len()` and `items` is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckParts")]
pub struct Deck {
    items: Vector<DeckItem>,
    index: usize,
}

#[derive(Deserialize)]
struct DeckParts {
    items: Vector<DeckItem>,
    index: usize,
}

impl TryFrom<DeckParts> for Deck {
    type Error = EngineError;

    fn try_from(parts: DeckParts) -> Result<Self> {
        if parts.items.is_empty() {
            return Err(EngineError::EmptyDeck);
        }
        if parts.index > parts.items.len() {
            return Err(EngineError::Snapshot(format!(
                "deck cursor {} is past the end ({})",
                parts.index,
                parts.items.len()
            )));
        }
        Ok(Self {
            items: parts.items,
            index: parts.index,
        })
    }
}

impl Deck {
    /// Build a deck from items in draw order.
    ///
    /// Fails with `EmptyDeck` if there are no items.
    pub fn from_items(items: impl IntoIterator<Item = DeckItem>) -> Result<Self> {
        let items: Vector<DeckItem> = items.into_iter().collect();
        if items.is_empty() {
            return Err(EngineError::EmptyDeck);
        }
        Ok(Self { items, index: 0 })
    }

    /// Draw the next item and advance the cursor.
    ///
    /// Fails with `DeckExhausted` once every item has been drawn; the cursor
    /// is left untouched in that case.
    pub fn draw(&mut self) -> Result<DeckItem> {
        let item = self.peek().cloned().ok_or(EngineError::DeckExhausted)?;
        self.index += 1;
        Ok(item)
    }

    /// The item the next draw would return.
    #[must_use]
    pub fn peek(&self) -> Option<&DeckItem> {
        self.items.get(self.index)
    }

    /// Zero-based draw cursor.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of items, drawn or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.len() - self.index
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.items.len()
    }

    /// All items in draw order, including already-drawn ones.
    pub fn items(&self) -> impl Iterator<Item = &DeckItem> {
        self.items.iter()
    }
}
