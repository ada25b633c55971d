//! Ordered card stack backed by a persistent vector.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A player's drawn cards, top first.
///
/// Uses `im::Vector` so cloning a roster snapshot is O(1) and prepending is
/// cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardStack {
    cards: Vector<Card>,
}

impl CardStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Put a freshly drawn card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Remove and return the top card.
    ///
    /// Popping an empty stack is a no-op that returns `None`.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for CardStack {
    /// Build a stack from cards listed top first.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
