//! Player and game identification, plus the per-player record.
//!
//! ## Identifiers
//!
//! `PlayerId` and `GameId` are opaque strings assigned by whoever owns the
//! records (usually a database). The engine only compares them.
//!
//! ## Player
//!
//! A roster entry: display name, score, host flag and the player's
//! [`CardStack`]. Only the top card of the stack takes part in matching.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::stack::CardStack;

/// Opaque player identifier, unique within a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque game identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    /// Create a new game ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A player in one game.
///
/// Score only ever goes up, by exactly one per confirmed win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier within the game.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Confirmed wins.
    pub score: u32,

    /// Drawn cards, top first.
    pub card_stack: CardStack,

    /// Whether this player created the game.
    pub is_host: bool,
}

impl Player {
    /// Create a player with an empty stack and zero score.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: 0,
            card_stack: CardStack::new(),
            is_host: false,
        }
    }

    /// Mark this player as the game host.
    #[must_use]
    pub fn as_host(mut self) -> Self {
        self.is_host = true;
        self
    }

    /// Replace the stack (top first). Mostly useful for setting up scenarios.
    #[must_use]
    pub fn with_stack(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.card_stack = cards.into_iter().collect();
        self
    }

    /// The visible card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.card_stack.top()
    }
}
