//! The fixed symbol alphabet.
//!
//! Eight glyphs, always in the same order. Deck generation assigns
//! `Symbol::ALL[i % 8]` to the `i`-th shuffled category, so the order is part
//! of the rules, not just presentation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the eight match symbols.
///
/// Serialized as its glyph so stored decks stay readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[serde(rename = "◆")]
    Diamond,
    #[serde(rename = "★")]
    Star,
    #[serde(rename = "●")]
    Circle,
    #[serde(rename = "■")]
    Square,
    #[serde(rename = "▲")]
    Triangle,
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "✦")]
    Sparkle,
    #[serde(rename = "⬟")]
    Pentagon,
}

impl Symbol {
    /// Number of symbols in the alphabet.
    pub const COUNT: usize = 8;

    /// Every symbol, in deck-assignment order.
    pub const ALL: [Symbol; Symbol::COUNT] = [
        Symbol::Diamond,
        Symbol::Star,
        Symbol::Circle,
        Symbol::Square,
        Symbol::Triangle,
        Symbol::Heart,
        Symbol::Sparkle,
        Symbol::Pentagon,
    ];

    /// Symbol assigned to deck position `index`.
    #[must_use]
    pub const fn for_position(index: usize) -> Symbol {
        Symbol::ALL[index % Symbol::COUNT]
    }

    /// The glyph shown on the card.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Symbol::Diamond => '◆',
            Symbol::Star => '★',
            Symbol::Circle => '●',
            Symbol::Square => '■',
            Symbol::Triangle => '▲',
            Symbol::Heart => '♥',
            Symbol::Sparkle => '✦',
            Symbol::Pentagon => '⬟',
        }
    }

    /// The seven symbols other than `self`, in alphabet order.
    #[must_use]
    pub fn others(self) -> SmallVec<[Symbol; Symbol::COUNT]> {
        Symbol::ALL.into_iter().filter(|&s| s != self).collect()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
