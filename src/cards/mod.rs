//! Symbols, cards and deck items.
//!
//! ## Key Types
//!
//! - `Symbol`: One of eight fixed glyphs; matching compares these
//! - `Card`: Category + symbol, optionally flagged wild (persistent mode)
//! - `WildItem`: Two distinct symbols (single-active mode)
//! - `DeckItem`: Either of the above, as stored in a deck

pub mod card;
pub mod symbol;

pub use card::{Card, DeckItem, WildItem, WILD_CATEGORY};
pub use symbol::Symbol;
