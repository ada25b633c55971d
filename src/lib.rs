//! # symbol-clash
//!
//! Engine for a real-time party word game. Players take turns drawing cards
//! that show a category and a symbol. When two players' visible cards share a
//! symbol (or symbols made equivalent by a wild), the first to name an
//! example of the other player's category wins the match.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: Drawing, matching and resolution are synchronous
//!    computations over explicit state. No I/O, no clocks, no logging.
//!
//! 2. **All-or-nothing operations**: Every fallible operation validates
//!    first or works on `im` clones, so an `Err` leaves the game untouched.
//!
//! 3. **Deterministic randomness**: All shuffling and wild selection goes
//!    through a seeded `GameRng`. Same seed, same game.
//!
//! ## Rule modes
//!
//! - **Persistent**: wild cards permanently link two symbols for the rest of
//!   the game.
//! - **SingleActive**: wild items set the one active equivalence, replacing
//!   the previous one.
//!
//! ## Modules
//!
//! - `core`: Player and game ids, players, RNG, configuration, errors
//! - `cards`: Symbols, cards, wild items
//! - `deck`: Deck generation and the draw cursor
//! - `equivalence`: Wild equivalence state and the matching predicate
//! - `stack`: Per-player card stacks
//! - `matching`: Match finder over a roster
//! - `resolution`: Win resolution, cascades, claim handshake
//! - `game`: The game aggregate and its lifecycle
//! - `table`: Thread-safe registry of running games

pub mod cards;
pub mod core;
pub mod deck;
pub mod equivalence;
pub mod game;
pub mod matching;
pub mod resolution;
pub mod stack;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    EngineError, Result,
    GameId, Player, PlayerId,
    GameRng,
    RuleMode, RulesConfig,
};

pub use crate::cards::{Card, DeckItem, Symbol, WildItem, WILD_CATEGORY};

pub use crate::deck::Deck;

pub use crate::equivalence::{EquivalenceState, SymbolPair};

pub use crate::stack::CardStack;

pub use crate::matching::{find_match, find_match_against, Match, MatchParticipant};

pub use crate::resolution::{resolve, Claim, MatchInteraction, Resolution};

pub use crate::game::{ClaimOutcome, DrawOutcome, Game, GameStatus};

pub use crate::table::GameTable;
