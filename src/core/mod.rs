//! Core engine types: identifiers, players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of it knows about
//! decks or matching rules.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{RuleMode, RulesConfig};
pub use error::{EngineError, Result};
pub use player::{GameId, Player, PlayerId};
pub use rng::GameRng;
