//! The game aggregate.
//!
//! A [`Game`] owns one deck, one equivalence state, the ordered roster and
//! the match interaction. Every operation on it is all-or-nothing: inputs
//! are validated (or the change is computed on cheap `im` clones) before
//! anything is committed.
//!
//! ## Lifecycle
//!
//! ```text
//! Waiting ──start──▶ Playing ──end──▶ Finished
//!    └──────────────end──────────────────▲
//! ```
//!
//! Players join while `Waiting`. Draws, claims and resolutions require
//! `Playing`. There is no way back.
//!
//! ```
//! use symbol_clash::core::{GameRng, RulesConfig};
//! use symbol_clash::game::{Game, GameStatus};
//!
//! let mut rng = GameRng::new(1);
//! let config = RulesConfig::default().with_wild_ratio(0.0);
//! let mut game = Game::create("g1".into(), "host".into(), "Ann", ["Movies", "Books"], config, &mut rng).unwrap();
//! game.join("p2".into(), "Ben").unwrap();
//! game.start(&"host".into()).unwrap();
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! let outcome = game.draw(&"p2".into(), &mut rng).unwrap();
//! assert_eq!(outcome.deck_index, 1);
//! ```

mod outcome;
mod snapshot;
mod state;

pub use outcome::{ClaimOutcome, DrawOutcome};
pub use state::Game;

use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle. Only moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Lobby open, players may join.
    #[default]
    Waiting,
    /// Cards are being drawn.
    Playing,
    /// Over; nothing changes any more.
    Finished,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Waiting => write!(f, "waiting"),
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Finished => write!(f, "finished"),
        }
    }
}
