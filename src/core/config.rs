//! Rules configuration.
//!
//! A game picks its rule variant and deck parameters once, at creation:
//! - `RuleMode`: how wild cards establish symbol equivalences
//! - `RulesConfig`: mode plus wild ratio and lobby size

use serde::{Deserialize, Serialize};

/// Which wild-card variant a game is played with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleMode {
    /// Every wild card drawn adds a permanent symbol pair. Wild cards sit in
    /// the drawer's stack like any other card.
    #[default]
    Persistent,
    /// Wild items never enter a stack; drawing one replaces the single
    /// active pair everyone matches against.
    SingleActive,
}

impl std::fmt::Display for RuleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleMode::Persistent => write!(f, "persistent"),
            RuleMode::SingleActive => write!(f, "single-active"),
        }
    }
}

/// Per-game rules configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Wild-card variant.
    pub mode: RuleMode,

    /// Probability that any single deck item is made wild (default 0.10).
    /// Applied per item, so the actual count varies.
    pub wild_ratio: f64,

    /// Players required before the host can start (default 2).
    pub min_players: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            mode: RuleMode::Persistent,
            wild_ratio: 0.10,
            min_players: 2,
        }
    }
}

impl RulesConfig {
    /// Set the rule variant.
    #[must_use]
    pub fn with_mode(mut self, mode: RuleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the wild ratio. Validated when the deck is generated.
    #[must_use]
    pub fn with_wild_ratio(mut self, ratio: f64) -> Self {
        self.wild_ratio = ratio;
        self
    }

    /// Set the minimum player count for starting.
    #[must_use]
    pub fn with_min_players(mut self, count: usize) -> Self {
        self.min_players = count;
        self
    }
}
