//! Results returned by game operations.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, DeckItem};
use crate::core::PlayerId;
use crate::equivalence::EquivalenceState;
use crate::matching::{Match, MatchParticipant};
use crate::resolution::{Claim, Resolution};

/// Everything a draw changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// Who drew.
    pub drawer: PlayerId,
    /// The item taken from the deck.
    pub item: DeckItem,
    /// Deck cursor after the draw.
    pub deck_index: usize,
    /// Card pushed onto the drawer's stack; `None` for a single-active wild.
    pub stack_card: Option<Card>,
    /// Equivalence state after the draw.
    pub equivalence: EquivalenceState,
    /// Match surfaced by this draw, if any.
    pub found_match: Option<Match>,
}

impl DrawOutcome {
    /// The drawer's opponent in the surfaced match.
    ///
    /// `None` when there is no match or when the match (after a
    /// single-active wild) does not involve the drawer.
    #[must_use]
    pub fn opponent(&self) -> Option<&MatchParticipant> {
        self.found_match.as_ref()?.counterpart(&self.drawer)
    }
}

/// How the claimed opponent answered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimOutcome {
    Resolved(Resolution),
    Rejected(Claim),
}
