//! Claim / confirm / reject state machine for the open match.

use serde::{Deserialize, Serialize};

use super::engine::{resolve, Resolution};
use crate::core::{EngineError, Player, PlayerId, Result};
use crate::equivalence::EquivalenceState;
use crate::matching::Match;

/// A player's claim to have won the open match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claimer: PlayerId,
    /// The only player allowed to confirm or reject.
    pub opponent: PlayerId,
}

/// The match interaction currently on the table.
///
/// `Resolved` and `Rejected` are not stored: they are the results of
/// [`confirm`](Self::confirm) and [`reject`](Self::reject), after which the
/// interaction is back to `Matched` (cascade) or `NoMatch`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchInteraction {
    #[default]
    NoMatch,
    Matched(Match),
    Claimed { open: Match, claim: Claim },
}

impl MatchInteraction {
    /// Record the result of a match scan.
    ///
    /// A found match supersedes whatever was open, including a pending
    /// claim. `None` leaves the interaction as it is.
    pub fn surface(&mut self, found: Option<Match>) {
        if let Some(found) = found {
            *self = MatchInteraction::Matched(found);
        }
    }

    /// Drop the open match, and any claim on it, once the table no longer
    /// shows it.
    ///
    /// Call after anything that changes top cards or the equivalence state
    /// without surfacing a new match.
    pub fn revalidate(&mut self, players: &[Player], equivalence: &EquivalenceState) {
        if let Some(open) = self.open_match() {
            if !still_holds(open, players, equivalence) {
                *self = MatchInteraction::NoMatch;
            }
        }
    }

    /// The match currently open, claimed or not.
    #[must_use]
    pub fn open_match(&self) -> Option<&Match> {
        match self {
            MatchInteraction::NoMatch => None,
            MatchInteraction::Matched(open) | MatchInteraction::Claimed { open, .. } => Some(open),
        }
    }

    /// The claim waiting for an answer, if any.
    #[must_use]
    pub fn pending_claim(&self) -> Option<&Claim> {
        match self {
            MatchInteraction::Claimed { claim, .. } => Some(claim),
            _ => None,
        }
    }

    /// `claimer` says they beat `opponent` in the open match.
    pub fn claim(&mut self, claimer: &PlayerId, opponent: &PlayerId) -> Result<Claim> {
        let open = match self {
            MatchInteraction::NoMatch => return Err(EngineError::NoOpenMatch),
            MatchInteraction::Claimed { .. } => return Err(EngineError::ClaimPending),
            MatchInteraction::Matched(open) => open,
        };
        if claimer == opponent {
            return Err(EngineError::SelfMatch(claimer.clone()));
        }
        if !open.is_between(claimer, opponent) {
            return Err(EngineError::ClaimMismatch);
        }

        let open = open.clone();
        let claim = Claim {
            claimer: claimer.clone(),
            opponent: opponent.clone(),
        };
        *self = MatchInteraction::Claimed {
            open,
            claim: claim.clone(),
        };
        Ok(claim)
    }

    fn answerable_by(&self, actor: &PlayerId) -> Result<&Claim> {
        let claim = self.pending_claim().ok_or(EngineError::NoPendingClaim)?;
        if claim.opponent != *actor {
            return Err(EngineError::NotClaimedOpponent(actor.clone()));
        }
        Ok(claim)
    }

    /// The claimed opponent accepts: resolve the win.
    ///
    /// Fails with `MatchExpired` if the claimed cards are no longer on top.
    /// On success the interaction moves to the cascading match, if one was
    /// found, or to `NoMatch`. On failure nothing changes.
    pub fn confirm(
        &mut self,
        actor: &PlayerId,
        players: &mut [Player],
        equivalence: &EquivalenceState,
    ) -> Result<Resolution> {
        let claim = self.answerable_by(actor)?.clone();
        if !self.open_match().is_some_and(|open| still_holds(open, players, equivalence)) {
            return Err(EngineError::MatchExpired);
        }
        let resolution = resolve(players, &claim.claimer, &claim.opponent, equivalence)?;

        *self = match &resolution.cascading_match {
            Some(cascade) => MatchInteraction::Matched(cascade.clone()),
            None => MatchInteraction::NoMatch,
        };
        Ok(resolution)
    }

    /// The claimed opponent disputes the claim. Scores and stacks are left
    /// alone and the interaction returns to `NoMatch`.
    pub fn reject(&mut self, actor: &PlayerId) -> Result<Claim> {
        let claim = self.answerable_by(actor)?.clone();
        *self = MatchInteraction::NoMatch;
        Ok(claim)
    }
}

/// Both participants still show matching top cards, `player1` still on the
/// symbol the match was found with.
fn still_holds(open: &Match, players: &[Player], equivalence: &EquivalenceState) -> bool {
    let top = |id: &PlayerId| {
        players
            .iter()
            .find(|p| p.id == *id)
            .and_then(Player::top_card)
            .map(|card| card.symbol)
    };
    match (top(&open.player1.id), top(&open.player2.id)) {
        (Some(s1), Some(s2)) => s1 == open.symbol && equivalence.matches(s1, s2),
        _ => false,
    }
}
