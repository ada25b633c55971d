//! Win resolution with cascade detection.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{EngineError, Player, PlayerId, Result};
use crate::equivalence::EquivalenceState;
use crate::matching::{find_match_against, Match};

/// Outcome of a resolved win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub winner: PlayerId,
    pub loser: PlayerId,
    /// Winner's score after the increment.
    pub new_score: u32,
    /// Loser's new top card, if the stack is not empty.
    pub revealed_card: Option<Card>,
    /// Match between the loser's revealed card and another player, if any.
    /// `player1` is always the loser.
    pub cascading_match: Option<Match>,
}

/// Apply a win of `winner` over `loser`.
///
/// Both ids are checked before anything changes. On success the winner's
/// score goes up by one, the loser's top card is removed (a no-op on an
/// empty stack) and the loser's revealed card is matched against every other
/// player in roster order, the winner included. No other player changes.
pub fn resolve(
    players: &mut [Player],
    winner: &PlayerId,
    loser: &PlayerId,
    equivalence: &EquivalenceState,
) -> Result<Resolution> {
    let winner_idx = players.iter().position(|p| p.id == *winner);
    let loser_idx = players.iter().position(|p| p.id == *loser);

    let (winner_idx, loser_idx) = match (winner_idx, loser_idx) {
        (Some(w), Some(l)) => (w, l),
        (w, l) => {
            let missing = [(w, winner), (l, loser)]
                .into_iter()
                .filter(|(idx, _)| idx.is_none())
                .map(|(_, id)| id.clone())
                .collect();
            return Err(EngineError::PlayersNotFound { missing });
        }
    };
    if winner_idx == loser_idx {
        return Err(EngineError::SelfMatch(winner.clone()));
    }

    let winner_player = &mut players[winner_idx];
    winner_player.score = winner_player.score.saturating_add(1);
    let new_score = winner_player.score;

    players[loser_idx].card_stack.pop_top();

    let loser_player = &players[loser_idx];
    let revealed_card = loser_player.top_card().cloned();
    let cascading_match = find_match_against(loser_player, players.iter(), equivalence);

    Ok(Resolution {
        winner: winner.clone(),
        loser: loser.clone(),
        new_score,
        revealed_card,
        cascading_match,
    })
}
