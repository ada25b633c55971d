//! Engine error taxonomy.
//!
//! Every failure is a value. An operation that returns `Err` has changed
//! nothing: there is no partially drawn or partially resolved state.

use thiserror::Error;

use super::config::RuleMode;
use super::player::{GameId, PlayerId};
use crate::cards::Symbol;
use crate::game::GameStatus;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Everything that can go wrong in the engine.
///
/// Variants are grouped by the layer that reports them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    // Deck
    /// Draw attempted after the last item. Recoverable: the game goes on.
    #[error("no more cards in the deck")]
    DeckExhausted,
    /// Deck built from no items.
    #[error("a deck needs at least one item")]
    EmptyDeck,
    /// Deck generation given no categories.
    #[error("deck generation needs at least one category")]
    EmptyCategorySet,
    /// Wild ratio outside `[0, 1]` or NaN.
    #[error("wild ratio must be within [0, 1], got {0}")]
    InvalidWildRatio(f64),
    /// Wild item whose two symbols are the same.
    #[error("wild item pairs {0} with itself")]
    InvalidWildPair(Symbol),
    /// Deck item or equivalence state from the other rule mode.
    #[error("deck item is not valid in {mode} mode")]
    ModeMismatch { mode: RuleMode },

    // Roster
    /// Unknown player id.
    #[error("{0} is not in this game")]
    PlayerNotFound(PlayerId),
    /// Resolution named players missing from the roster.
    #[error("players not found: {missing:?}")]
    PlayersNotFound { missing: Vec<PlayerId> },
    /// Winner and loser are the same player.
    #[error("{0} cannot win against themselves")]
    SelfMatch(PlayerId),
    /// Joining with an id already in the roster.
    #[error("{0} already joined")]
    DuplicatePlayer(PlayerId),
    /// Joining with another player's display name.
    #[error("player name {0:?} already taken")]
    NameTaken(String),
    /// Blank display name.
    #[error("player name is required")]
    EmptyName,

    // Lifecycle
    /// Operation not allowed in the game's current status.
    #[error("cannot {operation} while game is {status}")]
    InvalidStatus {
        operation: &'static str,
        status: GameStatus,
    },
    /// Only the host may start or end the game.
    #[error("{0} is not the host")]
    NotHost(PlayerId),
    /// Start attempted below `min_players`.
    #[error("need at least {required} players, have {found}")]
    NotEnoughPlayers { required: usize, found: usize },

    // Claims
    /// Claim with nothing on the table.
    #[error("there is no open match to claim")]
    NoOpenMatch,
    /// Claim naming anyone other than the open match's two players.
    #[error("claim does not name the two players of the open match")]
    ClaimMismatch,
    /// The claimed match's top cards no longer match.
    #[error("the claimed match no longer holds")]
    MatchExpired,
    /// Second claim while one is waiting for an answer.
    #[error("a claim is already waiting for an answer")]
    ClaimPending,
    /// Answer with no claim pending.
    #[error("there is no pending claim")]
    NoPendingClaim,
    /// Only the claimed opponent may answer.
    #[error("{0} is not the claimed opponent")]
    NotClaimedOpponent(PlayerId),

    // Table
    /// Unknown game id in the table.
    #[error("{0} not found")]
    GameNotFound(GameId),
    /// Game id already in the table.
    #[error("{0} is already registered")]
    DuplicateGame(GameId),

    /// Snapshot could not be encoded, decoded or failed validation.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(value: bincode::Error) -> Self {
        Self::Snapshot(value.to_string())
    }
}
