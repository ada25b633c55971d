//! `Game`: roster, deck, equivalence state and match interaction.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::outcome::{ClaimOutcome, DrawOutcome};
use super::GameStatus;
use crate::cards::{Card, DeckItem};
use crate::core::{EngineError, GameId, GameRng, Player, PlayerId, Result, RuleMode, RulesConfig};
use crate::deck::Deck;
use crate::equivalence::EquivalenceState;
use crate::matching::{find_match, find_match_against, Match};
use crate::resolution::{resolve, Claim, MatchInteraction, Resolution};

/// One game.
///
/// The game exclusively owns its deck and equivalence state. Players are
/// kept in join order; that order is the tie-break for every match scan.
///
/// Deserializing checks the same invariants the operations maintain, so a
/// tampered snapshot is rejected instead of restored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameParts")]
pub struct Game {
    id: GameId,
    status: GameStatus,
    host_id: PlayerId,
    config: RulesConfig,
    deck: Deck,
    equivalence: EquivalenceState,
    players: Vec<Player>,
    interaction: MatchInteraction,
}

// Field order must match `Game`: bincode is positional.
#[derive(Deserialize)]
struct GameParts {
    id: GameId,
    status: GameStatus,
    host_id: PlayerId,
    config: RulesConfig,
    deck: Deck,
    equivalence: EquivalenceState,
    players: Vec<Player>,
    interaction: MatchInteraction,
}

impl TryFrom<GameParts> for Game {
    type Error = EngineError;

    fn try_from(parts: GameParts) -> Result<Self> {
        let mode = parts.config.mode;
        if parts.equivalence.mode() != mode
            || !parts.deck.items().all(|item| item_fits_mode(item, mode))
        {
            return Err(EngineError::ModeMismatch { mode });
        }

        let mut ids = FxHashSet::default();
        let mut names = FxHashSet::default();
        for player in &parts.players {
            if !ids.insert(&player.id) {
                return Err(EngineError::DuplicatePlayer(player.id.clone()));
            }
            if !names.insert(player.name.as_str()) {
                return Err(EngineError::NameTaken(player.name.clone()));
            }
            if player.is_host != (player.id == parts.host_id) {
                return Err(EngineError::Snapshot(format!(
                    "host flag on {} disagrees with host {}",
                    player.id, parts.host_id
                )));
            }
        }
        if !ids.contains(&parts.host_id) {
            return Err(EngineError::Snapshot(format!(
                "host {} is not in the roster",
                parts.host_id
            )));
        }
        if parts.status == GameStatus::Waiting && parts.deck.index() > 0 {
            return Err(EngineError::Snapshot("cards drawn before the game started".into()));
        }

        if let MatchInteraction::Claimed { open, claim } = &parts.interaction {
            if !open.is_between(&claim.claimer, &claim.opponent) {
                return Err(EngineError::Snapshot(
                    "pending claim does not name the open match".into(),
                ));
            }
        }
        let mut checked = parts.interaction.clone();
        checked.revalidate(&parts.players, &parts.equivalence);
        if checked != parts.interaction {
            return Err(EngineError::Snapshot(
                "open match does not hold on the table".into(),
            ));
        }

        Ok(Self {
            id: parts.id,
            status: parts.status,
            host_id: parts.host_id,
            config: parts.config,
            deck: parts.deck,
            equivalence: parts.equivalence,
            players: parts.players,
            interaction: parts.interaction,
        })
    }
}

impl Game {
    /// Create a game in `Waiting` with the host as its only player.
    ///
    /// Fails with `EmptyName` for a blank host name and `ModeMismatch` if the
    /// deck holds items the configured mode cannot draw.
    pub fn new(
        id: GameId,
        host_id: PlayerId,
        host_name: impl Into<String>,
        deck: Deck,
        config: RulesConfig,
    ) -> Result<Self> {
        let host_name = normalize_name(host_name.into())?;
        if !deck.items().all(|item| item_fits_mode(item, config.mode)) {
            return Err(EngineError::ModeMismatch { mode: config.mode });
        }

        Ok(Self {
            id,
            status: GameStatus::Waiting,
            host_id: host_id.clone(),
            equivalence: EquivalenceState::new(config.mode),
            config,
            deck,
            players: vec![Player::new(host_id, host_name).as_host()],
            interaction: MatchInteraction::NoMatch,
        })
    }

    /// Generate a deck from `categories` and create the game around it.
    pub fn create<I, S>(
        id: GameId,
        host_id: PlayerId,
        host_name: impl Into<String>,
        categories: I,
        config: RulesConfig,
        rng: &mut GameRng,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let deck = Deck::generate(categories, config.mode, config.wild_ratio, rng)?;
        Self::new(id, host_id, host_name, deck, config)
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn host_id(&self) -> &PlayerId {
        &self.host_id
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn equivalence(&self) -> &EquivalenceState {
        &self.equivalence
    }

    /// Roster in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    /// A player's visible card.
    pub fn top_card(&self, id: &PlayerId) -> Result<Option<&Card>> {
        let player = self.player(id).ok_or_else(|| EngineError::PlayerNotFound(id.clone()))?;
        Ok(player.top_card())
    }

    /// The open match and any pending claim.
    #[must_use]
    pub fn interaction(&self) -> &MatchInteraction {
        &self.interaction
    }

    /// Players by score, highest first; ties keep join order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    // === Lobby ===

    /// Add a player while the lobby is open.
    pub fn join(&mut self, id: PlayerId, name: impl Into<String>) -> Result<&Player> {
        self.require_status(GameStatus::Waiting, "join")?;
        let name = normalize_name(name.into())?;
        if self.player(&id).is_some() {
            return Err(EngineError::DuplicatePlayer(id));
        }
        if self.players.iter().any(|p| p.name == name) {
            return Err(EngineError::NameTaken(name));
        }

        self.players.push(Player::new(id, name));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Host starts the game once enough players have joined.
    pub fn start(&mut self, actor: &PlayerId) -> Result<()> {
        self.require_host(actor)?;
        self.require_status(GameStatus::Waiting, "start")?;
        if self.players.len() < self.config.min_players {
            return Err(EngineError::NotEnoughPlayers {
                required: self.config.min_players,
                found: self.players.len(),
            });
        }
        self.status = GameStatus::Playing;
        Ok(())
    }

    /// Host ends the game, from the lobby or mid-play.
    pub fn end(&mut self, actor: &PlayerId) -> Result<()> {
        self.require_host(actor)?;
        if self.status == GameStatus::Finished {
            return Err(EngineError::InvalidStatus { operation: "end", status: self.status });
        }
        self.status = GameStatus::Finished;
        Ok(())
    }

    // === Play ===

    /// Draw the next deck item for `drawer`.
    ///
    /// The item updates the equivalence state; a card lands on top of the
    /// drawer's stack and is checked against every other player's top card.
    /// A single-active wild lands nowhere, so the whole roster is rescanned
    /// under the new active pair instead. A match found here supersedes the
    /// open one; otherwise the open match is dropped if the draw covered one
    /// of its cards or unlinked its symbols.
    ///
    /// Fails with `DeckExhausted` when the deck is used up. Nothing changes on
    /// failure.
    pub fn draw(&mut self, drawer: &PlayerId, rng: &mut GameRng) -> Result<DrawOutcome> {
        self.require_status(GameStatus::Playing, "draw")?;
        let drawer_idx = self.index_of(drawer)?;

        let mut deck = self.deck.clone();
        let item = deck.draw()?;
        let mut equivalence = self.equivalence.clone();
        let stack_card = equivalence.observe_draw(&item, rng)?;

        self.deck = deck;
        self.equivalence = equivalence;

        let found_match = match &stack_card {
            Some(card) => {
                self.players[drawer_idx].card_stack.push(card.clone());
                find_match_against(&self.players[drawer_idx], &self.players, &self.equivalence)
            }
            None => find_match(&self.players, &self.equivalence, None),
        };
        match &found_match {
            Some(found) => self.interaction.surface(Some(found.clone())),
            None => self.interaction.revalidate(&self.players, &self.equivalence),
        }

        Ok(DrawOutcome {
            drawer: drawer.clone(),
            item,
            deck_index: self.deck.index(),
            stack_card,
            equivalence: self.equivalence.clone(),
            found_match,
        })
    }

    /// First match anywhere in the roster.
    #[must_use]
    pub fn find_match(&self) -> Option<Match> {
        find_match(&self.players, &self.equivalence, None)
    }

    /// First match among everyone except `excluded`.
    pub fn find_match_excluding(&self, excluded: &PlayerId) -> Result<Option<Match>> {
        self.index_of(excluded)?;
        Ok(find_match(&self.players, &self.equivalence, Some(excluded)))
    }

    /// `claimer` claims a win over `opponent` in the open match.
    pub fn claim_win(&mut self, claimer: &PlayerId, opponent: &PlayerId) -> Result<Claim> {
        self.require_status(GameStatus::Playing, "claim")?;
        self.index_of(claimer)?;
        self.index_of(opponent)?;
        self.interaction.claim(claimer, opponent)
    }

    /// The claimed opponent confirms (resolving the win) or rejects.
    pub fn respond_to_claim(&mut self, actor: &PlayerId, confirmed: bool) -> Result<ClaimOutcome> {
        self.require_status(GameStatus::Playing, "answer a claim")?;
        if confirmed {
            let resolution = self
                .interaction
                .confirm(actor, &mut self.players, &self.equivalence)?;
            Ok(ClaimOutcome::Resolved(resolution))
        } else {
            self.interaction.reject(actor).map(ClaimOutcome::Rejected)
        }
    }

    /// Resolve a win directly, without the claim handshake.
    ///
    /// Whatever match was open is replaced by the cascading match, or
    /// cleared if there is none.
    pub fn resolve(&mut self, winner: &PlayerId, loser: &PlayerId) -> Result<Resolution> {
        self.require_status(GameStatus::Playing, "resolve")?;
        let resolution = resolve(&mut self.players, winner, loser, &self.equivalence)?;
        self.interaction = match &resolution.cascading_match {
            Some(cascade) => MatchInteraction::Matched(cascade.clone()),
            None => MatchInteraction::NoMatch,
        };
        Ok(resolution)
    }

    // === Helpers ===

    fn index_of(&self, id: &PlayerId) -> Result<usize> {
        self.players
            .iter()
            .position(|p| p.id == *id)
            .ok_or_else(|| EngineError::PlayerNotFound(id.clone()))
    }

    fn require_status(&self, expected: GameStatus, operation: &'static str) -> Result<()> {
        if self.status != expected {
            return Err(EngineError::InvalidStatus { operation, status: self.status });
        }
        Ok(())
    }

    fn require_host(&self, actor: &PlayerId) -> Result<()> {
        self.index_of(actor)?;
        if *actor != self.host_id {
            return Err(EngineError::NotHost(actor.clone()));
        }
        Ok(())
    }
}

fn normalize_name(name: String) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(EngineError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn item_fits_mode(item: &DeckItem, mode: RuleMode) -> bool {
    match (item, mode) {
        (DeckItem::Wild(_), RuleMode::Persistent) => false,
        (DeckItem::Card(card), RuleMode::SingleActive) => !card.is_wild,
        _ => true,
    }
}
