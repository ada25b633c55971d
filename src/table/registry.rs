use std::sync::{Arc, LockResult, Mutex, RwLock};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use crate::core::{EngineError, GameId, GameRng, PlayerId, Result, RulesConfig};
use crate::game::{ClaimOutcome, DrawOutcome, Game, GameStatus};
use crate::resolution::{Claim, Resolution};

/// A game plus the random stream its draws consume.
#[derive(Debug)]
struct TableEntry {
    game: Game,
    rng: GameRng,
    registered: Instant,
}

/// Registry of games keyed by id.
///
/// Safe to share between threads (`Arc<GameTable>`).
#[derive(Debug)]
pub struct GameTable {
    games: RwLock<FxHashMap<GameId, Arc<Mutex<TableEntry>>>>,
    seeds: Mutex<GameRng>,
}

impl GameTable {
    /// Every registered game gets a stream forked from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            games: RwLock::new(FxHashMap::default()),
            seeds: Mutex::new(GameRng::new(seed)),
        }
    }

    /// Seeded from OS entropy, for live play.
    pub fn from_entropy() -> Self {
        Self {
            games: RwLock::new(FxHashMap::default()),
            seeds: Mutex::new(GameRng::from_entropy()),
        }
    }

    // === Registry ===

    /// Generate a deck, create the game and register it.
    pub fn create_game<I, S>(
        &self,
        id: GameId,
        host_id: PlayerId,
        host_name: impl Into<String>,
        categories: I,
        config: RulesConfig,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.contains(&id) {
            return Err(EngineError::DuplicateGame(id));
        }
        let mut rng = self.fork_rng();
        let game = Game::create(id, host_id, host_name, categories, config, &mut rng)?;
        self.register(game, rng)
    }

    /// Register an already built game, e.g. one restored from a snapshot.
    pub fn insert(&self, game: Game) -> Result<()> {
        let rng = self.fork_rng();
        self.register(game, rng)
    }

    fn register(&self, game: Game, rng: GameRng) -> Result<()> {
        let mut games = recover(self.games.write(), "table");
        let id = game.id().clone();
        if games.contains_key(&id) {
            return Err(EngineError::DuplicateGame(id));
        }
        info!("{id} registered ({} mode, {} items)", game.config().mode, game.deck().len());
        let entry = TableEntry {
            game,
            rng,
            registered: Instant::now(),
        };
        games.insert(id, Arc::new(Mutex::new(entry)));
        Ok(())
    }

    /// Unregister a game and hand back its final state.
    pub fn remove(&self, id: &GameId) -> Result<Game> {
        let entry = recover(self.games.write(), "table")
            .remove(id)
            .ok_or_else(|| EngineError::GameNotFound(id.clone()))?;
        info!("{id} removed");
        let game = recover(entry.lock(), "game").game.clone();
        Ok(game)
    }

    #[must_use]
    pub fn contains(&self, id: &GameId) -> bool {
        recover(self.games.read(), "table").contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        recover(self.games.read(), "table").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered ids, in no particular order.
    #[must_use]
    pub fn game_ids(&self) -> Vec<GameId> {
        recover(self.games.read(), "table").keys().cloned().collect()
    }

    /// Run `f` with the game locked.
    ///
    /// The table lock is released before `f` runs; only this game's mutex is
    /// held.
    pub fn with_game<R>(
        &self,
        id: &GameId,
        f: impl FnOnce(&mut Game, &mut GameRng) -> Result<R>,
    ) -> Result<R> {
        let entry = recover(self.games.read(), "table")
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::GameNotFound(id.clone()))?;
        let mut guard = recover(entry.lock(), "game");
        let TableEntry { game, rng, .. } = &mut *guard;
        f(game, rng)
    }

    /// Copy of the current game state.
    pub fn snapshot(&self, id: &GameId) -> Result<Game> {
        self.with_game(id, |game, _| Ok(game.clone()))
    }

    // === Pruning ===

    /// Unregister every game for which `keep` returns false and return
    /// their ids, sorted.
    ///
    /// `keep` sees each game under its own lock together with the time since
    /// it was registered (a restored game starts over at zero). The table
    /// lock is not held while `keep` runs.
    pub fn retain(&self, mut keep: impl FnMut(&Game, Duration) -> bool) -> Vec<GameId> {
        let entries: Vec<(GameId, Arc<Mutex<TableEntry>>)> = recover(self.games.read(), "table")
            .iter()
            .map(|(id, entry)| (id.clone(), Arc::clone(entry)))
            .collect();
        let doomed: Vec<(GameId, Arc<Mutex<TableEntry>>)> = entries
            .into_iter()
            .filter(|(_, entry)| {
                let entry = recover(entry.lock(), "game");
                !keep(&entry.game, entry.registered.elapsed())
            })
            .collect();
        if doomed.is_empty() {
            return Vec::new();
        }

        let mut games = recover(self.games.write(), "table");
        // Skip ids that were removed and registered again meanwhile.
        let mut removed: Vec<GameId> = doomed
            .into_iter()
            .filter(|(id, entry)| games.get(id).is_some_and(|current| Arc::ptr_eq(current, entry)))
            .map(|(id, _)| id)
            .collect();
        for id in &removed {
            games.remove(id);
            info!("{id} pruned");
        }
        removed.sort();
        removed
    }

    /// Unregister finished games.
    pub fn remove_finished(&self) -> Vec<GameId> {
        self.retain(|game, _| game.status() != GameStatus::Finished)
    }

    /// Unregister games registered at least `max_age` ago, whatever their
    /// status.
    pub fn remove_older_than(&self, max_age: Duration) -> Vec<GameId> {
        self.retain(|_, age| age < max_age)
    }

    // === Game operations ===

    pub fn join(&self, id: &GameId, player: PlayerId, name: impl Into<String>) -> Result<()> {
        self.with_game(id, |game, _| {
            let name = game.join(player, name)?.name.clone();
            info!("{name} joined {id}");
            Ok(())
        })
    }

    pub fn start(&self, id: &GameId, actor: &PlayerId) -> Result<()> {
        self.with_game(id, |game, _| {
            game.start(actor)?;
            info!("{id} started with {} players", game.players().len());
            Ok(())
        })
    }

    pub fn end(&self, id: &GameId, actor: &PlayerId) -> Result<()> {
        self.with_game(id, |game, _| {
            game.end(actor)?;
            info!("{id} finished");
            Ok(())
        })
    }

    pub fn draw(&self, id: &GameId, drawer: &PlayerId) -> Result<DrawOutcome> {
        self.with_game(id, |game, rng| {
            let outcome = game.draw(drawer, rng)?;
            debug!(
                "{id}: {drawer} drew item {} of {}, match: {:?}",
                outcome.deck_index,
                game.deck().len(),
                outcome.found_match.as_ref().map(|m| (&m.player1.id, &m.player2.id))
            );
            Ok(outcome)
        })
    }

    pub fn claim_win(&self, id: &GameId, claimer: &PlayerId, opponent: &PlayerId) -> Result<Claim> {
        self.with_game(id, |game, _| {
            let claim = game.claim_win(claimer, opponent)?;
            debug!("{id}: {claimer} claims a win over {opponent}");
            Ok(claim)
        })
    }

    pub fn respond_to_claim(
        &self,
        id: &GameId,
        actor: &PlayerId,
        confirmed: bool,
    ) -> Result<ClaimOutcome> {
        self.with_game(id, |game, _| {
            let outcome = game.respond_to_claim(actor, confirmed)?;
            match &outcome {
                ClaimOutcome::Resolved(res) => log_resolution(id, res),
                ClaimOutcome::Rejected(claim) => {
                    debug!("{id}: {actor} rejected the claim by {}", claim.claimer)
                }
            }
            Ok(outcome)
        })
    }

    pub fn resolve(&self, id: &GameId, winner: &PlayerId, loser: &PlayerId) -> Result<Resolution> {
        self.with_game(id, |game, _| {
            let resolution = game.resolve(winner, loser)?;
            log_resolution(id, &resolution);
            Ok(resolution)
        })
    }

    fn fork_rng(&self) -> GameRng {
        recover(self.seeds.lock(), "seed stream").fork()
    }
}

fn log_resolution(id: &GameId, res: &Resolution) {
    debug!(
        "{id}: {} beat {} (score {}), cascade: {}",
        res.winner,
        res.loser,
        res.new_score,
        res.cascading_match.is_some()
    );
}

/// Take the guard even if a previous holder panicked. Game operations
/// validate before they mutate, so the state behind the lock is whole.
fn recover<G>(result: LockResult<G>, what: &str) -> G {
    result.unwrap_or_else(|poisoned| {
        warn!("recovering poisoned {what} lock");
        poisoned.into_inner()
    })
}
