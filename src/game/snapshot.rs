//! Binary snapshots of a whole game.

use super::Game;
use crate::core::Result;

impl Game {
    /// Serialize the game, deck cursor and equivalence state included.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a game written by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
