//! Serializable view of the active game.

use serde::{Deserialize, Serialize};

use arena_core::{ArenaGame, ArenaPlayer, ArenaZone};

use crate::api::{Result, RuntimeError};

/// Snapshot returned by `current_state`.
///
/// Combatants carry their loaded inventories; spectators are listed apart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaGameState {
    pub game: ArenaGame,
    pub players: Vec<ArenaPlayer>,
    pub spectators: Vec<ArenaPlayer>,
    pub zones: Vec<ArenaZone>,
}

impl ArenaGameState {
    pub fn living_players(&self) -> impl Iterator<Item = &ArenaPlayer> {
        self.players.iter().filter(|player| player.is_alive)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(RuntimeError::Snapshot)
    }
}
