//! End-of-game zone cleanup.

use tracing::debug;

use crate::error::StoreResult;
use crate::state::GameId;
use crate::store::{PlayerStore, ZoneStore};

/// Remove every combatant of `game` from its zone.
///
/// Returns how many players were inspected. Safe to repeat.
pub fn clear_game_zones<T>(game: GameId, tx: &mut T) -> StoreResult<usize>
where
    T: PlayerStore + ZoneStore + ?Sized,
{
    let players = tx.find_players_by_game(game, false)?;
    tx.remove_players_from_zones(&players)?;
    debug!(game = %game, players = players.len(), "cleared arena zones");
    Ok(players.len())
}
