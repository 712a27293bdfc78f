//! Kill resolution: the victim falls, the killer is credited and loots.

use tracing::info;

use super::loot::{LootReport, aggressive_loot};
use super::replies;
use crate::config::ArenaConfig;
use crate::error::StoreResult;
use crate::notify::{Notification, Notifier};
use crate::state::{ArenaPlayer, PerformanceAction};
use crate::store::{InventoryStore, PerformanceStore, PlayerStore};

pub fn resolve_kill<T, N>(
    killer: &mut ArenaPlayer,
    dead: &mut ArenaPlayer,
    config: &ArenaConfig,
    tx: &mut T,
    notifier: &N,
) -> StoreResult<LootReport>
where
    T: InventoryStore + PlayerStore + PerformanceStore + ?Sized,
    N: Notifier + ?Sized,
{
    tx.mark_dead(dead)?;
    tx.increment_performance(killer.game_id, killer.id, PerformanceAction::Kills, 1)?;
    info!(killer = %killer.id, dead = %dead.id, game = %killer.game_id, "player killed");
    notifier.publish(Notification::engine(replies::player_killed(killer, dead)));

    aggressive_loot(killer, dead, config, tx, notifier)
}
