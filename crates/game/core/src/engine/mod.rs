//! Arena rules engine.
//!
//! [`ArenaEngine`] bundles the rule configuration with the operations that
//! run inside a caller-owned transaction. It holds no game state of its own:
//! players come in as explicit values, storage goes through the transaction
//! handle and outcomes leave through a [`Notifier`].

mod kill;
mod loot;
mod performance;
pub mod replies;
mod zones;

pub use kill::resolve_kill;
pub use loot::{
    HealthKitDecision, HealthKitLoot, LootReport, WeaponLoot, WeaponPlan, aggressive_loot,
    decide_health_kit, plan_weapon_loot,
};
pub use performance::{
    FIRST_BLOOD_HEADER, outstanding_performance_report, performance_action_header,
    rank_performance, ranking_line, top_player_performance,
};
pub use zones::clear_game_zones;

use crate::config::ArenaConfig;
use crate::error::StoreResult;
use crate::notify::Notifier;
use crate::state::{ArenaPlayer, GameId};
use crate::store::{InventoryStore, PerformanceStore, PlayerStore, ZoneStore};

#[derive(Clone, Debug, Default)]
pub struct ArenaEngine {
    config: ArenaConfig,
}

impl ArenaEngine {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Transfer loot from `dead` to `killer`. See [`aggressive_loot`].
    pub fn aggressive_loot<T, N>(
        &self,
        killer: &mut ArenaPlayer,
        dead: &mut ArenaPlayer,
        tx: &mut T,
        notifier: &N,
    ) -> StoreResult<LootReport>
    where
        T: InventoryStore + PlayerStore + ?Sized,
        N: Notifier + ?Sized,
    {
        aggressive_loot(killer, dead, &self.config, tx, notifier)
    }

    /// Kill `dead`, credit `killer` and loot. See [`resolve_kill`].
    pub fn resolve_kill<T, N>(
        &self,
        killer: &mut ArenaPlayer,
        dead: &mut ArenaPlayer,
        tx: &mut T,
        notifier: &N,
    ) -> StoreResult<LootReport>
    where
        T: InventoryStore + PlayerStore + PerformanceStore + ?Sized,
        N: Notifier + ?Sized,
    {
        resolve_kill(killer, dead, &self.config, tx, notifier)
    }

    pub fn clear_game_zones<T>(&self, game: GameId, tx: &mut T) -> StoreResult<usize>
    where
        T: PlayerStore + ZoneStore + ?Sized,
    {
        clear_game_zones(game, tx)
    }
}
