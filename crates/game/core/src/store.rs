//! Storage contracts the Arena rules run against.
//!
//! Every method executes inside the transaction represented by `self`. The
//! rules never open, commit or roll back transactions; the caller owns those
//! boundaries through [`ArenaDatabase`].
//!
//! Implementations:
//! - `arena_runtime::InMemoryArenaStore`: serializable in-memory store used by
//!   the CLI and tests
//! - a relational adapter lives outside this workspace

use chrono::{DateTime, Utc};

use crate::error::StoreResult;
use crate::state::{
    ArenaGame, ArenaPlayer, ArenaZone, GameId, Item, ItemId, NewGame, ParticipantKind,
    PerformanceAction, PerformanceRecord, PlayerId, User, ZoneId,
};

/// Inventory accessor used by the loot rule.
pub trait InventoryStore {
    /// Replace `player.weapons` and `player.items` with the stored rows.
    fn load_full_inventory(&mut self, player: &mut ArenaPlayer) -> StoreResult<()>;

    /// Quantity of `item` held by `player`; zero when there is no entry.
    fn item_count(&self, player: PlayerId, item: ItemId) -> StoreResult<u32>;

    /// Add `amount` (may be negative) to the remaining uses of the player's
    /// entry for `item`. No clamping is applied.
    fn add_ammo(&mut self, player: PlayerId, item: ItemId, amount: i32) -> StoreResult<()>;

    /// Give `player` an entry for `item`.
    ///
    /// Limited-use items start with an empty counter (`Some(0)`); unlimited
    /// items with `None`. An existing entry is reset the same way.
    fn add_weapon(&mut self, player: PlayerId, item: &Item) -> StoreResult<()>;

    /// Delete the player's entry for `item`. Missing entries are ignored.
    fn remove_weapon(&mut self, player: PlayerId, item: ItemId) -> StoreResult<()>;

    /// Increase the stacked quantity of a health kit, creating the entry if needed.
    fn add_health_kit_quantity(
        &mut self,
        player: PlayerId,
        item: ItemId,
        quantity: u32,
    ) -> StoreResult<()>;

    /// Decrease the stacked quantity of a health kit; the entry is deleted at zero.
    fn subtract_health_kit_quantity(
        &mut self,
        player: PlayerId,
        item: ItemId,
        quantity: u32,
    ) -> StoreResult<()>;

    /// Catalog lookup of a health kit by its name.
    fn find_health_kit_by_name(&self, name: &str) -> StoreResult<Option<Item>>;
}

/// Player rows of a game.
pub trait PlayerStore {
    /// Heal `player` by `amount` clamped to `max_health`, reviving the dead.
    /// Persists the change and mirrors it on `player`.
    fn heal_or_revive(
        &mut self,
        player: &mut ArenaPlayer,
        amount: u32,
        max_health: u32,
    ) -> StoreResult<()>;

    /// Set health to zero and flag the player dead.
    fn mark_dead(&mut self, player: &mut ArenaPlayer) -> StoreResult<()>;

    fn find_player(&self, player: PlayerId) -> StoreResult<Option<ArenaPlayer>>;

    /// All participants of a game; spectators only when asked for.
    fn find_players_by_game(
        &self,
        game: GameId,
        include_spectators: bool,
    ) -> StoreResult<Vec<ArenaPlayer>>;

    /// Living combatants of a game; hidden ones only when asked for.
    fn find_living_players_by_game(
        &self,
        game: GameId,
        include_hidden: bool,
    ) -> StoreResult<Vec<ArenaPlayer>>;

    fn find_spectators_by_game(&self, game: GameId) -> StoreResult<Vec<ArenaPlayer>>;

    /// Add `users` to `game` as `kind` and return the rows created. Users
    /// already in the game keep their existing row and are left out.
    fn add_players(
        &mut self,
        game: GameId,
        users: &[User],
        kind: ParticipantKind,
        health: u32,
    ) -> StoreResult<Vec<ArenaPlayer>>;
}

/// Zone membership.
pub trait ZoneStore {
    fn find_active_zones(&self) -> StoreResult<Vec<ArenaZone>>;

    fn activate_all_zones(&mut self) -> StoreResult<()>;

    fn move_player_to_zone(&mut self, player: &mut ArenaPlayer, zone: ZoneId) -> StoreResult<()>;

    /// Drop every zone association of `players`. Players without a zone are
    /// skipped, so repeating the call is a no-op.
    fn remove_players_from_zones(&mut self, players: &[ArenaPlayer]) -> StoreResult<()>;
}

/// Game lifecycle rows.
pub trait GameStore {
    fn find_active_game(&self) -> StoreResult<Option<ArenaGame>>;

    /// The most recently ended game.
    fn find_last_game(&self) -> StoreResult<Option<ArenaGame>>;

    fn start_game(&mut self, game: NewGame) -> StoreResult<ArenaGame>;

    fn end_game(&mut self, game: &mut ArenaGame, now: DateTime<Utc>) -> StoreResult<()>;

    /// Make every catalog item available for the next game.
    fn enable_all_items(&mut self) -> StoreResult<()>;
}

/// Per-game performance counters.
pub trait PerformanceStore {
    /// Add `amount` to the (player, action, game) counter, creating it at zero.
    fn increment_performance(
        &mut self,
        game: GameId,
        player: PlayerId,
        action: PerformanceAction,
        amount: u32,
    ) -> StoreResult<()>;

    /// The first kill recorded in `game`.
    fn find_first_blood(&self, game: GameId) -> StoreResult<Option<PerformanceRecord>>;

    /// Counters of one action for one game, in creation order.
    fn find_players_performance_by_action(
        &self,
        game: GameId,
        action: PerformanceAction,
    ) -> StoreResult<Vec<PerformanceRecord>>;
}

/// Registered users.
pub trait UserStore {
    fn find_user_by_slack_id(&self, slack_id: &str) -> StoreResult<Option<User>>;

    /// Registered users among `slack_ids`, in input order. Unknown ids are skipped.
    fn find_users_by_slack_ids(&self, slack_ids: &[String]) -> StoreResult<Vec<User>>;

    /// Users for `slack_ids`, registering unknown ones. When `team_name` is
    /// given every returned user joins that team, which is created on demand.
    fn get_or_create_bosses_or_guests(
        &mut self,
        slack_ids: &[String],
        team_name: Option<&str>,
        is_boss: bool,
    ) -> StoreResult<Vec<User>>;
}

/// One unit of work over every Arena table.
pub trait ArenaTransaction:
    InventoryStore + PlayerStore + ZoneStore + GameStore + PerformanceStore + UserStore
{
    /// Make every change of this transaction visible.
    fn commit(self) -> StoreResult<()>
    where
        Self: Sized;

    /// Discard every change of this transaction.
    fn rollback(self)
    where
        Self: Sized;
}

/// Source of transactions.
pub trait ArenaDatabase: Send + Sync {
    type Tx<'a>: ArenaTransaction
    where
        Self: 'a;

    fn begin(&self) -> StoreResult<Self::Tx<'_>>;
}
