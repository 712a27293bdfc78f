//! Arena rules and the storage contracts they run against.
//!
//! `arena-core` defines the canonical Arena rules (kill resolution, loot
//! transfer, rarity ranking, performance ranking, zone cleanup) together with
//! the state types and store traits they operate on. It owns no storage and
//! no transport: callers open a transaction, pass it in together with the
//! players involved, and decide whether to commit.
pub mod config;
pub mod emoji;
pub mod engine;
pub mod error;
pub mod notify;
pub mod rarity;
pub mod state;
pub mod store;

pub use config::ArenaConfig;
pub use engine::{
    ArenaEngine, HealthKitLoot, LootReport, WeaponLoot, aggressive_loot, clear_game_zones,
    resolve_kill, top_player_performance,
};
pub use error::{EntityKind, ErrorSeverity, StoreError, StoreResult};
pub use notify::{Notification, NotificationKind, Notifier, RecordingNotifier};
pub use rarity::{best_by_rarity, best_weapon, rarity_weight};
pub use state::{
    ArenaGame, ArenaPlayer, ArenaZone, GameId, InventoryEntry, Item, ItemId, ItemKind, NewGame,
    OwnedItem, ParticipantKind, PerformanceAction, PerformanceRecord, PlayerId, PlayerProfile,
    RarityTier, Team, TeamId, User, UserId, UserRole, ZoneId,
};
pub use store::{
    ArenaDatabase, ArenaTransaction, GameStore, InventoryStore, PerformanceStore, PlayerStore,
    UserStore, ZoneStore,
};
