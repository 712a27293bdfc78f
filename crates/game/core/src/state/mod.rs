//! Arena state types.
//!
//! Everything here is a plain value. Stores hand these out inside a
//! transaction and the rules mutate them through the store traits in
//! [`crate::store`].
mod game;
mod ids;
mod item;
mod performance;
mod player;
mod user;

pub use game::{ArenaGame, ArenaZone, NewGame};
pub use ids::{GameId, ItemId, PlayerId, TeamId, UserId, ZoneId};
pub use item::{InventoryEntry, Item, ItemKind, OwnedItem, RarityTier};
pub use performance::{PerformanceAction, PerformanceRecord};
pub use player::{ArenaPlayer, ParticipantKind};
pub use user::{PlayerProfile, Team, User, UserRole};
