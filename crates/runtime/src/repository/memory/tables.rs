//! Row storage behind the in-memory store.

use arena_core::{
    ArenaGame, ArenaPlayer, ArenaZone, EntityKind, InventoryEntry, Item, ItemId, PlayerId,
    PerformanceRecord, StoreError, StoreResult, Team, TeamId, User, UserId,
};

/// A catalog item and whether it can currently drop in a game.
#[derive(Clone, Debug)]
pub(crate) struct CatalogEntry {
    pub item: Item,
    pub enabled: bool,
}

/// Every table of the arena schema. Rows keep insertion order.
///
/// Players are stored without their inventory view; `weapons` and `items`
/// are filled on demand by `load_full_inventory`.
#[derive(Clone, Debug, Default)]
pub(crate) struct ArenaTables {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub catalog: Vec<CatalogEntry>,
    pub zones: Vec<ArenaZone>,
    pub games: Vec<ArenaGame>,
    pub players: Vec<ArenaPlayer>,
    pub inventory: Vec<InventoryEntry>,
    pub performance: Vec<PerformanceRecord>,
    sequence: u32,
}

impl ArenaTables {
    /// Next value of the shared id sequence.
    pub fn next_id(&mut self) -> u32 {
        self.sequence += 1;
        self.sequence
    }

    /// Keep the sequence ahead of ids chosen by the caller.
    pub fn reserve_id(&mut self, id: u32) {
        self.sequence = self.sequence.max(id);
    }

    pub fn item(&self, id: ItemId) -> StoreResult<&Item> {
        self.catalog
            .iter()
            .map(|entry| &entry.item)
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Item, id))
    }

    pub fn player(&self, id: PlayerId) -> StoreResult<&ArenaPlayer> {
        self.players
            .iter()
            .find(|player| player.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Player, id))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> StoreResult<&mut ArenaPlayer> {
        self.players
            .iter_mut()
            .find(|player| player.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Player, id))
    }

    pub fn entry_mut(&mut self, player: PlayerId, item: ItemId) -> Option<&mut InventoryEntry> {
        self.inventory
            .iter_mut()
            .find(|entry| entry.player_id == player && entry.item_id == item)
    }

    pub fn user_by_slack_id(&self, slack_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.slack_id == slack_id)
    }

    pub fn user_mut(&mut self, id: UserId) -> StoreResult<&mut User> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::User, id))
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams
            .iter()
            .find(|team| team.name.eq_ignore_ascii_case(name))
    }

    pub fn create_team(&mut self, name: &str, emoji: &str) -> Team {
        let team = Team {
            id: TeamId(self.next_id()),
            name: name.to_string(),
            emoji: emoji.to_string(),
        };
        self.teams.push(team.clone());
        team
    }

    /// Attach the player's current display identity to a counter row.
    pub fn with_profile(&self, record: &PerformanceRecord) -> PerformanceRecord {
        let mut joined = record.clone();
        joined.player = self
            .players
            .iter()
            .find(|player| player.id == record.player_id)
            .map(|player| player.profile.clone());
        joined
    }
}
