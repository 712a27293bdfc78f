//! Transaction over the in-memory tables.

use std::sync::RwLockWriteGuard;

use chrono::{DateTime, Utc};

use arena_core::{
    ArenaGame, ArenaPlayer, ArenaTransaction, ArenaZone, EntityKind, GameId, GameStore,
    InventoryEntry, InventoryStore, Item, ItemId, NewGame, OwnedItem, ParticipantKind,
    PerformanceAction, PerformanceRecord, PerformanceStore, PlayerId, PlayerStore, StoreError,
    StoreResult, User, UserId, UserStore, ZoneId, ZoneStore, emoji,
};

use super::tables::ArenaTables;

/// Exclusive unit of work on an [`super::InMemoryArenaStore`].
///
/// Writes go to `working`; `commit` swaps it into the store, while
/// `rollback` (or dropping the transaction) discards it.
pub struct InMemoryTransaction<'a> {
    guard: RwLockWriteGuard<'a, ArenaTables>,
    working: ArenaTables,
}

impl<'a> InMemoryTransaction<'a> {
    pub(crate) fn new(guard: RwLockWriteGuard<'a, ArenaTables>) -> Self {
        let working = guard.clone();
        Self { guard, working }
    }

    /// Overwrite a player's health. Seeding helper; combat damage is not
    /// modelled by the store.
    pub fn set_health(&mut self, player: &mut ArenaPlayer, health: u32) -> StoreResult<()> {
        let row = self.working.player_mut(player.id)?;
        row.health = health;
        row.is_alive = health > 0;
        player.health = row.health;
        player.is_alive = row.is_alive;
        Ok(())
    }

    /// Hide or reveal a player from living-player listings.
    pub fn set_visible(&mut self, player: PlayerId, visible: bool) -> StoreResult<()> {
        self.working.player_mut(player)?.is_visible = visible;
        Ok(())
    }

    /// Raw inventory row, for inspection.
    pub fn inventory_entry(&self, player: PlayerId, item: ItemId) -> Option<InventoryEntry> {
        self.working
            .inventory
            .iter()
            .find(|entry| entry.player_id == player && entry.item_id == item)
            .cloned()
    }

    fn sync_player(&self, player: &mut ArenaPlayer) -> StoreResult<()> {
        let row = self.working.player(player.id)?;
        player.health = row.health;
        player.is_alive = row.is_alive;
        player.zone = row.zone;
        Ok(())
    }
}

impl InventoryStore for InMemoryTransaction<'_> {
    fn load_full_inventory(&mut self, player: &mut ArenaPlayer) -> StoreResult<()> {
        let mut weapons = Vec::new();
        let mut items = Vec::new();
        for entry in self
            .working
            .inventory
            .iter()
            .filter(|entry| entry.player_id == player.id)
        {
            let owned = OwnedItem::new(self.working.item(entry.item_id)?.clone(), entry);
            if owned.item.is_weapon() {
                weapons.push(owned);
            } else {
                items.push(owned);
            }
        }
        player.weapons = weapons;
        player.items = items;
        Ok(())
    }

    fn item_count(&self, player: PlayerId, item: ItemId) -> StoreResult<u32> {
        Ok(self
            .working
            .inventory
            .iter()
            .filter(|entry| entry.player_id == player && entry.item_id == item)
            .map(|entry| entry.quantity)
            .sum())
    }

    fn add_ammo(&mut self, player: PlayerId, item: ItemId, amount: i32) -> StoreResult<()> {
        let entry = self
            .working
            .entry_mut(player, item)
            .ok_or_else(|| StoreError::not_found(EntityKind::InventoryEntry, item))?;
        if let Some(remaining) = entry.remaining_uses.as_mut() {
            *remaining = remaining.saturating_add(amount);
        }
        Ok(())
    }

    fn add_weapon(&mut self, player: PlayerId, item: &Item) -> StoreResult<()> {
        self.working.player(player)?;
        let start = item.usage_limit.map(|_| 0);
        match self.working.entry_mut(player, item.id) {
            Some(entry) => entry.remaining_uses = start,
            None => self
                .working
                .inventory
                .push(InventoryEntry::new(player, item.id, start)),
        }
        Ok(())
    }

    fn remove_weapon(&mut self, player: PlayerId, item: ItemId) -> StoreResult<()> {
        self.working
            .inventory
            .retain(|entry| !(entry.player_id == player && entry.item_id == item));
        Ok(())
    }

    fn add_health_kit_quantity(
        &mut self,
        player: PlayerId,
        item: ItemId,
        quantity: u32,
    ) -> StoreResult<()> {
        self.working.player(player)?;
        self.working.item(item)?;
        match self.working.entry_mut(player, item) {
            Some(entry) => entry.quantity += quantity,
            None => self
                .working
                .inventory
                .push(InventoryEntry::new(player, item, None).with_quantity(quantity)),
        }
        Ok(())
    }

    fn subtract_health_kit_quantity(
        &mut self,
        player: PlayerId,
        item: ItemId,
        quantity: u32,
    ) -> StoreResult<()> {
        if quantity == 0 {
            return Ok(());
        }
        let entry = self
            .working
            .entry_mut(player, item)
            .ok_or_else(|| StoreError::not_found(EntityKind::InventoryEntry, item))?;
        entry.quantity = entry.quantity.saturating_sub(quantity);
        if entry.quantity == 0 {
            self.remove_weapon(player, item)?;
        }
        Ok(())
    }

    fn find_health_kit_by_name(&self, name: &str) -> StoreResult<Option<Item>> {
        Ok(self
            .working
            .catalog
            .iter()
            .map(|entry| &entry.item)
            .find(|item| item.is_health_kit() && item.name == name)
            .cloned())
    }
}

impl PlayerStore for InMemoryTransaction<'_> {
    fn heal_or_revive(
        &mut self,
        player: &mut ArenaPlayer,
        amount: u32,
        max_health: u32,
    ) -> StoreResult<()> {
        self.working
            .player_mut(player.id)?
            .heal_or_revive(amount, max_health);
        self.sync_player(player)
    }

    fn mark_dead(&mut self, player: &mut ArenaPlayer) -> StoreResult<()> {
        self.working.player_mut(player.id)?.mark_dead();
        self.sync_player(player)
    }

    fn find_player(&self, player: PlayerId) -> StoreResult<Option<ArenaPlayer>> {
        Ok(self
            .working
            .players
            .iter()
            .find(|row| row.id == player)
            .cloned())
    }

    fn find_players_by_game(
        &self,
        game: GameId,
        include_spectators: bool,
    ) -> StoreResult<Vec<ArenaPlayer>> {
        Ok(self
            .working
            .players
            .iter()
            .filter(|row| row.game_id == game)
            .filter(|row| include_spectators || row.kind.is_combatant())
            .cloned()
            .collect())
    }

    fn find_living_players_by_game(
        &self,
        game: GameId,
        include_hidden: bool,
    ) -> StoreResult<Vec<ArenaPlayer>> {
        Ok(self
            .working
            .players
            .iter()
            .filter(|row| row.game_id == game && row.kind.is_combatant() && row.is_alive)
            .filter(|row| include_hidden || row.is_visible)
            .cloned()
            .collect())
    }

    fn find_spectators_by_game(&self, game: GameId) -> StoreResult<Vec<ArenaPlayer>> {
        Ok(self
            .working
            .players
            .iter()
            .filter(|row| row.game_id == game && row.kind == ParticipantKind::Spectator)
            .cloned()
            .collect())
    }

    fn add_players(
        &mut self,
        game: GameId,
        users: &[User],
        kind: ParticipantKind,
        health: u32,
    ) -> StoreResult<Vec<ArenaPlayer>> {
        let mut added = Vec::with_capacity(users.len());
        for user in users {
            let joined = self
                .working
                .players
                .iter()
                .any(|row| row.game_id == game && row.user_id == user.id);
            if joined {
                continue;
            }
            let id = PlayerId(self.working.next_id());
            let player =
                ArenaPlayer::new(id, game, user.id, user.profile(), health).with_kind(kind);
            self.working.players.push(player.clone());
            added.push(player);
        }
        Ok(added)
    }
}

impl ZoneStore for InMemoryTransaction<'_> {
    fn find_active_zones(&self) -> StoreResult<Vec<ArenaZone>> {
        Ok(self
            .working
            .zones
            .iter()
            .filter(|zone| zone.is_active)
            .cloned()
            .collect())
    }

    fn activate_all_zones(&mut self) -> StoreResult<()> {
        for zone in &mut self.working.zones {
            zone.is_active = true;
        }
        Ok(())
    }

    fn move_player_to_zone(&mut self, player: &mut ArenaPlayer, zone: ZoneId) -> StoreResult<()> {
        if !self.working.zones.iter().any(|row| row.id == zone) {
            return Err(StoreError::not_found(EntityKind::Zone, zone));
        }
        self.working.player_mut(player.id)?.zone = Some(zone);
        player.zone = Some(zone);
        Ok(())
    }

    fn remove_players_from_zones(&mut self, players: &[ArenaPlayer]) -> StoreResult<()> {
        for player in players {
            self.working.player_mut(player.id)?.zone = None;
        }
        Ok(())
    }
}

impl GameStore for InMemoryTransaction<'_> {
    fn find_active_game(&self) -> StoreResult<Option<ArenaGame>> {
        Ok(self
            .working
            .games
            .iter()
            .filter(|game| game.is_active)
            .max_by_key(|game| (game.started_at, game.id))
            .cloned())
    }

    fn find_last_game(&self) -> StoreResult<Option<ArenaGame>> {
        Ok(self
            .working
            .games
            .iter()
            .filter(|game| !game.is_active)
            .filter_map(|game| game.ended_at.map(|ended| (ended, game)))
            .max_by_key(|(ended, game)| (*ended, game.id))
            .map(|(_, game)| game.clone()))
    }

    fn start_game(&mut self, game: NewGame) -> StoreResult<ArenaGame> {
        let row = ArenaGame {
            id: GameId(self.working.next_id()),
            name: game.name,
            is_active: true,
            team_based: game.team_based,
            started_at: game.started_at,
            ended_at: None,
            created_by: game.created_by,
        };
        self.working.games.push(row.clone());
        Ok(row)
    }

    fn end_game(&mut self, game: &mut ArenaGame, now: DateTime<Utc>) -> StoreResult<()> {
        let row = self
            .working
            .games
            .iter_mut()
            .find(|row| row.id == game.id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Game, game.id))?;
        row.end(now);
        *game = row.clone();
        Ok(())
    }

    fn enable_all_items(&mut self) -> StoreResult<()> {
        for entry in &mut self.working.catalog {
            entry.enabled = true;
        }
        Ok(())
    }
}

impl PerformanceStore for InMemoryTransaction<'_> {
    fn increment_performance(
        &mut self,
        game: GameId,
        player: PlayerId,
        action: PerformanceAction,
        amount: u32,
    ) -> StoreResult<()> {
        let existing = self.working.performance.iter_mut().find(|record| {
            record.game_id == game && record.player_id == player && record.action == action
        });
        match existing {
            Some(record) => record.value = record.value.saturating_add(amount),
            None => self
                .working
                .performance
                .push(PerformanceRecord::new(game, player, action, amount)),
        }
        Ok(())
    }

    fn find_first_blood(&self, game: GameId) -> StoreResult<Option<PerformanceRecord>> {
        Ok(self
            .working
            .performance
            .iter()
            .find(|record| {
                record.game_id == game
                    && record.action == PerformanceAction::Kills
                    && record.value > 0
            })
            .map(|record| self.working.with_profile(record)))
    }

    fn find_players_performance_by_action(
        &self,
        game: GameId,
        action: PerformanceAction,
    ) -> StoreResult<Vec<PerformanceRecord>> {
        Ok(self
            .working
            .performance
            .iter()
            .filter(|record| record.game_id == game && record.action == action)
            .map(|record| self.working.with_profile(record))
            .collect())
    }
}

impl UserStore for InMemoryTransaction<'_> {
    fn find_user_by_slack_id(&self, slack_id: &str) -> StoreResult<Option<User>> {
        Ok(self.working.user_by_slack_id(slack_id).cloned())
    }

    fn find_users_by_slack_ids(&self, slack_ids: &[String]) -> StoreResult<Vec<User>> {
        Ok(slack_ids
            .iter()
            .filter_map(|slack_id| self.working.user_by_slack_id(slack_id))
            .cloned()
            .collect())
    }

    fn get_or_create_bosses_or_guests(
        &mut self,
        slack_ids: &[String],
        team_name: Option<&str>,
        is_boss: bool,
    ) -> StoreResult<Vec<User>> {
        let team = team_name.map(|name| match self.working.team_by_name(name) {
            Some(team) => team.clone(),
            None => {
                let emoji = if is_boss { emoji::BOSS } else { emoji::FREE_AGENT };
                self.working.create_team(name, emoji)
            }
        });

        let mut users = Vec::with_capacity(slack_ids.len());
        for slack_id in slack_ids {
            let id = match self.working.user_by_slack_id(slack_id) {
                Some(user) => user.id,
                None => {
                    let user = User::new(UserId(self.working.next_id()), slack_id, slack_id);
                    let id = user.id;
                    self.working.users.push(user);
                    id
                }
            };
            let user = self.working.user_mut(id)?;
            if let Some(team) = &team {
                user.team = Some(team.clone());
            }
            users.push(user.clone());
        }
        Ok(users)
    }
}

impl ArenaTransaction for InMemoryTransaction<'_> {
    fn commit(self) -> StoreResult<()> {
        let Self { mut guard, working } = self;
        *guard = working;
        Ok(())
    }

    fn rollback(self) {}
}
