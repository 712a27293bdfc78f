//! In-memory ArenaDatabase for tests and local runs.

use std::sync::RwLock;

use arena_core::{
    ArenaDatabase, ArenaZone, Item, StoreError, StoreResult, Team, User, UserId, UserRole,
};

use super::tables::{ArenaTables, CatalogEntry};
use super::transaction::InMemoryTransaction;

/// In-memory implementation of [`ArenaDatabase`].
///
/// A transaction holds the write lock for its whole lifetime and works on a
/// private copy of the tables, so transactions are fully serialized and an
/// uncommitted transaction never leaks partial writes.
pub struct InMemoryArenaStore {
    tables: RwLock<ArenaTables>,
}

impl InMemoryArenaStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(ArenaTables::default()),
        }
    }

    /// Add an item to the catalog, enabled.
    pub fn insert_item(&self, item: Item) -> StoreResult<()> {
        let mut tables = self.write()?;
        tables.reserve_id(item.id.0);
        tables.catalog.push(CatalogEntry {
            item,
            enabled: true,
        });
        Ok(())
    }

    pub fn insert_zone(&self, zone: ArenaZone) -> StoreResult<()> {
        let mut tables = self.write()?;
        tables.reserve_id(zone.id.0);
        tables.zones.push(zone);
        Ok(())
    }

    /// Register a user, returning the stored row.
    pub fn register_user(
        &self,
        slack_id: &str,
        display_name: &str,
        role: UserRole,
    ) -> StoreResult<User> {
        let mut tables = self.write()?;
        if let Some(existing) = tables.user_by_slack_id(slack_id) {
            return Ok(existing.clone());
        }
        let user = User::new(UserId(tables.next_id()), slack_id, display_name).with_role(role);
        tables.users.push(user.clone());
        Ok(user)
    }

    /// Put an existing user in a team, creating the team on first use.
    pub fn assign_team(&self, user: UserId, team_name: &str, emoji: &str) -> StoreResult<Team> {
        let mut tables = self.write()?;
        let team = match tables.team_by_name(team_name) {
            Some(team) => team.clone(),
            None => tables.create_team(team_name, emoji),
        };
        tables.user_mut(user)?.team = Some(team.clone());
        Ok(team)
    }

    /// Number of enabled catalog items.
    pub fn enabled_item_count(&self) -> StoreResult<usize> {
        let tables = self.tables.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(tables.catalog.iter().filter(|entry| entry.enabled).count())
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, ArenaTables>> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryArenaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaDatabase for InMemoryArenaStore {
    type Tx<'a> = InMemoryTransaction<'a>;

    fn begin(&self) -> StoreResult<Self::Tx<'_>> {
        let guard = self.write()?;
        Ok(InMemoryTransaction::new(guard))
    }
}
