//! Arena participants.

use super::{GameId, ItemId, OwnedItem, PlayerId, PlayerProfile, UserId, ZoneId};

/// How a user takes part in a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ParticipantKind {
    #[default]
    Player,
    Boss,
    Guest,
    Spectator,
}

impl ParticipantKind {
    /// Spectators watch; everyone else fights and occupies a zone.
    pub const fn is_combatant(&self) -> bool {
        !matches!(self, Self::Spectator)
    }
}

/// A user's participation in one arena game.
///
/// `weapons` and `items` are a view over the player's inventory rows. They are
/// only as fresh as the last `load_full_inventory` call made inside the
/// current transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaPlayer {
    pub id: PlayerId,
    pub game_id: GameId,
    pub user_id: UserId,
    pub profile: PlayerProfile,
    pub kind: ParticipantKind,
    pub health: u32,
    pub is_alive: bool,
    pub is_visible: bool,
    pub zone: Option<ZoneId>,
    pub weapons: Vec<OwnedItem>,
    pub items: Vec<OwnedItem>,
}

impl ArenaPlayer {
    /// Creates a living, visible player at `health` with an empty inventory.
    pub fn new(
        id: PlayerId,
        game_id: GameId,
        user_id: UserId,
        profile: PlayerProfile,
        health: u32,
    ) -> Self {
        Self {
            id,
            game_id,
            user_id,
            profile,
            kind: ParticipantKind::Player,
            health,
            is_alive: true,
            is_visible: true,
            zone: None,
            weapons: Vec::new(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ParticipantKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn slack_id(&self) -> &str {
        &self.profile.slack_id
    }

    pub fn mention(&self) -> String {
        self.profile.mention()
    }

    pub fn weapon(&self, item_id: ItemId) -> Option<&OwnedItem> {
        self.weapons.iter().find(|owned| owned.id() == item_id)
    }

    pub fn item(&self, item_id: ItemId) -> Option<&OwnedItem> {
        self.items.iter().find(|owned| owned.id() == item_id)
    }

    /// Applies a heal clamped to `max_health`; a dead player comes back alive.
    pub fn heal_or_revive(&mut self, amount: u32, max_health: u32) {
        self.health = self.health.saturating_add(amount).min(max_health);
        if self.health > 0 {
            self.is_alive = true;
        }
    }

    pub fn mark_dead(&mut self) {
        self.health = 0;
        self.is_alive = false;
    }
}
